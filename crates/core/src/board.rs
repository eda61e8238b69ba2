//! Board module - manages the game grid
//!
//! The board is a 30x30 grid where each cell is empty or holds the color of the
//! piece that locked there. Uses a flat array for cache locality and zero
//! allocation.
//! Coordinates: (x, y) where x ranges 0..29 (left to right), y ranges 0..29
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Number of columns as an index type.
pub const BOARD_COLS: usize = BOARD_WIDTH as usize;

/// Number of rows as an index type.
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// Row indices removed by one [`Board::clear_full_rows`] pass, top to bottom.
pub type ClearedRows = ArrayVec<usize, BOARD_ROWS>;

/// Row-major 2D copy of the board, used by snapshots.
pub type Grid = [[Cell; BOARD_COLS]; BOARD_ROWS];

/// The game board - 30 columns x 30 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        let start = y * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Check whether `piece`'s mask fits with its bounding box at `(x, y)`.
    ///
    /// Every occupied cell must land inside the columns and above the floor,
    /// and must not overlap a locked cell. Cells above the top edge (`y < 0`)
    /// are only checked against the side walls.
    pub fn is_valid_placement(&self, piece: &Piece, x: i8, y: i8) -> bool {
        piece.cells().all(|(dx, dy)| {
            let gx = x + dx;
            let gy = y + dy;
            if gx < 0 || gx >= BOARD_WIDTH as i8 || gy >= BOARD_HEIGHT as i8 {
                return false;
            }
            gy < 0 || !self.is_occupied(gx, gy)
        })
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// Callers validate the placement first; cells outside the grid are
    /// skipped instead of indexed.
    pub fn merge(&mut self, piece: &Piece) {
        debug_assert!(
            self.is_valid_placement(piece, piece.x, piece.y),
            "merge of an invalid placement: {:?}",
            piece
        );
        let color = Some(piece.color());
        for (dx, dy) in piece.cells() {
            self.set(piece.x + dx, piece.y + dy, color);
        }
    }

    /// Clear all full rows and return the row indices that were cleared (top to bottom)
    ///
    /// Remaining rows keep their order and settle at the bottom; the freed rows
    /// reappear empty at the top. Uses a two-pointer pass with zero allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = BOARD_ROWS;

        // Scan from bottom to top
        for read_y in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * BOARD_COLS;
                    let dst_start = write_y * BOARD_COLS;
                    self.cells
                        .copy_within(src_start..src_start + BOARD_COLS, dst_start);
                }
            }
        }

        // Everything above the last written row is now free.
        for cell in &mut self.cells[..write_y * BOARD_COLS] {
            *cell = None;
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a 2D grid without allocating.
    pub fn write_grid(&self, out: &mut Grid) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(BOARD_COLS)) {
            row.copy_from_slice(chunk);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with one color (test setup helper)
    #[cfg(test)]
    pub(crate) fn fill_row(&mut self, y: i8, cell: Cell) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, cell);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
