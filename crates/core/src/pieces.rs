//! Pieces module - tetromino templates and mask rotation
//!
//! Every piece lives in a fixed 4x4 bounding box. Rotation is a pure
//! transpose-and-flip of that box; there is no kick table, so a rotation that
//! collides at the current position is simply rejected by the engine.

use crate::types::{ColorTag, PieceKind, BLOCK_SIZE, SPAWN_X, SPAWN_Y};

/// 4x4 occupancy pattern, indexed `[row][col]`.
pub type Mask = [[bool; BLOCK_SIZE]; BLOCK_SIZE];

const X: bool = true;
const O: bool = false;

/// Unrotated reference masks, indexed by [`PieceKind::index`].
pub const SHAPES: [Mask; 7] = [
    // I
    [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
    // O
    [[O, O, O, O], [O, X, X, O], [O, X, X, O], [O, O, O, O]],
    // T
    [[O, O, O, O], [O, X, O, O], [X, X, X, O], [O, O, O, O]],
    // S
    [[O, O, O, O], [O, X, X, O], [X, X, O, O], [O, O, O, O]],
    // Z
    [[O, O, O, O], [X, X, O, O], [O, X, X, O], [O, O, O, O]],
    // J
    [[O, O, O, O], [X, O, O, O], [X, X, X, O], [O, O, O, O]],
    // L
    [[O, O, O, O], [O, O, X, O], [X, X, X, O], [O, O, O, O]],
];

const fn count_cells(mask: &Mask) -> usize {
    let mut n = 0;
    let mut i = 0;
    while i < BLOCK_SIZE {
        let mut j = 0;
        while j < BLOCK_SIZE {
            if mask[i][j] {
                n += 1;
            }
            j += 1;
        }
        i += 1;
    }
    n
}

const fn templates_are_tetrominoes() -> bool {
    let mut k = 0;
    while k < SHAPES.len() {
        if count_cells(&SHAPES[k]) != 4 {
            return false;
        }
        k += 1;
    }
    true
}

const _: () = assert!(templates_are_tetrominoes(), "every template must have 4 cells");

/// Template mask for a piece kind.
pub fn template(kind: PieceKind) -> Mask {
    SHAPES[kind.index()]
}

/// Rotate a mask 90° clockwise inside its bounding box.
///
/// `result[j][3 - i] = source[i][j]`. Applying it four times is the identity.
pub fn rotate_cw(source: &Mask) -> Mask {
    let mut out = [[false; BLOCK_SIZE]; BLOCK_SIZE];
    for (i, row) in source.iter().enumerate() {
        for (j, &filled) in row.iter().enumerate() {
            out[j][BLOCK_SIZE - 1 - i] = filled;
        }
    }
    out
}

/// Occupied `(col, row)` offsets of a mask, row-major.
pub fn mask_cells(mask: &Mask) -> impl Iterator<Item = (i8, i8)> + '_ {
    mask.iter().enumerate().flat_map(|(i, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(j, _)| (j as i8, i as i8))
    })
}

/// A tetromino instance: kind, current mask and bounding-box position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece at the spawn position with its template mask.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            mask: template(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn color(&self) -> ColorTag {
        self.kind.color()
    }

    /// Occupied `(col, row)` offsets relative to the bounding box.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        mask_cells(&self.mask)
    }

    /// Same piece with the mask rotated clockwise; position unchanged.
    pub fn rotated(&self) -> Self {
        Self {
            mask: rotate_cw(&self.mask),
            ..*self
        }
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same kind and mask, moved back to the spawn position.
    pub fn at_spawn(&self) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            ..*self
        }
    }

    /// Index of the lowest occupied mask row, if any.
    pub fn lowest_row(&self) -> Option<usize> {
        self.mask.iter().rposition(|row| row.iter().any(|&c| c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_four_times_is_identity() {
        for kind in PieceKind::ALL {
            let start = template(kind);
            let mut m = start;
            for _ in 0..4 {
                m = rotate_cw(&m);
            }
            assert_eq!(m, start, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let vertical = rotate_cw(&template(PieceKind::I));
        // Row 1 of the source ends up in column 2.
        for row in vertical.iter() {
            assert_eq!(row, &[false, false, true, false]);
        }
    }

    #[test]
    fn test_rotate_preserves_cell_count() {
        for kind in PieceKind::ALL {
            let rotated = rotate_cw(&template(kind));
            assert_eq!(mask_cells(&rotated).count(), 4);
        }
    }

    #[test]
    fn test_spawn_uses_template_and_spawn_position() {
        let piece = Piece::spawn(PieceKind::T);
        assert_eq!(piece.mask, SHAPES[2]);
        assert_eq!((piece.x, piece.y), (13, 0));
        assert_eq!(piece.color(), ColorTag::Magenta);
    }

    #[test]
    fn test_cells_are_row_major() {
        let piece = Piece::spawn(PieceKind::T);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(1, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_at_spawn_keeps_mask() {
        let moved = Piece::spawn(PieceKind::L).rotated().shifted(-5, 9);
        let back = moved.at_spawn();
        assert_eq!(back.mask, moved.mask);
        assert_eq!((back.x, back.y), (SPAWN_X, SPAWN_Y));
    }

    #[test]
    fn test_lowest_row() {
        assert_eq!(Piece::spawn(PieceKind::I).lowest_row(), Some(1));
        assert_eq!(Piece::spawn(PieceKind::O).lowest_row(), Some(2));
        assert_eq!(Piece::spawn(PieceKind::I).rotated().lowest_row(), Some(3));
    }
}
