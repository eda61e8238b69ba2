//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so the engine, the
//! terminal renderer and the input layer can share them freely.
//!
//! # Board Dimensions
//!
//! Classic single-ruleset playfield:
//!
//! - **Width**: 30 columns (indexed 0-29)
//! - **Height**: 30 rows (indexed 0-29, row 0 at the top)
//! - **Spawn position**: (13, 0), the top-left of a 4x4 bounding box
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BLOCK_SIZE` | 4 | Edge of a piece bounding box |
//! | `LINE_CLEAR_SCORE` | 100 | Points per cleared row, no multi-line bonus |
//! | `PREVIEW_DEPTH` | 3 | Minimum queue depth and preview length |
//! | `TICK_MS` | 200 | Default gravity interval of the driving loop |
//!
//! # Examples
//!
//! ```
//! use block_drop_types::{ColorTag, Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.index(), 2);
//! assert_eq!(piece.color(), ColorTag::Magenta);
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 30);
//! assert_eq!(BOARD_HEIGHT, 30);
//! assert_eq!(SPAWN_X, 13);
//! ```

/// Board width in cells (30 columns)
pub const BOARD_WIDTH: u8 = 30;

/// Board height in cells (30 rows)
pub const BOARD_HEIGHT: u8 = 30;

/// Edge length of the square bounding box every piece mask lives in.
pub const BLOCK_SIZE: usize = 4;

/// Spawn column: the bounding box is centered horizontally.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - (BLOCK_SIZE / 2) as i8;

/// Spawn row: pieces enter at the top edge.
pub const SPAWN_Y: i8 = 0;

/// Points awarded for each cleared row.
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Minimum number of upcoming pieces kept in the queue (and shown as preview).
pub const PREVIEW_DEPTH: usize = 3;

/// Default interval between gravity ticks in milliseconds.
pub const TICK_MS: u32 = 200;


/// The seven tetromino piece kinds
///
/// The declaration order is the template index (0-6) used by the shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in template-index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Template index (0-6).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind for a template index, `None` past 6.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Fixed color tag of this kind.
    ///
    /// ```
    /// use block_drop_types::{ColorTag, PieceKind};
    ///
    /// assert_eq!(PieceKind::I.color(), ColorTag::Cyan);
    /// assert_eq!(PieceKind::L.color(), ColorTag::Brown);
    /// ```
    pub const fn color(self) -> ColorTag {
        match self {
            PieceKind::I => ColorTag::Cyan,
            PieceKind::O => ColorTag::Yellow,
            PieceKind::T => ColorTag::Magenta,
            PieceKind::S => ColorTag::Green,
            PieceKind::Z => ColorTag::Red,
            PieceKind::J => ColorTag::Blue,
            PieceKind::L => ColorTag::Brown,
        }
    }
}

/// Color tag stored in occupied board cells.
///
/// Discriminants start at 1 so a `u8` grid can use 0 for "empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorTag {
    Cyan = 1,
    Yellow = 2,
    Magenta = 3,
    Green = 4,
    Red = 5,
    Blue = 6,
    Brown = 7,
}

impl ColorTag {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(ColorTag::Cyan),
            2 => Some(ColorTag::Yellow),
            3 => Some(ColorTag::Magenta),
            4 => Some(ColorTag::Green),
            5 => Some(ColorTag::Red),
            6 => Some(ColorTag::Blue),
            7 => Some(ColorTag::Brown),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(ColorTag)`: occupied, colored like the piece that locked there
pub type Cell = Option<ColorTag>;

/// Player commands produced by an input source
///
/// This is the closed set the engine understands. `Quit` never changes engine
/// state; it tells the driving loop to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise in place
    RotateCw,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Suspend gravity and movement
    Pause,
    /// Leave the paused state
    Resume,
    /// Set the active piece aside / swap with the held piece
    Hold,
    /// Stop the driving loop
    Quit,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::RotateCw,
        Command::HardDrop,
        Command::Pause,
        Command::Resume,
        Command::Hold,
        Command::Quit,
    ];

    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_drop_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATECW"), Some(Command::RotateCw));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotatecw" => Some(Command::RotateCw),
            "harddrop" => Some(Command::HardDrop),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "hold" => Some(Command::Hold),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateCw => "rotateCw",
            Command::HardDrop => "hardDrop",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Hold => "hold",
            Command::Quit => "quit",
        }
    }
}

/// Engine state machine phase
///
/// `Running` is initial, `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Running,
    Paused,
    GameOver,
}

/// Core-side event emitted after a piece locks.
///
/// Drained by the driving loop through `GameEngine::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Kind of the piece that locked
    pub kind: PieceKind,
    /// Rows removed by this lock
    pub lines_cleared: u32,
    /// Points added by this lock
    pub score_delta: u32,
    /// The replacement piece could not spawn; the game is over
    pub topped_out: bool,
}
