//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal, input, or other I/O:
//!
//! - **Deterministic**: Same seed produces the identical piece sequence
//! - **Testable**: Every rule is reachable without a terminal
//! - **Portable**: A renderer only ever sees a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`board`]: 30x30 board with collision detection and line clearing
//! - [`pieces`]: the seven 4x4 templates and clockwise rotation
//! - [`queue`]: uniform random piece queue with a preview lookahead
//! - [`hold`]: the once-per-spawn hold slot
//! - [`engine`]: complete game state, gravity, commands and the lock sequence
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is drawn independently, no 7-bag
//! - **Plain rotation**: clockwise only, rejected on collision (no wall kicks)
//! - **Immediate lock**: a piece locks on the first gravity tick it cannot fall
//! - **Ghost piece**: shows where the current piece will land
//! - **Hold**: store one piece for later use (once per piece)
//! - **Scoring**: 100 points per cleared row
//!
//! # Example
//!
//! ```
//! use block_drop_core::GameEngine;
//! use block_drop_types::Command;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.handle_command(Command::MoveRight);
//! game.handle_command(Command::RotateCw);
//! game.handle_command(Command::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! The engine has no clock. The driving loop calls
//! [`GameEngine::tick`](engine::GameEngine::tick) once per gravity interval.

pub mod board;
pub mod engine;
pub mod hold;
pub mod pieces;
pub mod queue;
pub mod snapshot;

pub use block_drop_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, Grid};
pub use engine::GameEngine;
pub use hold::HoldSlot;
pub use pieces::{rotate_cw, template, Mask, Piece};
pub use queue::PieceQueue;
pub use snapshot::GameSnapshot;
