//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout libraries and instead renders into a simple framebuffer that
//! is flushed to the terminal with crossterm.
//!
//! - [`GameView`] is pure layout: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal and implements [`Renderer`]
//! - Board cells are 2 chars wide to keep the 30x30 board roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_drop_core as core;
pub use block_drop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, CONTROLS};
pub use renderer::{encode_diff_into, encode_full_into, Renderer, TerminalRenderer};
