//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Command`] and defines the [`InputSource`] seam
//! the driving loop reads commands through, with a terminal-backed source for
//! play and a scripted one for tests.

pub mod map;
pub mod source;

pub use block_drop_types as types;

pub use map::{map_key, should_quit};
pub use source::{InputSource, ScriptedInput, TerminalInput};
