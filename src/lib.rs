//! Block Drop (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and hosts the driving loop
//! ([`app::run`]) shared by the binary and the integration tests.

pub mod app;

pub use block_drop_core as core;
pub use block_drop_input as input;
pub use block_drop_term as term;
pub use block_drop_types as types;
