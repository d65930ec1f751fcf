//! Minesweeper (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `minesweeper::{core,input,term,types}` and owns the
//! runtime configuration read from the environment.

pub mod config;

pub use minesweeper_core as core;
pub use minesweeper_input as input;
pub use minesweeper_term as term;
pub use minesweeper_types as types;
