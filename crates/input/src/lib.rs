//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` mouse events onto the canvas as [`crate::types::PointerEvent`]s
//! and recognizes the quit keys.

pub mod map;

pub use minesweeper_types as types;

pub use map::{is_dismiss, map_mouse_event, should_quit};
