//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **no dependencies** on terminals, canvases or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same bomb layout
//! - **Testable**: Time is passed in explicitly, nothing waits on a real clock
//! - **Portable**: Can run behind any surface (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: cells, bomb placement and neighbor counts
//! - [`reveal`]: iterative flood fill over zero-count regions
//! - [`session`]: the `Playing -> GameOver` input controller
//! - [`schedule`]: deferred actions and the frame ticker
//! - [`rng`]: seeded randomness for bomb placement
//! - [`config`] / [`error`]: board configuration and its validation
//!
//! # Example
//!
//! ```
//! use minesweeper_core::{Grid, GameSession};
//! use minesweeper_types::{GameStatus, Outcome, Pos, NOTIFY_DELAY_MS};
//!
//! // 3x3 board with a single bomb in the corner, 20px cells.
//! let grid = Grid::with_bombs(3, 3, 20, &[Pos::new(0, 0)]).unwrap();
//! let mut game = GameSession::from_grid(grid, 1.0).unwrap();
//!
//! // Clicking the opposite corner floods every safe cell: a win.
//! let status = game.pointer_down(50.0, 50.0, 0);
//! assert_eq!(status, Some(GameStatus::GameOver(Outcome::Won)));
//!
//! // The message shows up after the notification delay.
//! assert_eq!(game.poll_notification(NOTIFY_DELAY_MS), Some(Outcome::Won));
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod reveal;
pub mod rng;
pub mod schedule;
pub mod session;

pub use minesweeper_types as types;

// Re-export commonly used types for convenience
pub use cell::Cell;
pub use config::BoardConfig;
pub use error::ConfigError;
pub use grid::Grid;
pub use reveal::reveal;
pub use rng::BombRng;
pub use schedule::{DeferredQueue, FrameTicker};
pub use session::GameSession;
