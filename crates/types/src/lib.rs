//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, canvas rendering, terminal input).
//!
//! # Board Dimensions
//!
//! The board is described in *logical pixels*, the same way the canvas is:
//!
//! - **Width**: 200 px
//! - **Height**: 200 px
//! - **Cell size**: 20 px (which yields a 10x10 grid)
//! - **Bombs**: 10
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Redraw interval (~60 FPS) |
//! | `NOTIFY_DELAY_MS` | 100 | Delay between the final click and the end-of-game message |
//!
//! # Examples
//!
//! ```
//! use minesweeper_types::{Outcome, Pos, BOARD_COLS, BOARD_ROWS};
//!
//! let pos = Pos::new(3, 4);
//! assert_eq!(pos.index(BOARD_COLS), 34);
//!
//! assert_eq!(Outcome::Lost.message(), "Game Over");
//! assert_eq!(Outcome::Won.message(), "You Win!");
//!
//! assert_eq!(BOARD_COLS, 10);
//! assert_eq!(BOARD_ROWS, 10);
//! ```

/// Canvas width in logical pixels
pub const BOARD_WIDTH_PX: u32 = 200;

/// Canvas height in logical pixels
pub const BOARD_HEIGHT_PX: u32 = 200;

/// Side length of one cell in logical pixels
pub const CELL_SIZE_PX: u32 = 20;

/// Number of bombs placed at startup
pub const BOMB_COUNT: usize = 10;

/// Grid columns for the default board (`floor(width / size)`)
pub const BOARD_COLS: usize = (BOARD_WIDTH_PX / CELL_SIZE_PX) as usize;

/// Grid rows for the default board (`floor(height / size)`)
pub const BOARD_ROWS: usize = (BOARD_HEIGHT_PX / CELL_SIZE_PX) as usize;

/// Redraw interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Delay before the end-of-game notification is shown.
///
/// Gives the renderer a chance to present the final board first.
pub const NOTIFY_DELAY_MS: u64 = 100;


/// A grid coordinate: `row` grows downwards, `col` grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat row-major index for a grid with `cols` columns.
    #[inline(always)]
    pub const fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of [`Pos::index`].
    #[inline(always)]
    pub const fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A bomb was revealed
    Lost,
    /// Every non-bomb cell was revealed
    Won,
}

impl Outcome {
    /// Literal text of the end-of-game notification.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Lost => "Game Over",
            Outcome::Won => "You Win!",
        }
    }
}

/// Game status as seen by the input controller.
///
/// `GameOver` is terminal: nothing leads back to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    GameOver(Outcome),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::GameOver(_))
    }
}

/// Kind of pointer event consumed by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    Down,
}

/// A pointer event targeting the canvas.
///
/// `x`/`y` are device pixels relative to the canvas origin. Converting to
/// logical pixels (dividing by the device pixel ratio) is left to the
/// controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }
}

/// Placement of the canvas inside the terminal.
///
/// The canvas occupies `device_w` terminal columns and `device_h / 2`
/// terminal rows (two device pixel rows per terminal row) starting at
/// `(origin_x, origin_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub device_w: u16,
    pub device_h: u16,
}

impl CanvasLayout {
    /// Terminal rows covered by the canvas.
    pub fn term_rows(&self) -> u16 {
        self.device_h.div_ceil(2)
    }

    /// Whether the terminal cell `(col, row)` lies on the canvas.
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.origin_x
            && row >= self.origin_y
            && col - self.origin_x < self.device_w
            && row - self.origin_y < self.term_rows()
    }
}
