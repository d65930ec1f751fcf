//! Terminal "canvas renderer" module.
//!
//! The board is drawn onto a small 2D canvas abstraction ([`Canvas`]) in
//! logical pixels. [`PixelCanvas`] rasterizes it at a device pixel ratio, and
//! [`GameView`] turns the pixels into a framebuffer of half-block glyphs that
//! [`TerminalRenderer`] flushes to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing code independent of the terminal (see [`RecordingCanvas`])
//! - Only rewrite the terminal cells that changed between frames

pub mod board;
pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod raster;
pub mod renderer;

pub use minesweeper_core as core;
pub use minesweeper_types as types;

pub use board::{draw, draw_cell, draw_grid};
pub use canvas::{Canvas, DrawCommand, Font, RecordingCanvas, Stroke};
pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell, TEXT, UPPER_HALF};
pub use game_view::{fit_pixel_ratio, GameView, Viewport, MIN_CELL_PX};
pub use raster::{PixelCanvas, TextRun};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
