//! Configuration errors detected while building a game.

use thiserror::Error;

/// A board configuration that cannot produce a playable game.
///
/// All of these are fatal and are reported before the first frame is drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,

    #[error("board of {width}x{height}px holds no {cell_size}px cells")]
    EmptyGrid {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("{bombs} bombs do not fit on a board of {cells} cells")]
    TooManyBombs { bombs: usize, cells: usize },

    #[error("device pixel ratio must be finite and positive, got {0}")]
    InvalidPixelRatio(f32),

    #[error("terminal of {cols}x{rows} is too small, the board needs at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
}
