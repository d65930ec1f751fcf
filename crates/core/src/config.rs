//! Board configuration.
//!
//! The values are compile-time constants (see `minesweeper_types`); this type
//! only gathers them and validates them once at startup.

use crate::error::ConfigError;
use crate::types::{BOARD_HEIGHT_PX, BOARD_WIDTH_PX, BOMB_COUNT, CELL_SIZE_PX};

/// Dimensions of the board in logical pixels plus the bomb count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub bombs: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH_PX,
            height: BOARD_HEIGHT_PX,
            cell_size: CELL_SIZE_PX,
            bombs: BOMB_COUNT,
        }
    }
}

impl BoardConfig {
    /// Grid rows: `floor(height / cell_size)`.
    pub fn rows(&self) -> usize {
        self.height.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    /// Grid columns: `floor(width / cell_size)`.
    pub fn cols(&self) -> usize {
        self.width.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    /// Check the grid shape only (bomb count is checked at placement).
    pub fn validate_shape(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.rows() == 0 || self.cols() == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    /// Full validation: grid shape and bomb count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_shape()?;
        let cells = self.rows() * self.cols();
        if self.bombs >= cells {
            return Err(ConfigError::TooManyBombs {
                bombs: self.bombs,
                cells,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = BoardConfig::default();
        assert_eq!(config.rows(), 10);
        assert_eq!(config.cols(), 10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_cells_are_floored_away() {
        let config = BoardConfig {
            width: 215,
            height: 199,
            cell_size: 20,
            bombs: 1,
        };
        assert_eq!(config.cols(), 10);
        assert_eq!(config.rows(), 9);
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let config = BoardConfig {
            cell_size: 0,
            ..BoardConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn board_smaller_than_one_cell_is_rejected() {
        let config = BoardConfig {
            width: 19,
            ..BoardConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { width: 19, .. })
        ));
    }

    #[test]
    fn bombs_must_leave_a_free_cell() {
        let config = BoardConfig {
            bombs: 100,
            ..BoardConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyBombs {
                bombs: 100,
                cells: 100
            })
        );

        let config = BoardConfig {
            bombs: 99,
            ..BoardConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
