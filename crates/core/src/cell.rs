//! A single grid square.

use crate::types::Pos;

/// One grid square.
///
/// Only the grid and the reveal engine mutate a cell; everything else sees it
/// through shared references. `is_bomb` and `nearby_bombs` are fixed once the
/// grid is generated, and `is_shown` only ever goes from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    x: u32,
    y: u32,
    size: u32,
    pub(crate) is_bomb: bool,
    pub(crate) is_shown: bool,
    pub(crate) nearby_bombs: u8,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize, size: u32) -> Self {
        Self {
            pos: Pos::new(row, col),
            x: col as u32 * size,
            y: row as u32 * size,
            size,
            is_bomb: false,
            is_shown: false,
            nearby_bombs: 0,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    /// Left edge in logical pixels.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Top edge in logical pixels.
    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_bomb(&self) -> bool {
        self.is_bomb
    }

    pub fn is_shown(&self) -> bool {
        self.is_shown
    }

    /// Bombs among the (up to 8) surrounding cells.
    pub fn nearby_bombs(&self) -> u8 {
        self.nearby_bombs
    }

    /// Mark the cell visible. Returns `true` if it was hidden before.
    pub(crate) fn show(&mut self) -> bool {
        !std::mem::replace(&mut self.is_shown, true)
    }
}
