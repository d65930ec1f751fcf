//! Grid module - owns every cell of the board
//!
//! The grid is `rows x cols` cells stored in a flat `Vec`, row-major
//! (`row * cols + col`). Its shape is fixed at construction; bombs are placed
//! once and neighbor counts computed once right after.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::cell::Cell;
use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::rng::BombRng;
use crate::types::Pos;

/// Offsets of the Moore neighborhood (the 8 surrounding cells)
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The game grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cell_size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a bomb-free, fully hidden grid for `config`.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate_shape()?;
        Ok(Self::build(config.rows(), config.cols(), config.cell_size))
    }

    /// Build a ready-to-play grid: cells, random bombs, neighbor counts.
    pub fn generate(config: &BoardConfig, rng: &mut BombRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = Self::new(config)?;
        grid.place_bombs(config.bombs, rng)?;
        grid.compute_neighbor_counts();
        debug!(
            rows = grid.rows,
            cols = grid.cols,
            bombs = config.bombs,
            seed = rng.seed(),
            "grid generated"
        );
        Ok(grid)
    }

    /// Build a ready-to-play grid with bombs at exactly `bombs`.
    ///
    /// Positions outside the grid are ignored, duplicates count once.
    pub fn with_bombs(
        rows: usize,
        cols: usize,
        cell_size: u32,
        bombs: &[Pos],
    ) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid {
                width: cols as u32 * cell_size,
                height: rows as u32 * cell_size,
                cell_size,
            });
        }

        let mut grid = Self::build(rows, cols, cell_size);
        for &pos in bombs {
            if let Some(i) = grid.index(pos) {
                grid.cells[i].is_bomb = true;
            }
        }
        let placed = grid.bomb_count();
        if placed >= grid.len() {
            return Err(ConfigError::TooManyBombs {
                bombs: placed,
                cells: grid.len(),
            });
        }
        grid.compute_neighbor_counts();
        Ok(grid)
    }

    fn build(rows: usize, cols: usize, cell_size: u32) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row, col, cell_size));
            }
        }
        Self {
            rows,
            cols,
            cell_size,
            cells,
        }
    }

    /// Mark `count` distinct, not-yet-bomb cells as bombs.
    ///
    /// Each pick draws a uniform index from the pool of remaining candidates
    /// and removes it, so no cell is selected twice. At least one cell must
    /// stay bomb-free.
    pub fn place_bombs(&mut self, count: usize, rng: &mut BombRng) -> Result<(), ConfigError> {
        let existing = self.bomb_count();
        if existing + count >= self.len() {
            return Err(ConfigError::TooManyBombs {
                bombs: existing + count,
                cells: self.len(),
            });
        }

        let mut pool: Vec<usize> = (0..self.cells.len())
            .filter(|&i| !self.cells[i].is_bomb)
            .collect();
        for _ in 0..count {
            let pick = rng.next_index(pool.len());
            let index = pool.swap_remove(pick);
            self.cells[index].is_bomb = true;
        }
        Ok(())
    }

    /// Store, for every cell, the number of bombs among its neighbors.
    pub fn compute_neighbor_counts(&mut self) {
        for i in 0..self.cells.len() {
            let pos = Pos::from_index(i, self.cols);
            let count = self
                .neighbors(pos)
                .iter()
                .filter(|&&n| self.cells[n.index(self.cols)].is_bomb)
                .count();
            self.cells[i].nearby_bombs = count as u8;
        }
    }

    /// Calculate flat index from a position, `None` if out of bounds
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.index(self.cols))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// Get the cell at `pos`, `None` if out of bounds
    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub(crate) fn get_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        self.index(pos).map(move |i| &mut self.cells[i])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// In-bounds Moore neighbors of `pos` (edges and corners have fewer).
    pub fn neighbors(&self, pos: Pos) -> ArrayVec<Pos, 8> {
        let mut out = ArrayVec::new();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(row), Some(col)) = (
                pos.row.checked_add_signed(dr),
                pos.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            if row < self.rows && col < self.cols {
                out.push(Pos::new(row, col));
            }
        }
        out
    }

    /// Cell under the logical pixel `(x, y)`, `None` outside the grid.
    pub fn pos_at(&self, x: f32, y: f32) -> Option<Pos> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }
        let size = self.cell_size as f32;
        let pos = Pos::new((y / size).floor() as usize, (x / size).floor() as usize);
        self.contains(pos).then_some(pos)
    }

    pub fn bomb_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_bomb).count()
    }

    pub fn shown_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_shown).count()
    }

    /// `true` iff every non-bomb cell is shown.
    pub fn is_win(&self) -> bool {
        self.cells.iter().all(|c| c.is_bomb || c.is_shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recount(grid: &Grid, pos: Pos) -> u8 {
        let mut count = 0;
        for row in pos.row.saturating_sub(1)..=(pos.row + 1).min(grid.rows() - 1) {
            for col in pos.col.saturating_sub(1)..=(pos.col + 1).min(grid.cols() - 1) {
                if (row, col) != (pos.row, pos.col) && grid.get(Pos::new(row, col)).unwrap().is_bomb() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_new_grid_is_hidden_and_bomb_free() {
        let grid = Grid::new(&BoardConfig::default()).unwrap();
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 10);
        assert_eq!(grid.len(), 100);
        assert!(grid.cells().iter().all(|c| !c.is_bomb() && !c.is_shown()));
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = Grid::new(&BoardConfig::default()).unwrap();
        for (i, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.pos(), Pos::from_index(i, 10));
            assert_eq!(cell.x(), cell.col() as u32 * 20);
            assert_eq!(cell.y(), cell.row() as u32 * 20);
        }
    }

    #[test]
    fn test_place_bombs_selects_distinct_cells() {
        for seed in 0..20 {
            let mut grid = Grid::new(&BoardConfig::default()).unwrap();
            grid.place_bombs(10, &mut BombRng::new(seed)).unwrap();
            assert_eq!(grid.bomb_count(), 10);
        }
    }

    #[test]
    fn test_bombs_stay_hidden_after_placement() {
        let grid = Grid::generate(&BoardConfig::default(), &mut BombRng::new(3)).unwrap();
        assert_eq!(grid.shown_count(), 0);
    }

    #[test]
    fn test_place_bombs_rejects_full_board() {
        let mut grid = Grid::new(&BoardConfig::default()).unwrap();
        let err = grid.place_bombs(100, &mut BombRng::new(1)).unwrap_err();
        assert_eq!(err, ConfigError::TooManyBombs { bombs: 100, cells: 100 });
        assert_eq!(grid.bomb_count(), 0);
    }

    #[test]
    fn test_place_bombs_can_fill_all_but_one() {
        let mut grid = Grid::new(&BoardConfig::default()).unwrap();
        grid.place_bombs(99, &mut BombRng::new(1)).unwrap();
        assert_eq!(grid.bomb_count(), 99);
    }

    #[test]
    fn test_neighbor_counts_match_recount() {
        for seed in 0..10 {
            let grid = Grid::generate(&BoardConfig::default(), &mut BombRng::new(seed)).unwrap();
            for cell in grid.cells() {
                assert_eq!(cell.nearby_bombs(), recount(&grid, cell.pos()), "at {:?}", cell.pos());
            }
        }
    }

    #[test]
    fn test_neighbors_are_clamped_at_edges() {
        let grid = Grid::new(&BoardConfig::default()).unwrap();
        assert_eq!(grid.neighbors(Pos::new(0, 0)).len(), 3);
        assert_eq!(grid.neighbors(Pos::new(0, 5)).len(), 5);
        assert_eq!(grid.neighbors(Pos::new(9, 9)).len(), 3);
        assert_eq!(grid.neighbors(Pos::new(4, 4)).len(), 8);
        assert!(!grid.neighbors(Pos::new(4, 4)).contains(&Pos::new(4, 4)));
    }

    #[test]
    fn test_with_bombs_counts_neighbors() {
        let grid = Grid::with_bombs(3, 3, 20, &[Pos::new(0, 0), Pos::new(2, 2)]).unwrap();
        assert_eq!(grid.get(Pos::new(1, 1)).unwrap().nearby_bombs(), 2);
        assert_eq!(grid.get(Pos::new(0, 2)).unwrap().nearby_bombs(), 0);
        assert_eq!(grid.get(Pos::new(0, 1)).unwrap().nearby_bombs(), 1);
    }

    #[test]
    fn test_with_bombs_ignores_out_of_bounds() {
        let grid = Grid::with_bombs(2, 2, 20, &[Pos::new(5, 5), Pos::new(1, 1)]).unwrap();
        assert_eq!(grid.bomb_count(), 1);
    }

    #[test]
    fn test_pos_at_maps_pixels_to_cells() {
        let grid = Grid::new(&BoardConfig::default()).unwrap();
        assert_eq!(grid.pos_at(0.0, 0.0), Some(Pos::new(0, 0)));
        assert_eq!(grid.pos_at(39.9, 20.0), Some(Pos::new(1, 1)));
        assert_eq!(grid.pos_at(199.0, 199.0), Some(Pos::new(9, 9)));
        assert_eq!(grid.pos_at(200.0, 10.0), None);
        assert_eq!(grid.pos_at(-1.0, 10.0), None);
        assert_eq!(grid.pos_at(f32::NAN, 10.0), None);
    }

    #[test]
    fn test_win_requires_every_safe_cell() {
        let mut grid = Grid::with_bombs(2, 2, 20, &[Pos::new(0, 0)]).unwrap();
        assert!(!grid.is_win());
        for pos in [Pos::new(0, 1), Pos::new(1, 0)] {
            grid.get_mut(pos).unwrap().show();
        }
        assert!(!grid.is_win());
        grid.get_mut(Pos::new(1, 1)).unwrap().show();
        assert!(grid.is_win());
    }
}
