//! Reveal engine - flood fill over zero-count regions
//!
//! Revealing a cell shows it; if it has no bombs around it, its neighbors are
//! revealed too, and so on. The traversal uses an explicit stack so large
//! grids cannot overflow the call stack.

use tracing::trace;

use crate::grid::Grid;
use crate::types::Pos;

/// Reveal `start` and every cell connected to it through zero-count cells.
///
/// Returns the number of cells that went from hidden to shown. A start
/// outside the grid reveals nothing. Cells already shown are left untouched,
/// so revealing the same cell twice is a no-op the second time.
///
/// Bombs are shown when popped but never expanded from.
pub fn reveal(grid: &mut Grid, start: Pos) -> usize {
    if !grid.contains(start) {
        return 0;
    }

    let cols = grid.cols();
    let mut visited = vec![false; grid.len()];
    let mut stack = vec![start];
    visited[start.index(cols)] = true;
    let mut newly_shown = 0;

    while let Some(pos) = stack.pop() {
        let Some(cell) = grid.get_mut(pos) else {
            continue;
        };
        if cell.is_shown() {
            continue;
        }
        cell.show();
        newly_shown += 1;

        if cell.is_bomb() || cell.nearby_bombs() != 0 {
            continue;
        }

        for next in grid.neighbors(pos) {
            let seen = &mut visited[next.index(cols)];
            if !*seen {
                *seen = true;
                stack.push(next);
            }
        }
    }

    trace!(row = start.row, col = start.col, newly_shown, "reveal");
    newly_shown
}
