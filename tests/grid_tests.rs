//! Grid and reveal properties checked over many random layouts

use minesweeper::core::{reveal, BoardConfig, BombRng, Grid};
use minesweeper::types::Pos;

fn generate(seed: u64) -> Grid {
    Grid::generate(&BoardConfig::default(), &mut BombRng::new(seed)).unwrap()
}

fn is_bomb(grid: &Grid, row: isize, col: isize) -> bool {
    if row < 0 || col < 0 {
        return false;
    }
    grid.get(Pos::new(row as usize, col as usize))
        .map(|c| c.is_bomb())
        .unwrap_or(false)
}

#[test]
fn test_neighbor_counts_equal_independent_recount() {
    for seed in 0..50 {
        let grid = generate(seed);
        for cell in grid.cells() {
            let (r, c) = (cell.row() as isize, cell.col() as isize);
            let mut expected = 0;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if (dr, dc) != (0, 0) && is_bomb(&grid, r + dr, c + dc) {
                        expected += 1;
                    }
                }
            }
            assert_eq!(
                cell.nearby_bombs(),
                expected,
                "seed {} cell ({}, {})",
                seed,
                r,
                c
            );
        }
    }
}

#[test]
fn test_bomb_placement_is_exact_and_distinct() {
    for seed in 0..50 {
        let grid = generate(seed);
        assert_eq!(grid.bomb_count(), 10, "seed {}", seed);
        assert_eq!(grid.shown_count(), 0);
    }
}

#[test]
fn test_same_seed_same_layout() {
    assert_eq!(generate(99), generate(99));
}

#[test]
fn test_generation_rejects_full_board() {
    let config = BoardConfig {
        bombs: 100,
        ..BoardConfig::default()
    };
    assert!(Grid::generate(&config, &mut BombRng::new(1)).is_err());
}

#[test]
fn test_flood_fill_region_is_closed_by_numbers() {
    for seed in 0..50 {
        let grid = generate(seed);
        let Some(start) = grid
            .cells()
            .iter()
            .find(|c| !c.is_bomb() && c.nearby_bombs() == 0)
            .map(|c| c.pos())
        else {
            continue;
        };

        let mut grid = grid;
        let newly = reveal(&mut grid, start);
        assert_eq!(newly, grid.shown_count());

        for cell in grid.cells().iter().filter(|c| c.is_shown()) {
            // Propagation never reaches a bomb.
            assert!(!cell.is_bomb(), "seed {} revealed a bomb", seed);

            // Zero cells are fully expanded.
            if cell.nearby_bombs() == 0 {
                for n in grid.neighbors(cell.pos()) {
                    assert!(grid.get(n).unwrap().is_shown());
                }
            }

            // Every revealed cell other than the start was reached from a
            // revealed zero neighbor: nothing leaks past a numbered cell.
            if cell.pos() != start {
                assert!(grid
                    .neighbors(cell.pos())
                    .iter()
                    .any(|&n| {
                        let n = grid.get(n).unwrap();
                        n.is_shown() && n.nearby_bombs() == 0
                    }));
            }
        }
    }
}

#[test]
fn test_reveal_twice_changes_nothing() {
    let mut grid = generate(5);
    let pos = grid
        .cells()
        .iter()
        .find(|c| !c.is_bomb())
        .map(|c| c.pos())
        .unwrap();
    reveal(&mut grid, pos);
    let before = grid.clone();
    assert_eq!(reveal(&mut grid, pos), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_one_hidden_safe_cell_is_not_a_win() {
    // Bomb | 1 | 0: revealing the numbered cell leaves the zero hidden.
    let mut grid = Grid::with_bombs(1, 3, 20, &[Pos::new(0, 0)]).unwrap();
    reveal(&mut grid, Pos::new(0, 1));
    assert!(!grid.get(Pos::new(0, 2)).unwrap().is_shown());
    assert!(!grid.is_win());
    reveal(&mut grid, Pos::new(0, 2));
    assert!(grid.is_win());
}
