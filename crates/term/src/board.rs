//! Board renderer: draws grid cells onto a [`Canvas`].
//!
//! Drawing is a pure function of the grid. Calling [`draw`] twice with the
//! same grid produces the same output.

use crate::canvas::{Canvas, Font, Stroke};
use crate::core::{Cell, Grid};
use crate::fb::Rgb;

/// Fill of a revealed cell (`#CCCCCC`)
pub const SHOWN_FILL: Rgb = Rgb::from_hex(0xCCCCCC);

/// Fill of a hidden cell (`#FFFFFF`)
pub const HIDDEN_FILL: Rgb = Rgb::from_hex(0xFFFFFF);

/// Cell outline and bomb glyph
pub const OUTLINE: Stroke = Stroke {
    color: Rgb::BLACK,
    width: 2.0,
};

/// Font of the nearby-bomb count
pub const COUNT_FONT: Font = Font {
    color: Rgb::BLACK,
    size_px: 14.0,
};

/// Draw one cell: square, then its glyph if revealed.
pub fn draw_cell<C: Canvas + ?Sized>(canvas: &mut C, cell: &Cell) {
    let x = cell.x() as f32;
    let y = cell.y() as f32;
    let size = cell.size() as f32;

    let fill = if cell.is_shown() {
        SHOWN_FILL
    } else {
        HIDDEN_FILL
    };
    canvas.fill_rect(x, y, size, size, fill);
    canvas.stroke_rect(x, y, size, size, OUTLINE);

    if !cell.is_shown() {
        return;
    }

    let (cx, cy) = (x + size / 2.0, y + size / 2.0);
    if cell.is_bomb() {
        canvas.stroke_circle(cx, cy, size / 4.0, OUTLINE);
    } else if cell.nearby_bombs() > 0 {
        canvas.fill_text(&cell.nearby_bombs().to_string(), cx, cy, COUNT_FONT);
    }
}

/// Draw every cell, row-major.
pub fn draw_grid<C: Canvas + ?Sized>(canvas: &mut C, grid: &Grid) {
    for cell in grid.cells() {
        draw_cell(canvas, cell);
    }
}

/// Clear the whole canvas, then draw the grid.
pub fn draw<C: Canvas + ?Sized>(canvas: &mut C, grid: &Grid) {
    canvas.clear();
    draw_grid(canvas, grid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use crate::core::reveal;
    use crate::types::Pos;

    fn grid_with_corner_bomb() -> Grid {
        Grid::with_bombs(3, 3, 20, &[Pos::new(0, 0)]).unwrap()
    }

    fn commands_for(grid: &Grid, pos: Pos) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new(60.0, 60.0);
        draw_cell(&mut canvas, grid.get(pos).unwrap());
        canvas.take_commands()
    }

    #[test]
    fn hidden_cell_is_a_plain_white_square() {
        let grid = grid_with_corner_bomb();
        let cmds = commands_for(&grid, Pos::new(1, 2));
        assert_eq!(
            cmds,
            vec![
                DrawCommand::FillRect {
                    x: 40.0,
                    y: 20.0,
                    w: 20.0,
                    h: 20.0,
                    color: HIDDEN_FILL
                },
                DrawCommand::StrokeRect {
                    x: 40.0,
                    y: 20.0,
                    w: 20.0,
                    h: 20.0,
                    stroke: OUTLINE
                },
            ]
        );
    }

    #[test]
    fn shown_bomb_draws_centered_circle() {
        let mut grid = grid_with_corner_bomb();
        reveal(&mut grid, Pos::new(0, 0));
        let cmds = commands_for(&grid, Pos::new(0, 0));
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[0], DrawCommand::FillRect { color, .. } if color == SHOWN_FILL));
        assert_eq!(
            cmds[2],
            DrawCommand::StrokeCircle {
                cx: 10.0,
                cy: 10.0,
                radius: 5.0,
                stroke: OUTLINE
            }
        );
    }

    #[test]
    fn shown_number_draws_count_text() {
        let mut grid = grid_with_corner_bomb();
        reveal(&mut grid, Pos::new(1, 1));
        let cmds = commands_for(&grid, Pos::new(1, 1));
        assert_eq!(
            cmds[2],
            DrawCommand::FillText {
                text: "1".to_string(),
                cx: 30.0,
                cy: 30.0,
                font: COUNT_FONT
            }
        );
    }

    #[test]
    fn shown_zero_has_no_glyph() {
        let mut grid = grid_with_corner_bomb();
        reveal(&mut grid, Pos::new(2, 2));
        let cmds = commands_for(&grid, Pos::new(2, 2));
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn draw_clears_then_covers_every_cell() {
        let grid = grid_with_corner_bomb();
        let mut canvas = RecordingCanvas::new(60.0, 60.0);
        draw(&mut canvas, &grid);
        let cmds = canvas.commands();
        assert!(matches!(cmds[0], DrawCommand::ClearRect { w, h, .. } if w == 60.0 && h == 60.0));
        let fills = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(fills, 9);
    }
}
