//! GameView: draws the board onto a pixel canvas and presents it in a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::board;
use crate::core::{BoardConfig, ConfigError, Grid};
use crate::fb::{CellStyle, FrameBuffer, Rgb, TEXT};
use crate::raster::PixelCanvas;
use crate::types::{CanvasLayout, GameStatus, Outcome};

/// Largest device pixel ratio used in a terminal.
const MAX_RATIO: f32 = 1.0;

/// Terminal rows kept free below the canvas for the status line.
const STATUS_ROWS: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Fewest device pixels per cell that keep a cell interior visible inside
/// its outline.
pub const MIN_CELL_PX: u32 = 3;

/// Pick the largest device pixel ratio at which the board fits `viewport`.
///
/// One terminal column is one device pixel wide and one terminal row is two
/// device pixels tall. The ratio is a whole number of device pixels per cell,
/// at least [`MIN_CELL_PX`]; a terminal that cannot hold that is an error.
pub fn fit_pixel_ratio(viewport: Viewport, config: &BoardConfig) -> Result<f32, ConfigError> {
    config.validate_shape()?;
    let step = 1.0 / config.cell_size as f32;
    let avail_w = viewport.width as f32;
    let avail_h = viewport.height.saturating_sub(STATUS_ROWS) as f32 * 2.0;
    let fit = (avail_w / config.width as f32)
        .min(avail_h / config.height as f32)
        .min(MAX_RATIO);
    let steps = (fit / step + 1e-4).floor().max(0.0) as u32;

    if steps < MIN_CELL_PX {
        let (min_cols, min_rows) = min_terminal_size(config);
        return Err(ConfigError::TerminalTooSmall {
            cols: viewport.width,
            rows: viewport.height,
            min_cols,
            min_rows,
        });
    }
    Ok(steps as f32 * step)
}

/// Terminal size needed to draw `config` at [`MIN_CELL_PX`] per cell.
fn min_terminal_size(config: &BoardConfig) -> (u16, u16) {
    let device_w = (config.width * MIN_CELL_PX).div_ceil(config.cell_size);
    let device_h = (config.height * MIN_CELL_PX).div_ceil(config.cell_size);
    let rows = device_h.div_ceil(2) + STATUS_ROWS as u32;
    let clamp = |v: u32| v.min(u16::MAX as u32) as u16;
    (clamp(device_w), clamp(rows))
}

/// Renders a game into a terminal framebuffer.
pub struct GameView {
    canvas: PixelCanvas,
}

impl GameView {
    pub fn new(config: &BoardConfig, ratio: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            canvas: PixelCanvas::new(config.width, config.height, ratio, Rgb::WHITE)?,
        })
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Where the canvas lands in `viewport` (centered, status line below).
    pub fn layout(&self, viewport: Viewport) -> CanvasLayout {
        let device_w = self.canvas.device_width().min(u16::MAX as usize) as u16;
        let device_h = self.canvas.device_height().min(u16::MAX as usize) as u16;
        let rows = device_h.div_ceil(2);
        CanvasLayout {
            origin_x: viewport.width.saturating_sub(device_w) / 2,
            origin_y: viewport.height.saturating_sub(rows + STATUS_ROWS) / 2,
            device_w,
            device_h,
        }
    }

    /// Redraw the grid and present it into `fb`.
    ///
    /// `message` is the end-of-game notification currently on screen, drawn
    /// as a box over the board.
    pub fn render_into(
        &mut self,
        grid: &Grid,
        status: GameStatus,
        message: Option<Outcome>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        board::draw(&mut self.canvas, grid);

        fb.resize(viewport.width, viewport.height);
        fb.reset(TEXT);

        let layout = self.layout(viewport);
        self.present(&layout, fb);
        self.draw_status_line(fb, &layout, status);
        if let Some(outcome) = message {
            draw_message_box(fb, &layout, outcome.message());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &mut self,
        grid: &Grid,
        status: GameStatus,
        message: Option<Outcome>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, status, message, viewport, &mut fb);
        fb
    }

    /// Copy canvas pixels into the framebuffer, two pixel rows per terminal
    /// row, then overlay the text layer.
    fn present(&self, layout: &CanvasLayout, fb: &mut FrameBuffer) {
        let canvas = &self.canvas;
        let bg = canvas.background();

        for row in 0..layout.term_rows() {
            let y = row as usize * 2;
            for col in 0..layout.device_w {
                let x = col as usize;
                let top = canvas.pixel(x, y).unwrap_or(bg);
                let bottom = canvas.pixel(x, y + 1).unwrap_or(bg);
                fb.put_pixels(layout.origin_x + col, layout.origin_y + row, top, bottom);
            }
        }

        for run in canvas.texts() {
            let row = layout.origin_y + (run.y / 2) as u16;
            for (i, ch) in run.text.chars().enumerate() {
                let x = run.x + i;
                if x >= layout.device_w as usize {
                    break;
                }
                let under = canvas.pixel(x, run.y).unwrap_or(bg);
                let style = CellStyle::new(run.color, under).bold();
                fb.put_char(layout.origin_x + x as u16, row, ch, style);
            }
        }
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, layout: &CanvasLayout, status: GameStatus) {
        let text = match status {
            GameStatus::Playing => "click a cell to reveal  q: quit",
            GameStatus::GameOver(outcome) => match outcome {
                Outcome::Lost => "boom  q: quit",
                Outcome::Won => "board cleared  q: quit",
            },
        };
        let y = layout.origin_y.saturating_add(layout.term_rows());
        let w = text.chars().count() as u16;
        let x = layout.origin_x + layout.device_w.saturating_sub(w) / 2;
        fb.put_str(x, y, text, TEXT);
    }
}

/// Draw a modal message box centered over the canvas.
fn draw_message_box(fb: &mut FrameBuffer, layout: &CanvasLayout, text: &str) {
    const HINT: &str = "press any key";

    let inner_w = text.chars().count().max(HINT.len()) as u16 + 2;
    let w = inner_w + 2;
    let h = 4;
    let x = layout.origin_x + layout.device_w.saturating_sub(w) / 2;
    let y = layout.origin_y + layout.term_rows().saturating_sub(h) / 2;

    let style = CellStyle::new(Rgb::BLACK, Rgb::from_hex(0xF0F0F0));
    fb.fill(x, y, w, h, style);
    draw_border(fb, x, y, w, h, style);

    let centered = |s: &str| x + 1 + inner_w.saturating_sub(s.chars().count() as u16) / 2;
    fb.put_str(centered(text), y + 1, text, style.bold());
    fb.put_str(centered(HINT), y + 2, HINT, style);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
