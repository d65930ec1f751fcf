//! Terminal framebuffer: styled glyphs written by the view, flushed by the
//! renderer.
//!
//! The canvas reaches the terminal as half blocks: one glyph carries two
//! vertically stacked device pixels (see [`FrameBuffer::put_pixels`]).

/// Glyph that paints its upper half in the foreground color.
pub const UPPER_HALF: char = '▀';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal, as in CSS `#RRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

/// Light text on the dark area around the board.
pub const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermCell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for TermCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: TEXT,
        }
    }
}

/// Row-major grid of terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<TermCell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![TermCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Follow a terminal resize. The allocation is reused.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, TermCell::default());
    }

    pub fn get(&self, x: u16, y: u16) -> Option<TermCell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Blank the whole buffer with `style`.
    pub fn reset(&mut self, style: CellStyle) {
        self.cells.fill(TermCell { ch: ' ', style });
    }

    /// Write one glyph; writes outside the buffer are dropped.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = TermCell { ch, style };
        }
    }

    /// Two stacked device pixels in one cell: `top` above `bottom`.
    pub fn put_pixels(&mut self, x: u16, y: u16, top: Rgb, bottom: Rgb) {
        self.put_char(x, y, UPPER_HALF, CellStyle::new(top, bottom));
    }

    /// Write `s` left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            match x.checked_add(i as u16) {
                Some(cx) if cx < self.width => self.put_char(cx, y, ch, style),
                _ => break,
            }
        }
    }

    /// Blank a `w` x `h` rectangle with `style`.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        for cy in y..y.saturating_add(h).min(self.height) {
            for cx in x..x.saturating_add(w).min(self.width) {
                self.put_char(cx, cy, ' ', style);
            }
        }
    }

    /// Glyphs of row `y` (empty if out of range).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}
