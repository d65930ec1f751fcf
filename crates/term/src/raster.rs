//! Software rasterizer implementing [`Canvas`].
//!
//! Shapes are rasterized into an RGB pixel grid of
//! `ceil(logical * device_pixel_ratio)` pixels per side. Terminals cannot draw
//! glyphs into pixels, so text is kept in a separate layer of [`TextRun`]s
//! anchored at device pixel positions (one device column per character).

use crate::canvas::{Canvas, Font, Stroke};
use crate::core::ConfigError;
use crate::fb::Rgb;

/// Text placed on the canvas, in device pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Device column of the first character.
    pub x: usize,
    /// Device row the text sits on.
    pub y: usize,
    pub text: String,
    pub color: Rgb,
}

/// RGB pixel canvas scaled by a device pixel ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    logical_w: f32,
    logical_h: f32,
    ratio: f32,
    width: usize,
    height: usize,
    background: Rgb,
    pixels: Vec<Rgb>,
    texts: Vec<TextRun>,
}

impl PixelCanvas {
    pub fn new(
        logical_w: u32,
        logical_h: u32,
        ratio: f32,
        background: Rgb,
    ) -> Result<Self, ConfigError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ConfigError::InvalidPixelRatio(ratio));
        }
        // Tolerate float noise so e.g. 200 * 0.4 stays 80 pixels.
        let scaled = |v: u32| (v as f32 * ratio - 1e-3).ceil().max(0.0) as usize;
        let width = scaled(logical_w);
        let height = scaled(logical_h);
        Ok(Self {
            logical_w: logical_w as f32,
            logical_h: logical_h as f32,
            ratio,
            width,
            height,
            background,
            pixels: vec![background; width * height],
            texts: Vec::new(),
        })
    }

    /// Device width in pixels
    pub fn device_width(&self) -> usize {
        self.width
    }

    /// Device height in pixels
    pub fn device_height(&self) -> usize {
        self.height
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.ratio
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    /// Map a logical span `[start, start + len)` to device pixels on an axis
    /// of `limit` pixels.
    fn span(&self, start: f32, len: f32, limit: usize) -> (usize, usize) {
        let a = (start * self.ratio).round().clamp(0.0, limit as f32) as usize;
        let b = ((start + len) * self.ratio)
            .round()
            .clamp(0.0, limit as f32) as usize;
        (a, b.max(a))
    }

    fn stroke_px(&self, stroke: Stroke) -> usize {
        ((stroke.width * self.ratio).round() as usize).max(1)
    }

    fn fill_device(&mut self, x0: usize, x1: usize, y0: usize, y1: usize, color: Rgb) {
        for y in y0..y1.min(self.height) {
            let row = y * self.width;
            for x in x0..x1.min(self.width) {
                self.pixels[row + x] = color;
            }
        }
    }
}

impl Canvas for PixelCanvas {
    fn width(&self) -> f32 {
        self.logical_w
    }

    fn height(&self) -> f32 {
        self.logical_h
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (x0, x1) = self.span(x, w, self.width);
        let (y0, y1) = self.span(y, h, self.height);
        self.fill_device(x0, x1, y0, y1, self.background);
        self.texts
            .retain(|t| !(t.x >= x0 && t.x < x1 && t.y >= y0 && t.y < y1));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let (x0, x1) = self.span(x, w, self.width);
        let (y0, y1) = self.span(y, h, self.height);
        self.fill_device(x0, x1, y0, y1, color);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, stroke: Stroke) {
        let (x0, x1) = self.span(x, w, self.width);
        let (y0, y1) = self.span(y, h, self.height);
        if x0 == x1 || y0 == y1 {
            return;
        }
        let t = self.stroke_px(stroke);
        let c = stroke.color;
        self.fill_device(x0, x1, y0, (y0 + t).min(y1), c);
        self.fill_device(x0, x1, y1.saturating_sub(t).max(y0), y1, c);
        self.fill_device(x0, (x0 + t).min(x1), y0, y1, c);
        self.fill_device(x1.saturating_sub(t).max(x0), x1, y0, y1, c);
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, stroke: Stroke) {
        let (dcx, dcy) = (cx * self.ratio, cy * self.ratio);
        let r = radius * self.ratio;
        let half = (self.stroke_px(stroke) as f32 / 2.0).max(0.5);
        let reach = r + half;

        let x0 = (dcx - reach).floor().max(0.0) as usize;
        let y0 = (dcy - reach).floor().max(0.0) as usize;
        let x1 = ((dcx + reach).ceil().max(0.0) as usize).min(self.width);
        let y1 = ((dcy + reach).ceil().max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - dcx;
                let dy = y as f32 + 0.5 - dcy;
                let d = (dx * dx + dy * dy).sqrt();
                if (d - r).abs() <= half {
                    self.pixels[y * self.width + x] = stroke.color;
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, cx: f32, cy: f32, font: Font) {
        let len = text.chars().count() as f32;
        let x = (cx * self.ratio - len / 2.0).round().max(0.0) as usize;
        let y = (cy * self.ratio).floor().max(0.0) as usize;
        if y >= self.height || x >= self.width {
            return;
        }
        self.texts.push(TextRun {
            x,
            y,
            text: text.to_string(),
            color: font.color,
        });
    }
}
