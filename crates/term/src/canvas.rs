//! The 2D drawing context the game renders to.
//!
//! Coordinates are logical pixels; an implementation maps them to whatever
//! device it draws on. Only the handful of operations the board needs exist.

use crate::fb::Rgb;

/// Outline style for strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
}

/// Text style. Text is always centered on its anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub color: Rgb,
    pub size_px: f32,
}

/// A 2D drawing surface measured in logical pixels.
pub trait Canvas {
    /// Logical width
    fn width(&self) -> f32;

    /// Logical height
    fn height(&self) -> f32;

    /// Reset a region to the canvas background, dropping any text in it.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);

    /// Outline a rectangle; the stroke never spills outside it.
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, stroke: Stroke);

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, stroke: Stroke);

    /// Draw `text` centered on `(cx, cy)`.
    fn fill_text(&mut self, text: &str, cx: f32, cy: f32, font: Font);

    /// Clear the whole canvas.
    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, w, h);
    }
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, w: f32, h: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Rgb },
    StrokeRect { x: f32, y: f32, w: f32, h: f32, stroke: Stroke },
    StrokeCircle { cx: f32, cy: f32, radius: f32, stroke: Stroke },
    FillText { text: String, cx: f32, cy: f32, font: Font },
}

/// Canvas that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.commands
            .push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, stroke: Stroke) {
        self.commands
            .push(DrawCommand::StrokeRect { x, y, w, h, stroke });
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeCircle {
            cx,
            cy,
            radius,
            stroke,
        });
    }

    fn fill_text(&mut self, text: &str, cx: f32, cy: f32, font: Font) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            cx,
            cy,
            font,
        });
    }
}
