//! Canvas - the command-recording drawing API
//!
//! The decoration paints into a [`Canvas`], which records a flat list of
//! [`PaintCommand`]s. The host backend replays the list with its own
//! toolkit. This keeps the core free of any toolkit dependency and makes
//! painted output directly assertable in tests.

use crate::color::Color;
use crate::gradient::Gradient;
use crate::path::{Path, Point};
use crate::primitives::Rect;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Horizontal placement for recorded text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// 2D affine transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            e: x,
            f: y,
            ..Self::identity()
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    pub fn scale_uniform(s: f32) -> Self {
        Self::scale(s, s)
    }
}

/// A paint command for the host backend
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        style: FillStyle,
    },
    StrokeRect {
        rect: Rect,
        style: StrokeStyle,
    },
    FillRoundedRect {
        rect: Rect,
        radius: f32,
        style: FillStyle,
    },
    FillEllipse {
        rect: Rect,
        style: FillStyle,
    },
    StrokeEllipse {
        rect: Rect,
        style: StrokeStyle,
    },
    StrokeLine {
        from: Point,
        to: Point,
        style: StrokeStyle,
    },
    FillPath {
        path: Path,
        style: FillStyle,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
    /// A single round dot, diameter = stroke width
    DrawPoint {
        at: Point,
        style: StrokeStyle,
    },
    /// Single-line caption text, elided by the backend to fit `rect`
    DrawText {
        text: String,
        rect: Rect,
        color: Color,
        align: TextAlign,
    },
    /// The decorated window's own icon, centered in `rect`
    DrawWindowIcon {
        rect: Rect,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
    PushTransform {
        transform: Transform2D,
    },
    PopTransform,
}

/// The canvas used for decoration painting
pub struct Canvas {
    commands: Vec<PaintCommand>,
    transform_depth: usize,
    clip_depth: usize,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform_depth: 0,
            clip_depth: 0,
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    // === Shape drawing ===

    pub fn fill_rect(&mut self, rect: Rect, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillRect {
            rect,
            style: style.into(),
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokeRect { rect, style });
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillRoundedRect {
            rect,
            radius,
            style: style.into(),
        });
    }

    pub fn fill_ellipse(&mut self, rect: Rect, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillEllipse {
            rect,
            style: style.into(),
        });
    }

    pub fn stroke_ellipse(&mut self, rect: Rect, style: StrokeStyle) {
        self.commands
            .push(PaintCommand::StrokeEllipse { rect, style });
    }

    pub fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.commands
            .push(PaintCommand::StrokeLine { from, to, style });
    }

    pub fn draw_point(&mut self, at: Point, style: StrokeStyle) {
        self.commands.push(PaintCommand::DrawPoint { at, style });
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
        });
    }

    pub fn stroke_path(&mut self, path: Path, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokePath { path, style });
    }

    // === Text and icons ===

    pub fn draw_text(&mut self, text: impl Into<String>, rect: Rect, color: Color, align: TextAlign) {
        self.commands.push(PaintCommand::DrawText {
            text: text.into(),
            rect,
            color,
            align,
        });
    }

    pub fn draw_window_icon(&mut self, rect: Rect) {
        self.commands.push(PaintCommand::DrawWindowIcon { rect });
    }

    // === Clipping ===

    pub fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(PaintCommand::PushClip { rect });
    }

    pub fn pop_clip(&mut self) {
        debug_assert!(self.clip_depth > 0, "unbalanced pop_clip");
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(PaintCommand::PopClip);
    }

    // === Transforms ===

    pub fn push_transform(&mut self, transform: Transform2D) {
        self.transform_depth += 1;
        self.commands
            .push(PaintCommand::PushTransform { transform });
    }

    pub fn pop_transform(&mut self) {
        debug_assert!(self.transform_depth > 0, "unbalanced pop_transform");
        self.transform_depth = self.transform_depth.saturating_sub(1);
        self.commands.push(PaintCommand::PopTransform);
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.push_transform(Transform2D::translate(x, y));
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.push_transform(Transform2D::scale(sx, sy));
    }

    /// True if every push has a matching pop
    pub fn is_balanced(&self) -> bool {
        self.transform_depth == 0 && self.clip_depth == 0
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
