//! Cornice Paint API
//!
//! A small 2D drawing API for window decorations. Drawing is recorded as
//! a list of commands; the host's rendering backend replays them against
//! whatever toolkit it embeds.
//!
//! # Features
//!
//! - Path drawing (lines, curves, arcs)
//! - Shape primitives (rect, rounded rect, ellipse, margins)
//! - Fills and strokes with colors and gradients
//! - Caption text and window-icon commands
//! - Clipping and transforms

pub mod canvas;
pub mod color;
pub mod gradient;
pub mod path;
pub mod primitives;

pub use canvas::{
    Canvas, FillStyle, LineCap, LineJoin, PaintCommand, StrokeStyle, TextAlign, Transform2D,
};
pub use color::Color;
pub use gradient::{Gradient, GradientStop};
pub use path::{Path, PathBuilder, Point};
pub use primitives::{Margins, Rect};
