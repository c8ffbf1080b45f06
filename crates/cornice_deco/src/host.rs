//! Host adapter traits
//!
//! The decoration never owns a window; it answers queries about one. The
//! host window manager implements [`WindowState`] (read-only window
//! facts) and [`HostHandle`] (the callbacks the decoration makes
//! outward). Both are object-safe so the host can hand in whatever it
//! has.

use cornice_paint::Rect;
use cornice_theme::{ButtonKind, SchemeColors};

/// Capability flags controlling which buttons exist
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub closeable: bool,
    pub maximizable: bool,
    pub minimizable: bool,
    pub shadeable: bool,
    pub provides_context_help: bool,
    pub resizeable: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        closeable: true,
        maximizable: true,
        minimizable: true,
        shadeable: true,
        provides_context_help: true,
        resizeable: true,
    };
}

/// Which screen edges the decorated window currently touches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edges {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

/// Sizing units taken from the host's font and theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostMetrics {
    /// Base spacing unit, device pixels
    pub small_spacing: i32,
    /// Large spacing unit, used for resize-only extended borders
    pub large_spacing: i32,
    /// Grid unit the button height derives from
    pub grid_unit: i32,
    /// Height of the title-bar font
    pub font_height: i32,
}

impl Default for HostMetrics {
    fn default() -> Self {
        Self {
            small_spacing: 4,
            large_spacing: 18,
            grid_unit: 18,
            font_height: 16,
        }
    }
}

/// Read-only window queries the host answers on demand
pub trait WindowState {
    fn is_active(&self) -> bool;
    fn caption(&self) -> String;
    /// Width of the caption text in the title-bar font, device pixels
    fn caption_text_width(&self) -> f32;
    /// Size of the full decorated rect (window plus borders)
    fn decoration_size(&self) -> (f32, f32);
    fn is_maximized(&self) -> bool;
    fn is_maximized_horizontally(&self) -> bool;
    fn is_maximized_vertically(&self) -> bool;
    fn is_shaded(&self) -> bool;
    fn adjacent_edges(&self) -> Edges;
    fn capabilities(&self) -> Capabilities;
    fn scheme_colors(&self) -> SchemeColors;
    /// Toggle state backing a button's checked flag (keep-above enabled,
    /// window shaded, maximized, ...)
    fn is_checked(&self, kind: ButtonKind) -> bool;
}

/// Outward calls from the decoration into the host
pub trait HostHandle {
    /// Schedule a repaint of `region`, or of the whole decoration
    fn request_repaint(&mut self, region: Option<Rect>);
    /// Geometry-affecting input changed; borders and button layout need
    /// recomputation
    fn request_geometry_update(&mut self);
    /// A capability flag flipped; show or hide the control
    fn set_button_visible(&mut self, kind: ButtonKind, visible: bool);
}
