//! Cornice Decoration Core
//!
//! The window-decoration engine: title-bar compositing, window-control
//! buttons with animated hover/activation colors, border arithmetic, and
//! the shared drop-shadow tile cache.
//!
//! The host window manager owns windows, input, and compositing. It
//! drives a [`Decoration`] through read-only [`host::WindowState`]
//! queries and receives repaint/geometry requests through
//! [`host::HostHandle`]; painting is recorded into a
//! [`cornice_paint::Canvas`] the host replays.

pub mod borders;
pub mod button;
pub mod decoration;
pub mod glyph;
pub mod host;
pub mod metrics;
pub mod shadow;
pub mod titlebar;

pub use button::DecorationButton;
pub use decoration::{ButtonLayout, Decoration};
pub use host::{Capabilities, Edges, HostHandle, HostMetrics, WindowState};
pub use shadow::{ShadowCache, ShadowKey, ShadowTile};
pub use titlebar::ButtonGroup;
