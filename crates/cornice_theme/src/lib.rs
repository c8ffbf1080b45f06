//! Cornice Theme System
//!
//! Everything that decides *which color* a decoration element gets:
//!
//! - **Palette**: title-bar/font/warning colors resolved from the host's
//!   active/inactive color roles, cross-faded by the window activation
//!   transition
//! - **Color policy**: the per-button state-to-color mapping for both
//!   theme variants (plain stroke glyphs vs. filled traffic-light discs)
//! - **Settings**: the reloadable decoration configuration value
//! - **Terminal profile**: optional title-bar tint taken from a terminal
//!   emulator's own color scheme

pub mod kinds;
pub mod palette;
pub mod policy;
pub mod profile;
pub mod settings;

pub use kinds::{ButtonKind, InteractionState};
pub use palette::{Palette, SchemeColors, SchemeRoles};
pub use policy::{resolve_colors, ButtonColors, ThemeVariant};
pub use profile::{TerminalProfile, TerminalProfileError};
pub use settings::{BorderSize, DecorationSettings, ShadowSettings, TitleAlignment};
