//! Theme palette resolution
//!
//! The host exposes one set of color roles for the active window state
//! and one for the inactive state. A [`Palette`] is the snapshot the
//! decoration paints with on a single repaint: either the roles for the
//! current activity, or a cross-fade between the two while the
//! activation transition runs.

use cornice_animation::Transition;
use cornice_paint::Color;

/// Host-provided color roles for one window activity state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchemeRoles {
    pub titlebar: Color,
    pub foreground: Color,
    pub frame: Color,
    pub highlight: Color,
    pub warning: Color,
}

/// The active/inactive role pair the host resolves from its color scheme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchemeColors {
    pub active: SchemeRoles,
    pub inactive: SchemeRoles,
}

/// Read-only per-repaint color snapshot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub titlebar: Color,
    pub font: Color,
    pub frame: Color,
    pub highlight: Color,
    pub warning: Color,
}

impl Palette {
    /// Resolve the palette for a repaint.
    ///
    /// While `activation` is running the inactive and active roles are
    /// mixed by its eased progress, so the title bar fades rather than
    /// flips when focus changes.
    pub fn resolve(scheme: &SchemeColors, window_active: bool, activation: &Transition) -> Self {
        if activation.is_running() {
            let t = activation.value();
            Self {
                titlebar: scheme.inactive.titlebar.mix(scheme.active.titlebar, t),
                font: scheme.inactive.foreground.mix(scheme.active.foreground, t),
                frame: scheme.inactive.frame.mix(scheme.active.frame, t),
                highlight: scheme.inactive.highlight.mix(scheme.active.highlight, t),
                warning: scheme.inactive.warning.mix(scheme.active.warning, t),
            }
        } else {
            let roles = if window_active {
                &scheme.active
            } else {
                &scheme.inactive
            };
            Self::from_roles(roles)
        }
    }

    pub fn from_roles(roles: &SchemeRoles) -> Self {
        Self {
            titlebar: roles.titlebar,
            font: roles.foreground,
            frame: roles.frame,
            highlight: roles.highlight,
            warning: roles.warning,
        }
    }
}
