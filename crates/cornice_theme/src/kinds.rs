//! Button kinds and interaction state

/// The semantic role of a title-bar control.
///
/// Immutable once a button instance is created.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ButtonKind {
    Close,
    Maximize,
    Minimize,
    Shade,
    OnAllDesktops,
    KeepAbove,
    KeepBelow,
    ApplicationMenu,
    ContextHelp,
    /// Draws the window's icon instead of a vector glyph
    Menu,
}

impl ButtonKind {
    /// Kinds whose checked state participates in color selection
    pub fn checked_affects_colors(self) -> bool {
        matches!(self, ButtonKind::KeepAbove | ButtonKind::KeepBelow)
    }

    /// Kinds that toggle rather than fire
    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            ButtonKind::Shade
                | ButtonKind::OnAllDesktops
                | ButtonKind::KeepAbove
                | ButtonKind::KeepBelow
                | ButtonKind::Maximize
        )
    }
}

/// Transient pointer-driven condition of a button.
///
/// Derived each frame from host-reported pointer state; never persisted.
/// Hovered and pressed can hold simultaneously.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
}

impl InteractionState {
    pub const NORMAL: InteractionState = InteractionState {
        hovered: false,
        pressed: false,
    };

    pub const fn hovered() -> Self {
        Self {
            hovered: true,
            pressed: false,
        }
    }

    pub const fn pressed() -> Self {
        Self {
            hovered: true,
            pressed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_coloring_only_for_keep_above_below() {
        assert!(ButtonKind::KeepAbove.checked_affects_colors());
        assert!(ButtonKind::KeepBelow.checked_affects_colors());
        assert!(!ButtonKind::OnAllDesktops.checked_affects_colors());
        assert!(!ButtonKind::Close.checked_affects_colors());
    }

    #[test]
    fn pressed_implies_hovered_in_helper() {
        assert!(InteractionState::pressed().hovered);
    }
}
