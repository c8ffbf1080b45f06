//! Button color policy
//!
//! Maps (kind, interaction, window activity, checked, animation, palette)
//! to the foreground/background pair a button paints with. A `None` color
//! means "skip painting this layer" - no filled disc, or no glyph stroke -
//! and is never an error.

use cornice_animation::Transition;
use cornice_paint::Color;

use crate::kinds::{ButtonKind, InteractionState};
use crate::palette::Palette;

/// Which of the two sibling themes is rendering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Stroke glyphs on a hover-filled disc
    #[default]
    Plain,
    /// Traffic-light discs with hover-hint glyphs
    Filled,
}

/// Resolved color pair for one button on one repaint
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ButtonColors {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

/// Kind-specific disc hues for the filled variant
pub mod hues {
    use cornice_paint::Color;

    pub const CLOSE: Color = Color::new(242.0 / 255.0, 80.0 / 255.0, 86.0 / 255.0, 1.0);
    pub const MAXIMIZE: Color = Color::new(19.0 / 255.0, 209.0 / 255.0, 61.0 / 255.0, 1.0);
    pub const MINIMIZE: Color = Color::new(252.0 / 255.0, 190.0 / 255.0, 7.0 / 255.0, 1.0);
    pub const SHADE: Color = Color::new(181.0 / 255.0, 141.0 / 255.0, 87.0 / 255.0, 1.0);
    pub const ON_ALL_DESKTOPS: Color = Color::new(125.0 / 255.0, 209.0 / 255.0, 200.0 / 255.0, 1.0);
    pub const KEEP_ABOVE: Color = Color::new(204.0 / 255.0, 176.0 / 255.0, 213.0 / 255.0, 1.0);

    /// Every disc desaturates to this when the window is inactive
    pub const INACTIVE: Color = Color::new(199.0 / 255.0, 199.0 / 255.0, 199.0 / 255.0, 1.0);

    /// Dark stroke used for the hover-hint glyphs on top of a disc
    pub const HINT: Color = Color::new(41.0 / 255.0, 43.0 / 255.0, 50.0 / 255.0, 1.0);
}

/// The disc hue for `kind` in the filled variant, `None` for kinds that
/// draw a bare glyph in both variants
pub fn disc_hue(kind: ButtonKind) -> Option<Color> {
    match kind {
        ButtonKind::Close => Some(hues::CLOSE),
        ButtonKind::Maximize => Some(hues::MAXIMIZE),
        ButtonKind::Minimize => Some(hues::MINIMIZE),
        ButtonKind::Shade => Some(hues::SHADE),
        ButtonKind::OnAllDesktops => Some(hues::ON_ALL_DESKTOPS),
        ButtonKind::KeepAbove => Some(hues::KEEP_ABOVE),
        _ => None,
    }
}

/// Resolve the color pair for one button.
///
/// Precedence (first match wins): pressed, checked (KeepAbove/KeepBelow),
/// running animation (linear RGBA mix by eased progress), hovered,
/// resting. The filled variant's disc kinds bypass that ladder for the
/// background: the disc keeps its hue while the window is active and
/// turns a fixed neutral gray when it is not, independent of hover.
pub fn resolve_colors(
    kind: ButtonKind,
    interaction: InteractionState,
    window_active: bool,
    checked: bool,
    animation: &Transition,
    palette: &Palette,
    variant: ThemeVariant,
    outline_close_button: bool,
) -> ButtonColors {
    // the Menu kind draws the window icon and never consults the policy
    if kind == ButtonKind::Menu {
        return ButtonColors::default();
    }

    if variant == ThemeVariant::Filled {
        if let Some(hue) = disc_hue(kind) {
            return filled_disc_colors(kind, interaction, window_active, checked, hue);
        }
        // KeepBelow has no disc in the filled variant but still uses the
        // hint-on-hover affordance rather than the plain ladder
        if kind == ButtonKind::KeepBelow {
            let show_hint = interaction.pressed || interaction.hovered || checked;
            return ButtonColors {
                foreground: show_hint.then_some(hues::HINT),
                background: None,
            };
        }
        // remaining kinds fall through to the plain ladder
    }

    ButtonColors {
        foreground: plain_foreground(
            kind,
            interaction,
            checked,
            animation,
            palette,
            outline_close_button,
        ),
        background: plain_background(
            kind,
            interaction,
            checked,
            animation,
            palette,
            outline_close_button,
        ),
    }
}

fn filled_disc_colors(
    kind: ButtonKind,
    interaction: InteractionState,
    window_active: bool,
    checked: bool,
    hue: Color,
) -> ButtonColors {
    let background = if !window_active {
        hues::INACTIVE
    } else if interaction.pressed {
        hue.darken(0.1)
    } else {
        hue
    };

    // hint glyph only as a hover/press affordance, or pinned while a
    // toggle kind is checked
    let show_hint =
        interaction.pressed || interaction.hovered || (checked && kind.checked_affects_colors());

    ButtonColors {
        foreground: show_hint.then_some(hues::HINT),
        background: Some(background),
    }
}

fn plain_foreground(
    kind: ButtonKind,
    interaction: InteractionState,
    checked: bool,
    animation: &Transition,
    palette: &Palette,
    outline_close_button: bool,
) -> Option<Color> {
    if interaction.pressed {
        Some(palette.titlebar)
    } else if kind == ButtonKind::Close && outline_close_button {
        Some(palette.titlebar)
    } else if checked && kind.checked_affects_colors() {
        Some(palette.titlebar)
    } else if animation.is_running() {
        Some(palette.font.mix(palette.titlebar, animation.value()))
    } else if interaction.hovered {
        Some(palette.titlebar)
    } else {
        Some(palette.font)
    }
}

fn plain_background(
    kind: ButtonKind,
    interaction: InteractionState,
    checked: bool,
    animation: &Transition,
    palette: &Palette,
    outline_close_button: bool,
) -> Option<Color> {
    let warning_light = palette.warning.lighten(0.15);

    if interaction.pressed {
        if kind == ButtonKind::Close {
            Some(palette.warning)
        } else {
            Some(palette.titlebar.mix(palette.font, 0.3))
        }
    } else if checked && kind.checked_affects_colors() {
        Some(palette.font)
    } else if animation.is_running() {
        let t = animation.value();
        if kind == ButtonKind::Close {
            if outline_close_button {
                Some(palette.font.mix(warning_light, t))
            } else {
                Some(warning_light.fade(t))
            }
        } else {
            Some(palette.font.fade(t))
        }
    } else if interaction.hovered {
        if kind == ButtonKind::Close {
            Some(warning_light)
        } else {
            Some(palette.font)
        }
    } else if kind == ButtonKind::Close && outline_close_button {
        Some(palette.font)
    } else {
        None
    }
}
