//! A single window-control button
//!
//! Owns its interaction state and hover transition; colors come from the
//! theme's color policy, the glyph from the glyph table. The button's
//! clickable geometry can be wider than its icon box (edge buttons get
//! extra padding merged into the hit target).

use cornice_animation::transition::{Transition, Trigger};
use cornice_paint::{Canvas, Point, Rect};
use cornice_theme::{
    resolve_colors, ButtonKind, DecorationSettings, InteractionState, Palette, ThemeVariant,
};

use crate::glyph::{draw_glyph, glyph_spec};
use crate::host::Capabilities;
use crate::metrics::{glyph_pen_width, GLYPH_REF};

/// Whether a control of this kind applies to a window with `caps`
pub fn kind_applies(kind: ButtonKind, caps: &Capabilities) -> bool {
    match kind {
        ButtonKind::Close => caps.closeable,
        ButtonKind::Maximize => caps.maximizable,
        ButtonKind::Minimize => caps.minimizable,
        ButtonKind::Shade => caps.shadeable,
        ButtonKind::ContextHelp => caps.provides_context_help,
        _ => true,
    }
}

pub struct DecorationButton {
    kind: ButtonKind,
    /// Full clickable rect, including any merged edge padding
    geometry: Rect,
    /// Square icon box edge, device pixels
    icon_size: f32,
    /// Icon box origin relative to the geometry origin
    icon_offset: Point,
    interaction: InteractionState,
    checked: bool,
    visible: bool,
    transition: Transition,
}

impl DecorationButton {
    pub fn new(kind: ButtonKind, caps: &Capabilities, duration_ms: u32) -> Self {
        Self {
            kind,
            geometry: Rect::default(),
            icon_size: 0.0,
            icon_offset: Point::ZERO,
            interaction: InteractionState::NORMAL,
            checked: false,
            visible: kind_applies(kind, caps),
            transition: Transition::new(duration_ms),
        }
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovered(&self) -> bool {
        self.interaction.hovered
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub(crate) fn set_layout(&mut self, geometry: Rect, icon_size: f32, icon_offset: Point) {
        self.geometry = geometry;
        self.icon_size = icon_size;
        self.icon_offset = icon_offset;
    }

    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.transition.set_duration_ms(duration_ms);
    }

    /// True when `point` hits the clickable rect of a visible button
    pub fn contains(&self, point: Point) -> bool {
        self.visible && self.geometry.contains(point)
    }

    /// Update the hover flag; starts/redirects the hover transition on an
    /// edge. Returns the transition outcome so the caller can decide
    /// whether to schedule a repaint.
    pub fn set_hovered(&mut self, hovered: bool, settings: &DecorationSettings) -> Trigger {
        if self.interaction.hovered == hovered {
            return Trigger::Unchanged;
        }
        self.interaction.hovered = hovered;
        tracing::trace!(kind = ?self.kind, hovered, "button hover changed");
        self.transition.trigger(hovered, settings.animations_enabled)
    }

    /// Update the pressed flag. Returns true if it changed.
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        if self.interaction.pressed == pressed {
            return false;
        }
        self.interaction.pressed = pressed;
        true
    }

    /// Update the checked flag. Returns true if it changed.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        if self.checked == checked {
            return false;
        }
        self.checked = checked;
        true
    }

    /// Re-derive visibility from capability flags. Returns the new value
    /// when it changed so the caller can notify the host.
    pub fn sync_visibility(&mut self, caps: &Capabilities) -> Option<bool> {
        let visible = kind_applies(self.kind, caps);
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }

    /// Advance the hover transition. Returns true if a repaint is needed.
    pub fn tick(&mut self, delta_ms: f32) -> bool {
        self.transition.advance(delta_ms)
    }

    /// Paint the button at its laid-out geometry.
    ///
    /// The icon box is normalized: the canvas is scaled so all glyph
    /// coordinates live in the logical 18x18 box regardless of the
    /// actual pixel size.
    pub fn paint(
        &self,
        canvas: &mut Canvas,
        palette: &Palette,
        variant: ThemeVariant,
        settings: &DecorationSettings,
        window_active: bool,
    ) {
        if !self.visible || self.icon_size <= 0.0 {
            return;
        }

        canvas.translate(
            self.geometry.x + self.icon_offset.x,
            self.geometry.y + self.icon_offset.y,
        );

        // menu button: the window's icon, no glyph machinery
        if self.kind == ButtonKind::Menu {
            canvas.draw_window_icon(Rect::new(0.0, 0.0, self.icon_size, self.icon_size));
            canvas.pop_transform();
            return;
        }

        let scale = self.icon_size / GLYPH_REF;
        canvas.scale(scale, scale);
        canvas.translate(1.0, 1.0);

        let colors = resolve_colors(
            self.kind,
            self.interaction,
            window_active,
            self.checked,
            &self.transition,
            palette,
            variant,
            settings.outline_close_button,
        );

        if let Some(background) = colors.background {
            canvas.fill_ellipse(Rect::new(0.0, 0.0, 18.0, 18.0), background);
        }
        if let Some(foreground) = colors.foreground {
            let spec = glyph_spec(self.kind, variant, self.checked, self.interaction.hovered);
            draw_glyph(canvas, &spec, foreground, glyph_pen_width(self.icon_size));
        }

        canvas.pop_transform();
        canvas.pop_transform();
        canvas.pop_transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cornice_paint::canvas::PaintCommand;
    use cornice_paint::Color;
    use cornice_theme::policy::hues;

    fn palette() -> Palette {
        Palette {
            titlebar: Color::WHITE,
            font: Color::BLACK,
            frame: Color::WHITE,
            highlight: Color::from_rgb8(61, 174, 233),
            warning: Color::from_rgb8(218, 68, 83),
        }
    }

    fn laid_out(kind: ButtonKind) -> DecorationButton {
        let mut b = DecorationButton::new(kind, &Capabilities::ALL, 100);
        b.set_layout(Rect::new(10.0, 2.0, 22.0, 26.0), 22.0, Point::new(0.0, 2.0));
        b
    }

    #[test]
    fn close_hidden_for_non_closeable_window() {
        let caps = Capabilities {
            closeable: false,
            ..Capabilities::ALL
        };
        let b = DecorationButton::new(ButtonKind::Close, &caps, 100);
        assert!(!b.is_visible());
    }

    #[test]
    fn visibility_follows_capability_changes() {
        let mut b = DecorationButton::new(ButtonKind::Maximize, &Capabilities::ALL, 100);
        assert!(b.is_visible());

        let caps = Capabilities {
            maximizable: false,
            ..Capabilities::ALL
        };
        assert_eq!(b.sync_visibility(&caps), Some(false));
        assert!(!b.is_visible());
        // no change: no notification
        assert_eq!(b.sync_visibility(&caps), None);
    }

    #[test]
    fn hover_edge_starts_transition() {
        let settings = DecorationSettings::default();
        let mut b = laid_out(ButtonKind::Minimize);
        assert_eq!(b.set_hovered(true, &settings), Trigger::Started);
        assert!(b.transition().is_running());
        // repeated report of the same state is a no-op
        assert_eq!(b.set_hovered(true, &settings), Trigger::Unchanged);
    }

    #[test]
    fn hidden_button_paints_nothing() {
        let caps = Capabilities {
            closeable: false,
            ..Capabilities::ALL
        };
        let mut b = DecorationButton::new(ButtonKind::Close, &caps, 100);
        b.set_layout(Rect::new(0.0, 0.0, 22.0, 22.0), 22.0, Point::ZERO);

        let mut canvas = Canvas::new();
        b.paint(
            &mut canvas,
            &palette(),
            ThemeVariant::Plain,
            &DecorationSettings::default(),
            true,
        );
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn menu_button_paints_window_icon_only() {
        let mut canvas = Canvas::new();
        laid_out(ButtonKind::Menu).paint(
            &mut canvas,
            &palette(),
            ThemeVariant::Plain,
            &DecorationSettings::default(),
            true,
        );

        assert!(canvas
            .commands()
            .iter()
            .any(|c| matches!(c, PaintCommand::DrawWindowIcon { .. })));
        assert!(!canvas
            .commands()
            .iter()
            .any(|c| matches!(c, PaintCommand::FillEllipse { .. })));
        assert!(canvas.is_balanced());
    }

    #[test]
    fn filled_close_paints_disc_without_glyph_at_rest() {
        let mut canvas = Canvas::new();
        laid_out(ButtonKind::Close).paint(
            &mut canvas,
            &palette(),
            ThemeVariant::Filled,
            &DecorationSettings::default(),
            true,
        );

        let disc = canvas.commands().iter().find_map(|c| match c {
            PaintCommand::FillEllipse { style, .. } => Some(style.clone()),
            _ => None,
        });
        assert_eq!(disc, Some(hues::CLOSE.into()));
        assert!(!canvas
            .commands()
            .iter()
            .any(|c| matches!(c, PaintCommand::StrokeLine { .. })));
        assert!(canvas.is_balanced());
    }

    #[test]
    fn filled_close_hovered_adds_hint_cross() {
        let settings = DecorationSettings::default();
        let mut b = laid_out(ButtonKind::Close);
        // snap straight to hovered so the paint samples the hovered state
        let mut s = settings.clone();
        s.animations_enabled = false;
        b.set_hovered(true, &s);

        let mut canvas = Canvas::new();
        b.paint(&mut canvas, &palette(), ThemeVariant::Filled, &s, true);

        let strokes = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, PaintCommand::StrokeLine { .. }))
            .count();
        assert_eq!(strokes, 2, "hover hint is the two-stroke cross");
    }

    #[test]
    fn plain_resting_close_has_glyph_but_no_disc() {
        let mut canvas = Canvas::new();
        laid_out(ButtonKind::Close).paint(
            &mut canvas,
            &palette(),
            ThemeVariant::Plain,
            &DecorationSettings::default(),
            true,
        );

        assert!(!canvas
            .commands()
            .iter()
            .any(|c| matches!(c, PaintCommand::FillEllipse { .. })));
        assert!(canvas
            .commands()
            .iter()
            .any(|c| matches!(c, PaintCommand::StrokeLine { .. })));
    }

    #[test]
    fn contains_uses_full_clickable_rect() {
        let b = laid_out(ButtonKind::Close);
        assert!(b.contains(Point::new(11.0, 25.0)));
        assert!(!b.contains(Point::new(5.0, 5.0)));
    }
}
