//! The per-window decoration
//!
//! One [`Decoration`] exists per decorated window. The host drives it
//! through events (activation changes, capability changes, pointer
//! motion, timer ticks, reconfiguration) and asks it to paint into a
//! command-recording canvas. All outward effects go through
//! [`HostHandle`].

use std::sync::Arc;

use cornice_animation::Transition;
use cornice_paint::{
    Canvas, Gradient, GradientStop, Margins, Point, Rect, StrokeStyle, TextAlign,
};
use cornice_theme::{
    ButtonKind, DecorationSettings, Palette, TerminalProfile, ThemeVariant,
};

use crate::borders;
use crate::host::{HostHandle, HostMetrics, WindowState};
use crate::metrics::{FRAME_RADIUS, TITLEBAR_TOP_MARGIN};
use crate::shadow::{ShadowCache, ShadowKey, ShadowTile};
use crate::titlebar::{self, ButtonGroup, EdgeAffordance};

/// Which button kinds sit on each end of the title bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonLayout {
    pub left: Vec<ButtonKind>,
    pub right: Vec<ButtonKind>,
}

impl Default for ButtonLayout {
    fn default() -> Self {
        Self {
            left: vec![ButtonKind::Menu, ButtonKind::OnAllDesktops],
            right: vec![
                ButtonKind::Minimize,
                ButtonKind::Maximize,
                ButtonKind::Close,
            ],
        }
    }
}

pub struct Decoration {
    settings: DecorationSettings,
    variant: ThemeVariant,
    metrics: HostMetrics,
    left: ButtonGroup,
    right: ButtonGroup,
    activation: Transition,
    window_active: bool,
    terminal_profile: Option<TerminalProfile>,
    shadow: Option<Arc<ShadowTile>>,
}

impl Decoration {
    pub fn new(
        layout: &ButtonLayout,
        variant: ThemeVariant,
        settings: DecorationSettings,
        metrics: HostMetrics,
        window: &dyn WindowState,
    ) -> Self {
        let caps = window.capabilities();
        let duration = settings.animations_duration_ms;
        let mut deco = Self {
            left: ButtonGroup::new(&layout.left, &caps, duration),
            right: ButtonGroup::new(&layout.right, &caps, duration),
            activation: Transition::resting(window.is_active(), duration),
            window_active: window.is_active(),
            terminal_profile: None,
            shadow: None,
            settings,
            variant,
            metrics,
        };
        deco.sync_checked(window);
        deco
    }

    pub fn settings(&self) -> &DecorationSettings {
        &self.settings
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Install (or clear) the terminal color-scheme override
    pub fn set_terminal_profile(&mut self, profile: Option<TerminalProfile>) {
        self.terminal_profile = profile;
    }

    // --- shadow -----------------------------------------------------

    pub fn shadow_key(&self) -> ShadowKey {
        ShadowKey {
            size: self.settings.shadow.size,
            strength: self.settings.shadow.strength,
            color: self.settings.shadow.color,
        }
    }

    /// Fetch this configuration's shadow tile from the shared cache
    pub fn attach_shadow(&mut self, cache: &mut ShadowCache) {
        self.shadow = Some(cache.get_or_build(self.shadow_key()));
    }

    pub fn shadow(&self) -> Option<&Arc<ShadowTile>> {
        self.shadow.as_ref()
    }

    // --- events from the host ---------------------------------------

    /// Swap in a freshly loaded settings value.
    ///
    /// Durations propagate to every transition; the shadow tile is
    /// re-resolved if its parameters moved; layout is recomputed by the
    /// host after the geometry-update request.
    pub fn reconfigure(
        &mut self,
        settings: DecorationSettings,
        cache: &mut ShadowCache,
        host: &mut dyn HostHandle,
    ) {
        let shadow_changed = {
            let old = self.shadow_key();
            self.settings = settings;
            self.shadow_key() != old
        };
        tracing::debug!(shadow_changed, "decoration reconfigured");

        let duration = self.settings.animations_duration_ms;
        self.activation.set_duration_ms(duration);
        for button in self
            .left
            .buttons_mut()
            .iter_mut()
            .chain(self.right.buttons_mut().iter_mut())
        {
            button.set_duration_ms(duration);
        }

        if shadow_changed || self.shadow.is_none() {
            self.attach_shadow(cache);
        }
        host.request_geometry_update();
    }

    /// Window focus changed: start the palette cross-fade
    pub fn set_window_active(&mut self, active: bool, host: &mut dyn HostHandle) {
        if self.window_active == active {
            return;
        }
        self.window_active = active;
        self.activation
            .trigger(active, self.settings.animations_enabled);
        host.request_repaint(None);
    }

    /// Advance all running transitions by one timer tick
    pub fn tick(&mut self, delta_ms: f32, host: &mut dyn HostHandle) -> bool {
        let mut dirty = self.activation.advance(delta_ms);
        dirty |= self.left.tick(delta_ms);
        dirty |= self.right.tick(delta_ms);
        if dirty {
            host.request_repaint(None);
        }
        dirty
    }

    /// Re-derive button visibility after a capability flag flipped
    pub fn update_capabilities(&mut self, window: &dyn WindowState, host: &mut dyn HostHandle) {
        let caps = window.capabilities();
        let mut changed = false;
        for button in self
            .left
            .buttons_mut()
            .iter_mut()
            .chain(self.right.buttons_mut().iter_mut())
        {
            if let Some(visible) = button.sync_visibility(&caps) {
                host.set_button_visible(button.kind(), visible);
                changed = true;
            }
        }
        if changed {
            host.request_geometry_update();
        }
    }

    /// Pull the current toggle states (keep-above, shaded, maximized, ...)
    pub fn sync_checked(&mut self, window: &dyn WindowState) -> bool {
        let mut dirty = false;
        for button in self
            .left
            .buttons_mut()
            .iter_mut()
            .chain(self.right.buttons_mut().iter_mut())
        {
            if button.kind().is_toggle() {
                dirty |= button.set_checked(window.is_checked(button.kind()));
            }
        }
        dirty
    }

    /// Recompute both groups' geometry for the current window size and
    /// edge state, then ask for a repaint.
    pub fn update_buttons_geometry(&mut self, window: &dyn WindowState, host: &mut dyn HostHandle) {
        let (width, _) = window.decoration_size();
        let edges = window.adjacent_edges();
        let small = self.metrics.small_spacing;

        let caption_h = borders::caption_height(&self.settings, &self.metrics) as f32;
        let button_w = borders::button_height(&self.settings, &self.metrics) as f32;
        let top_pad = (small * TITLEBAR_TOP_MARGIN) as f32;
        // at the top screen edge the padding above the bar is folded
        // into the clickable height instead
        let button_h = caption_h + if edges.top { top_pad } else { 0.0 };
        let icon_y = if edges.top { top_pad } else { 0.0 } + (caption_h - button_w) / 2.0;
        let v_padding = if edges.top { 0.0 } else { top_pad };
        let h_padding = self.settings.button_h_padding as f32;
        let spacing = self.settings.button_spacing as f32;

        let side = borders::border_width(&self.settings, &self.metrics, false) as f32;
        let h_maximized = window.is_maximized_horizontally();
        let left_border = if edges.left || h_maximized { 0.0 } else { side };
        let right_border = if edges.right || h_maximized { 0.0 } else { side };

        if !self.left.is_empty() {
            let (origin, affordance) = if edges.left {
                (Point::new(0.0, v_padding), EdgeAffordance::WidenFirst)
            } else {
                (
                    Point::new(h_padding + left_border, v_padding),
                    EdgeAffordance::None,
                )
            };
            self.left
                .layout(origin, button_w, button_h, icon_y, spacing, h_padding, affordance);
        }

        if !self.right.is_empty() {
            let (affordance, x) = if edges.right {
                let group_w =
                    self.right
                        .content_width(button_w, spacing, h_padding, EdgeAffordance::WidenLast);
                (EdgeAffordance::WidenLast, width - group_w)
            } else {
                let group_w =
                    self.right
                        .content_width(button_w, spacing, h_padding, EdgeAffordance::None);
                (
                    EdgeAffordance::None,
                    width - group_w - h_padding - right_border,
                )
            };
            self.right.layout(
                Point::new(x, v_padding),
                button_w,
                button_h,
                icon_y,
                spacing,
                h_padding,
                affordance,
            );
        }

        host.request_repaint(None);
    }

    /// Route pointer motion to the buttons' hover states
    pub fn pointer_motion(&mut self, point: Point, host: &mut dyn HostHandle) {
        let mut dirty = self.left.pointer_motion(point, &self.settings);
        dirty |= self.right.pointer_motion(point, &self.settings);
        if dirty {
            host.request_repaint(None);
        }
    }

    pub fn set_button_pressed(
        &mut self,
        kind: ButtonKind,
        pressed: bool,
        host: &mut dyn HostHandle,
    ) -> bool {
        let button = self
            .left
            .find_mut(kind)
            .or_else(|| self.right.find_mut(kind));
        match button {
            Some(b) => {
                if !b.set_pressed(pressed) {
                    return false;
                }
                host.request_repaint(Some(b.geometry()));
                true
            }
            None => false,
        }
    }

    // --- queries ------------------------------------------------------

    pub fn button_at(&self, point: Point) -> Option<ButtonKind> {
        self.left.hit(point).or_else(|| self.right.hit(point))
    }

    pub fn button_geometry(&self, kind: ButtonKind) -> Option<Rect> {
        self.left
            .find(kind)
            .or_else(|| self.right.find(kind))
            .map(|b| b.geometry())
    }

    pub fn is_visible(&self, kind: ButtonKind) -> bool {
        self.left
            .find(kind)
            .or_else(|| self.right.find(kind))
            .is_some_and(|b| b.is_visible())
    }

    pub fn borders(&self, window: &dyn WindowState) -> Margins {
        borders::compute_borders(window, &self.settings, &self.metrics)
    }

    pub fn resize_only_borders(&self) -> Margins {
        borders::resize_only_borders(&self.settings, &self.metrics)
    }

    pub fn caption_rect(&self, window: &dyn WindowState) -> (Rect, TextAlign) {
        let (width, _) = window.decoration_size();
        titlebar::caption_rect(
            width,
            borders::caption_height(&self.settings, &self.metrics) as f32,
            (self.metrics.small_spacing * TITLEBAR_TOP_MARGIN) as f32,
            window.caption_text_width(),
            self.settings.title_alignment,
            self.metrics.small_spacing,
            self.left.geometry(),
            self.right.geometry(),
        )
    }

    /// The color snapshot this repaint uses, with the terminal override
    /// applied when the caption matches
    pub fn palette(&self, window: &dyn WindowState) -> Palette {
        let mut palette =
            Palette::resolve(&window.scheme_colors(), self.window_active, &self.activation);
        if let Some(profile) = self.tint_for(window) {
            palette.titlebar = profile.titlebar;
            palette.font = profile.text;
        }
        palette
    }

    fn tint_for(&self, window: &dyn WindowState) -> Option<&TerminalProfile> {
        self.terminal_profile
            .as_ref()
            .filter(|p| p.applies_to(&window.caption()))
    }

    // --- painting -----------------------------------------------------

    /// Record the whole decoration into `canvas`
    pub fn paint(&self, canvas: &mut Canvas, window: &dyn WindowState) {
        let (width, height) = window.decoration_size();
        let title_h = borders::titlebar_height(&self.settings, &self.metrics) as f32;
        let palette = self.palette(window);

        if !window.is_shaded() {
            // frame body below the title bar, rounded at the bottom
            canvas.push_clip(Rect::new(0.0, title_h, width, height - title_h));
            canvas.fill_rounded_rect(
                Rect::new(0.0, 0.0, width, height),
                FRAME_RADIUS,
                palette.frame,
            );
            canvas.pop_clip();
        }

        self.paint_titlebar(canvas, window, &palette, width, title_h);

        let (caption_area, align) = self.caption_rect(window);
        canvas.draw_text(window.caption(), caption_area, palette.font, align);

        self.left.paint(
            canvas,
            &palette,
            self.variant,
            &self.settings,
            self.window_active,
        );
        self.right.paint(
            canvas,
            &palette,
            self.variant,
            &self.settings,
            self.window_active,
        );
    }

    fn paint_titlebar(
        &self,
        canvas: &mut Canvas,
        window: &dyn WindowState,
        palette: &Palette,
        width: f32,
        title_h: f32,
    ) {
        let title_rect = Rect::new(0.0, 0.0, width, title_h);
        let flat_fill = self.tint_for(window).is_some()
            || !self.window_active
            || !self.settings.draw_background_gradient;

        let edges = window.adjacent_edges();
        if window.is_maximized() {
            if flat_fill {
                canvas.fill_rect(title_rect, palette.titlebar);
            } else {
                canvas.fill_rect(title_rect, self.titlebar_gradient(palette, title_h));
            }
        } else if window.is_shaded() {
            if flat_fill {
                canvas.fill_rounded_rect(title_rect, FRAME_RADIUS, palette.titlebar);
            } else {
                canvas.fill_rounded_rect(
                    title_rect,
                    FRAME_RADIUS,
                    self.titlebar_gradient(palette, title_h),
                );
            }
        } else {
            // enlarge past clipped-away sides so only the top corners
            // that face free screen space stay rounded
            let shape = title_rect.adjusted(
                if edges.left { -FRAME_RADIUS } else { 0.0 },
                if edges.top { -FRAME_RADIUS } else { 0.0 },
                if edges.right { FRAME_RADIUS } else { 0.0 },
                FRAME_RADIUS,
            );
            canvas.push_clip(title_rect);
            if flat_fill {
                canvas.fill_rounded_rect(shape, FRAME_RADIUS, palette.titlebar);
            } else {
                canvas.fill_rounded_rect(
                    shape,
                    FRAME_RADIUS,
                    self.titlebar_gradient(palette, title_h),
                );
            }
            canvas.pop_clip();
        }

        if let Some(color) = self.separator_color(palette, window) {
            canvas.stroke_line(
                Point::new(0.0, title_h - 0.5),
                Point::new(width, title_h - 0.5),
                StrokeStyle {
                    color,
                    width: 1.0,
                    ..Default::default()
                },
            );
        }
    }

    fn titlebar_gradient(&self, palette: &Palette, title_h: f32) -> Gradient {
        Gradient::linear(
            Point::ZERO,
            Point::new(0.0, title_h),
            vec![
                GradientStop {
                    offset: 0.0,
                    color: palette.titlebar.lighten(0.2),
                },
                GradientStop {
                    offset: 0.8,
                    color: palette.titlebar,
                },
                GradientStop {
                    offset: 1.0,
                    color: palette.titlebar,
                },
            ],
        )
    }

    /// Highlight line under the title bar: full strength while active,
    /// alpha-faded while the activation transition runs, absent otherwise
    fn separator_color(
        &self,
        palette: &Palette,
        window: &dyn WindowState,
    ) -> Option<cornice_paint::Color> {
        if window.is_shaded() || !self.settings.draw_titlebar_separator {
            return None;
        }
        if self.activation.is_running() {
            Some(palette.highlight.fade(self.activation.value()))
        } else if self.window_active {
            Some(palette.highlight)
        } else {
            None
        }
    }
}
