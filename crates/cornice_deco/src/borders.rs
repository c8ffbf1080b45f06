//! Border-size arithmetic

use cornice_paint::Margins;
use cornice_theme::{BorderSize, DecorationSettings};

use crate::host::{HostMetrics, WindowState};
use crate::metrics::{TITLEBAR_BOTTOM_MARGIN, TITLEBAR_TOP_MARGIN};

/// Button height: the host grid unit plus the configured delta
pub fn button_height(settings: &DecorationSettings, metrics: &HostMetrics) -> i32 {
    metrics.grid_unit + settings.button_size
}

/// Width of one side/bottom border for the configured ladder step.
///
/// The bottom border never drops below 4 px while any border is drawn,
/// so the resize handle stays grabbable.
pub fn border_width(settings: &DecorationSettings, metrics: &HostMetrics, bottom: bool) -> i32 {
    let base = metrics.small_spacing;
    match settings.border_size {
        BorderSize::None => 0,
        BorderSize::NoSides => {
            if bottom {
                base.max(4)
            } else {
                0
            }
        }
        BorderSize::Tiny => {
            if bottom {
                base.max(4)
            } else {
                base
            }
        }
        BorderSize::Normal => base * 2,
        BorderSize::Large => base * 3,
        BorderSize::VeryLarge => base * 4,
        BorderSize::Huge => base * 5,
        BorderSize::VeryHuge => base * 6,
        BorderSize::Oversized => base * 10,
    }
}

/// Total title-bar height (the top border).
///
/// Caption and buttons share the taller of the font and button heights;
/// the extra pixel below is used by the active-window outline.
pub fn titlebar_height(settings: &DecorationSettings, metrics: &HostMetrics) -> i32 {
    let content = metrics.font_height.max(button_height(settings, metrics));
    content
        + metrics.small_spacing * TITLEBAR_BOTTOM_MARGIN
        + 1
        + metrics.small_spacing * TITLEBAR_TOP_MARGIN
}

/// Height available to the caption inside the title bar
pub fn caption_height(settings: &DecorationSettings, metrics: &HostMetrics) -> i32 {
    titlebar_height(settings, metrics)
        - metrics.small_spacing * (TITLEBAR_TOP_MARGIN + TITLEBAR_BOTTOM_MARGIN)
        - 1
}

/// Full decoration margins for the current window state.
///
/// Borders collapse to zero along maximized or screen-adjacent edges and
/// below a shaded window.
pub fn compute_borders(
    window: &dyn WindowState,
    settings: &DecorationSettings,
    metrics: &HostMetrics,
) -> Margins {
    let edges = window.adjacent_edges();
    let h_maximized = window.is_maximized_horizontally();
    let v_maximized = window.is_maximized_vertically();

    let left = if edges.left || h_maximized {
        0
    } else {
        border_width(settings, metrics, false)
    };
    let right = if edges.right || h_maximized {
        0
    } else {
        border_width(settings, metrics, false)
    };
    let bottom = if window.is_shaded() || edges.bottom || v_maximized {
        0
    } else {
        border_width(settings, metrics, true)
    };

    Margins::new(left, titlebar_height(settings, metrics), right, bottom)
}

/// Extended, resize-only margins for borderless configurations
pub fn resize_only_borders(settings: &DecorationSettings, metrics: &HostMetrics) -> Margins {
    let ext = metrics.large_spacing;
    match settings.border_size {
        BorderSize::None => Margins::new(ext, 0, ext, ext),
        BorderSize::NoSides => Margins::new(ext, 0, ext, 0),
        _ => Margins::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Capabilities, Edges};
    use cornice_theme::{ButtonKind, SchemeColors, SchemeRoles};
    use cornice_paint::Color;

    struct TestWindow {
        shaded: bool,
        edges: Edges,
        h_maximized: bool,
    }

    impl Default for TestWindow {
        fn default() -> Self {
            Self {
                shaded: false,
                edges: Edges::default(),
                h_maximized: false,
            }
        }
    }

    impl WindowState for TestWindow {
        fn is_active(&self) -> bool {
            true
        }
        fn caption(&self) -> String {
            String::new()
        }
        fn caption_text_width(&self) -> f32 {
            0.0
        }
        fn decoration_size(&self) -> (f32, f32) {
            (400.0, 300.0)
        }
        fn is_maximized(&self) -> bool {
            false
        }
        fn is_maximized_horizontally(&self) -> bool {
            self.h_maximized
        }
        fn is_maximized_vertically(&self) -> bool {
            false
        }
        fn is_shaded(&self) -> bool {
            self.shaded
        }
        fn adjacent_edges(&self) -> Edges {
            self.edges
        }
        fn capabilities(&self) -> Capabilities {
            Capabilities::ALL
        }
        fn scheme_colors(&self) -> SchemeColors {
            let roles = SchemeRoles {
                titlebar: Color::WHITE,
                foreground: Color::BLACK,
                frame: Color::WHITE,
                highlight: Color::BLACK,
                warning: Color::BLACK,
            };
            SchemeColors {
                active: roles,
                inactive: roles,
            }
        }
        fn is_checked(&self, _kind: ButtonKind) -> bool {
            false
        }
    }

    fn settings_with(border_size: BorderSize) -> DecorationSettings {
        DecorationSettings {
            border_size,
            ..Default::default()
        }
    }

    #[test]
    fn border_ladder_widths() {
        let m = HostMetrics::default(); // small_spacing = 4
        let cases = [
            (BorderSize::None, 0, 0),
            (BorderSize::NoSides, 0, 4),
            (BorderSize::Tiny, 4, 4),
            (BorderSize::Normal, 8, 8),
            (BorderSize::Large, 12, 12),
            (BorderSize::VeryLarge, 16, 16),
            (BorderSize::Huge, 20, 20),
            (BorderSize::VeryHuge, 24, 24),
            (BorderSize::Oversized, 40, 40),
        ];
        for (size, side, bottom) in cases {
            let s = settings_with(size);
            assert_eq!(border_width(&s, &m, false), side, "{size:?} side");
            assert_eq!(border_width(&s, &m, true), bottom, "{size:?} bottom");
        }
    }

    #[test]
    fn bottom_border_has_minimum_for_thin_ladder_steps() {
        let m = HostMetrics {
            small_spacing: 2,
            ..Default::default()
        };
        let s = settings_with(BorderSize::Tiny);
        assert_eq!(border_width(&s, &m, false), 2);
        assert_eq!(border_width(&s, &m, true), 4);
    }

    #[test]
    fn shaded_window_has_no_bottom_border() {
        let s = DecorationSettings::default();
        let m = HostMetrics::default();
        let b = compute_borders(
            &TestWindow {
                shaded: true,
                ..Default::default()
            },
            &s,
            &m,
        );
        assert_eq!(b.bottom, 0);
        assert!(b.top > 0);
    }

    #[test]
    fn screen_edges_suppress_side_borders() {
        let s = DecorationSettings::default();
        let m = HostMetrics::default();
        let b = compute_borders(
            &TestWindow {
                edges: Edges {
                    left: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            &s,
            &m,
        );
        assert_eq!(b.left, 0);
        assert_eq!(b.right, border_width(&s, &m, false));
    }

    #[test]
    fn horizontal_maximization_suppresses_both_sides() {
        let s = DecorationSettings::default();
        let m = HostMetrics::default();
        let b = compute_borders(
            &TestWindow {
                h_maximized: true,
                ..Default::default()
            },
            &s,
            &m,
        );
        assert_eq!(b.left, 0);
        assert_eq!(b.right, 0);
    }

    #[test]
    fn titlebar_height_tracks_tallest_content() {
        let s = DecorationSettings::default();
        let tall_font = HostMetrics {
            font_height: 40,
            ..Default::default()
        };
        let tall_buttons = HostMetrics {
            grid_unit: 40,
            ..Default::default()
        };
        assert!(titlebar_height(&s, &tall_font) >= 40);
        assert!(titlebar_height(&s, &tall_buttons) >= 40 + s.button_size);
    }

    #[test]
    fn resize_only_borders_only_for_borderless() {
        let m = HostMetrics::default();
        assert_eq!(
            resize_only_borders(&settings_with(BorderSize::None), &m),
            Margins::new(18, 0, 18, 18)
        );
        assert_eq!(
            resize_only_borders(&settings_with(BorderSize::NoSides), &m),
            Margins::new(18, 0, 18, 0)
        );
        assert_eq!(
            resize_only_borders(&settings_with(BorderSize::Normal), &m),
            Margins::ZERO
        );
    }
}
