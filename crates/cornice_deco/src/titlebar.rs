//! Button-group layout and caption placement
//!
//! Buttons sit in two groups, one anchored to each end of the title bar.
//! The caption takes the space between them; centered alignment falls
//! back to the nearer edge when the text would run into a group.

use cornice_animation::transition::Trigger;
use cornice_paint::{Canvas, Point, Rect, TextAlign};
use cornice_theme::{
    ButtonKind, DecorationSettings, Palette, ThemeVariant, TitleAlignment,
};

use crate::button::DecorationButton;
use crate::host::Capabilities;
use crate::metrics::TITLEBAR_SIDE_MARGIN;

/// Which end button, if any, absorbs extra edge padding into its hit box.
///
/// Applied when the group touches a screen edge: the padding that would
/// otherwise be empty space becomes clickable, keeping the control
/// reachable with an edge-slam of the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeAffordance {
    #[default]
    None,
    WidenFirst,
    WidenLast,
}

/// An ordered run of buttons laid out along one end of the title bar
pub struct ButtonGroup {
    buttons: Vec<DecorationButton>,
}

impl ButtonGroup {
    pub fn new(kinds: &[ButtonKind], caps: &Capabilities, duration_ms: u32) -> Self {
        Self {
            buttons: kinds
                .iter()
                .map(|&kind| DecorationButton::new(kind, caps, duration_ms))
                .collect(),
        }
    }

    pub fn buttons(&self) -> &[DecorationButton] {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut [DecorationButton] {
        &mut self.buttons
    }

    pub fn find(&self, kind: ButtonKind) -> Option<&DecorationButton> {
        self.buttons.iter().find(|b| b.kind() == kind)
    }

    pub fn find_mut(&mut self, kind: ButtonKind) -> Option<&mut DecorationButton> {
        self.buttons.iter_mut().find(|b| b.kind() == kind)
    }

    /// True when no button in the group is currently visible
    pub fn is_empty(&self) -> bool {
        !self.buttons.iter().any(|b| b.is_visible())
    }

    /// Width the laid-out group will occupy, before placement
    pub fn content_width(
        &self,
        button_width: f32,
        spacing: f32,
        edge_padding: f32,
        affordance: EdgeAffordance,
    ) -> f32 {
        let visible = self.buttons.iter().filter(|b| b.is_visible()).count();
        if visible == 0 {
            return 0.0;
        }
        let mut width = visible as f32 * button_width + (visible - 1) as f32 * spacing;
        if affordance != EdgeAffordance::None {
            width += edge_padding;
        }
        width
    }

    /// Place every visible button sequentially from `origin`.
    ///
    /// `vertical_offset` positions the icon box inside the taller
    /// clickable rect; the widened edge button keeps its icon at the
    /// padded position so the visual rhythm is unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn layout(
        &mut self,
        origin: Point,
        button_width: f32,
        button_height: f32,
        vertical_offset: f32,
        spacing: f32,
        edge_padding: f32,
        affordance: EdgeAffordance,
    ) {
        let visible: Vec<usize> = self
            .buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_visible())
            .map(|(i, _)| i)
            .collect();

        let mut x = origin.x;
        for (pos, &i) in visible.iter().enumerate() {
            let first = pos == 0;
            let last = pos + 1 == visible.len();
            let (width, icon_x) = match affordance {
                EdgeAffordance::WidenFirst if first => (button_width + edge_padding, edge_padding),
                EdgeAffordance::WidenLast if last => (button_width + edge_padding, 0.0),
                _ => (button_width, 0.0),
            };
            self.buttons[i].set_layout(
                Rect::new(x, origin.y, width, button_height),
                button_width,
                Point::new(icon_x, vertical_offset),
            );
            x += width + spacing;
        }
    }

    /// Bounding rect of the laid-out visible buttons
    pub fn geometry(&self) -> Option<Rect> {
        let mut rects = self
            .buttons
            .iter()
            .filter(|b| b.is_visible())
            .map(DecorationButton::geometry);
        let first = rects.next()?;
        Some(rects.fold(first, |acc, r| {
            let x = acc.x.min(r.x);
            let y = acc.y.min(r.y);
            Rect::new(x, y, acc.right().max(r.right()) - x, acc.bottom().max(r.bottom()) - y)
        }))
    }

    /// Update hover flags from the pointer position. Returns true when
    /// any button needs a repaint.
    pub fn pointer_motion(&mut self, point: Point, settings: &DecorationSettings) -> bool {
        let mut dirty = false;
        for button in &mut self.buttons {
            let inside = button.contains(point);
            match button.set_hovered(inside, settings) {
                Trigger::Unchanged => {}
                _ => dirty = true,
            }
        }
        dirty
    }

    /// Kind of the visible button under `point`, if any
    pub fn hit(&self, point: Point) -> Option<ButtonKind> {
        self.buttons
            .iter()
            .find(|b| b.contains(point))
            .map(DecorationButton::kind)
    }

    /// Advance every hover transition. Returns true if any is running.
    pub fn tick(&mut self, delta_ms: f32) -> bool {
        let mut dirty = false;
        for button in &mut self.buttons {
            dirty |= button.tick(delta_ms);
        }
        dirty
    }

    pub fn paint(
        &self,
        canvas: &mut Canvas,
        palette: &Palette,
        variant: ThemeVariant,
        settings: &DecorationSettings,
        window_active: bool,
    ) {
        for button in &self.buttons {
            button.paint(canvas, palette, variant, settings, window_active);
        }
    }
}

/// Caption rect and text alignment for the current layout.
///
/// The maximal rect spans the gap between the two groups, inset by the
/// side margin. `CenterFullWidth` centers over the whole decoration
/// width and falls back to the nearer edge of the maximal rect when the
/// text would overlap a group.
#[allow(clippy::too_many_arguments)]
pub fn caption_rect(
    decoration_width: f32,
    caption_height: f32,
    y_offset: f32,
    caption_text_width: f32,
    alignment: TitleAlignment,
    small_spacing: i32,
    left_group: Option<Rect>,
    right_group: Option<Rect>,
) -> (Rect, TextAlign) {
    let side_margin = (TITLEBAR_SIDE_MARGIN * small_spacing) as f32;
    let left_offset = match left_group {
        Some(g) => g.right() + side_margin,
        None => side_margin,
    };
    let right_offset = match right_group {
        Some(g) => decoration_width - g.x + side_margin,
        None => side_margin,
    };
    let max_rect = Rect::new(
        left_offset,
        y_offset,
        decoration_width - left_offset - right_offset,
        caption_height,
    );

    match alignment {
        TitleAlignment::Left => (max_rect, TextAlign::Left),
        TitleAlignment::Right => (max_rect, TextAlign::Right),
        TitleAlignment::Center => (max_rect, TextAlign::Center),
        TitleAlignment::CenterFullWidth => {
            let text_left = (decoration_width - caption_text_width) / 2.0;
            if text_left < left_offset {
                (max_rect, TextAlign::Left)
            } else if text_left + caption_text_width > decoration_width - right_offset {
                (max_rect, TextAlign::Right)
            } else {
                (
                    Rect::new(0.0, y_offset, decoration_width, caption_height),
                    TextAlign::Center,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(kinds: &[ButtonKind]) -> ButtonGroup {
        ButtonGroup::new(kinds, &Capabilities::ALL, 100)
    }

    #[test]
    fn layout_places_buttons_sequentially() {
        let mut g = group(&[ButtonKind::Minimize, ButtonKind::Maximize, ButtonKind::Close]);
        g.layout(
            Point::new(100.0, 2.0),
            22.0,
            26.0,
            2.0,
            4.0,
            5.0,
            EdgeAffordance::None,
        );

        let xs: Vec<f32> = g.buttons().iter().map(|b| b.geometry().x).collect();
        assert_eq!(xs, vec![100.0, 126.0, 152.0]);
        assert_eq!(g.geometry(), Some(Rect::new(100.0, 2.0, 74.0, 26.0)));
    }

    #[test]
    fn hidden_buttons_are_skipped_in_layout() {
        let caps = Capabilities {
            maximizable: false,
            ..Capabilities::ALL
        };
        let mut g = ButtonGroup::new(
            &[ButtonKind::Minimize, ButtonKind::Maximize, ButtonKind::Close],
            &caps,
            100,
        );
        g.layout(
            Point::new(0.0, 0.0),
            22.0,
            26.0,
            2.0,
            4.0,
            5.0,
            EdgeAffordance::None,
        );

        // two visible buttons, no gap where the hidden one would sit
        assert_eq!(g.content_width(22.0, 4.0, 5.0, EdgeAffordance::None), 48.0);
        let close = g.find(ButtonKind::Close).unwrap();
        assert_eq!(close.geometry().x, 26.0);
    }

    #[test]
    fn widen_first_grows_hit_box_and_shifts_icon() {
        let mut g = group(&[ButtonKind::Close, ButtonKind::Minimize]);
        g.layout(
            Point::new(0.0, 0.0),
            22.0,
            26.0,
            2.0,
            4.0,
            5.0,
            EdgeAffordance::WidenFirst,
        );

        let close = g.find(ButtonKind::Close).unwrap();
        assert_eq!(close.geometry().width, 27.0);
        // edge pixels are clickable even though the icon sits at x = 5
        assert!(close.contains(Point::new(0.5, 10.0)));
        let minimize = g.find(ButtonKind::Minimize).unwrap();
        assert_eq!(minimize.geometry().x, 31.0);
        assert_eq!(minimize.geometry().width, 22.0);
    }

    #[test]
    fn widen_last_keeps_icon_at_inner_edge() {
        let mut g = group(&[ButtonKind::Minimize, ButtonKind::Close]);
        g.layout(
            Point::new(0.0, 0.0),
            22.0,
            26.0,
            2.0,
            4.0,
            5.0,
            EdgeAffordance::WidenLast,
        );
        let close = g.find(ButtonKind::Close).unwrap();
        assert_eq!(close.geometry().width, 27.0);
        assert!(close.contains(Point::new(close.geometry().right() - 0.5, 10.0)));
    }

    #[test]
    fn pointer_motion_hovers_only_hit_button() {
        let settings = DecorationSettings {
            animations_enabled: false,
            ..Default::default()
        };
        let mut g = group(&[ButtonKind::Minimize, ButtonKind::Close]);
        g.layout(
            Point::new(0.0, 0.0),
            22.0,
            26.0,
            2.0,
            4.0,
            5.0,
            EdgeAffordance::None,
        );

        assert!(g.pointer_motion(Point::new(30.0, 10.0), &settings));
        assert!(!g.find(ButtonKind::Minimize).unwrap().is_hovered());
        assert!(g.find(ButtonKind::Close).unwrap().is_hovered());
        assert_eq!(g.hit(Point::new(30.0, 10.0)), Some(ButtonKind::Close));

        // leaving clears the hover
        assert!(g.pointer_motion(Point::new(200.0, 10.0), &settings));
        assert!(!g.find(ButtonKind::Close).unwrap().is_hovered());
    }

    #[test]
    fn caption_centers_full_width_when_clear_of_groups() {
        let (rect, align) = caption_rect(
            400.0,
            22.0,
            8.0,
            120.0,
            TitleAlignment::CenterFullWidth,
            4,
            Some(Rect::new(0.0, 0.0, 30.0, 26.0)),
            Some(Rect::new(320.0, 0.0, 80.0, 26.0)),
        );
        assert_eq!(align, TextAlign::Center);
        assert_eq!(rect, Rect::new(0.0, 8.0, 400.0, 22.0));
    }

    #[test]
    fn caption_aligns_left_when_centered_text_hits_left_group() {
        // wide text, heavy left group: centered text would start inside it
        let (rect, align) = caption_rect(
            400.0,
            22.0,
            8.0,
            350.0,
            TitleAlignment::CenterFullWidth,
            4,
            Some(Rect::new(0.0, 0.0, 120.0, 26.0)),
            None,
        );
        assert_eq!(align, TextAlign::Left);
        assert_eq!(rect.x, 128.0);
        assert_eq!(rect.right(), 392.0);
    }

    #[test]
    fn caption_aligns_right_when_centered_text_hits_right_group() {
        let (_, align) = caption_rect(
            400.0,
            22.0,
            8.0,
            300.0,
            TitleAlignment::CenterFullWidth,
            4,
            None,
            Some(Rect::new(260.0, 0.0, 140.0, 26.0)),
        );
        assert_eq!(align, TextAlign::Right);
    }

    #[test]
    fn explicit_alignments_use_max_rect() {
        let left_group = Some(Rect::new(0.0, 0.0, 30.0, 26.0));
        for (alignment, expected) in [
            (TitleAlignment::Left, TextAlign::Left),
            (TitleAlignment::Right, TextAlign::Right),
            (TitleAlignment::Center, TextAlign::Center),
        ] {
            let (rect, align) = caption_rect(400.0, 22.0, 8.0, 50.0, alignment, 4, left_group, None);
            assert_eq!(align, expected);
            assert_eq!(rect.x, 38.0);
            assert_eq!(rect.right(), 392.0);
        }
    }
}
