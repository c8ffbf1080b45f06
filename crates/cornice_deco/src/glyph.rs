//! Button glyph table
//!
//! Each button kind maps to a declarative sequence of primitive draw ops
//! inside the logical 18x18 box, interpreted against the canvas by
//! [`draw_glyph`]. Keeping the table data-driven makes glyph shapes
//! assertable without a live toolkit painter.

use smallvec::{smallvec, SmallVec};

use cornice_paint::canvas::{Canvas, LineCap, LineJoin, StrokeStyle};
use cornice_paint::path::{Path, PathBuilder};
use cornice_paint::{Color, Point, Rect};
use cornice_theme::{ButtonKind, ThemeVariant};

/// One primitive draw op of a glyph
#[derive(Clone, Debug, PartialEq)]
pub enum GlyphOp {
    Line { from: Point, to: Point },
    Polyline(SmallVec<[Point; 3]>),
    FillPolygon(SmallVec<[Point; 3]>),
    StrokeEllipse(Rect),
    FillEllipse(Rect),
    StrokePath(Path),
    Dot(Point),
}

pub type GlyphSpec = SmallVec<[GlyphOp; 3]>;

const fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// The glyph for `kind` in the given state.
///
/// `checked` flips the chevron direction for Maximize and Shade and
/// selects among the OnAllDesktops sub-states; `hovered` only
/// participates in the OnAllDesktops sub-state choice (hover *gating* of
/// the whole glyph is the color policy's job, via a `None` foreground).
/// The Menu kind has no vector glyph and returns an empty spec.
pub fn glyph_spec(
    kind: ButtonKind,
    variant: ThemeVariant,
    checked: bool,
    hovered: bool,
) -> GlyphSpec {
    match kind {
        ButtonKind::Close => close_glyph(variant),
        ButtonKind::Maximize => maximize_glyph(variant, checked),
        ButtonKind::Minimize => minimize_glyph(variant),
        ButtonKind::Shade => shade_glyph(checked),
        ButtonKind::OnAllDesktops => on_all_desktops_glyph(checked, hovered),
        ButtonKind::KeepAbove => keep_above_glyph(variant),
        ButtonKind::KeepBelow => keep_below_glyph(variant),
        ButtonKind::ApplicationMenu => smallvec![
            GlyphOp::Line {
                from: pt(3.5, 5.0),
                to: pt(14.5, 5.0),
            },
            GlyphOp::Line {
                from: pt(3.5, 9.0),
                to: pt(14.5, 9.0),
            },
            GlyphOp::Line {
                from: pt(3.5, 13.0),
                to: pt(14.5, 13.0),
            },
        ],
        ButtonKind::ContextHelp => context_help_glyph(),
        ButtonKind::Menu => SmallVec::new(),
    }
}

fn close_glyph(variant: ThemeVariant) -> GlyphSpec {
    match variant {
        // the sole glyph
        ThemeVariant::Plain => smallvec![
            GlyphOp::Line {
                from: pt(5.0, 5.0),
                to: pt(13.0, 13.0),
            },
            GlyphOp::Line {
                from: pt(5.0, 13.0),
                to: pt(13.0, 5.0),
            },
        ],
        // a smaller hover hint on top of the disc
        ThemeVariant::Filled => smallvec![
            GlyphOp::Line {
                from: pt(6.0, 6.0),
                to: pt(12.0, 12.0),
            },
            GlyphOp::Line {
                from: pt(6.0, 12.0),
                to: pt(12.0, 6.0),
            },
        ],
    }
}

fn maximize_glyph(variant: ThemeVariant, checked: bool) -> GlyphSpec {
    match variant {
        // chevron flips between maximize and restore affordance
        ThemeVariant::Plain => {
            if checked {
                smallvec![GlyphOp::Polyline(smallvec![
                    pt(4.0, 7.0),
                    pt(9.0, 12.0),
                    pt(14.0, 7.0),
                ])]
            } else {
                smallvec![GlyphOp::Polyline(smallvec![
                    pt(4.0, 11.0),
                    pt(9.0, 6.0),
                    pt(14.0, 11.0),
                ])]
            }
        }
        // two small filled triangles as the hover hint
        ThemeVariant::Filled => smallvec![
            GlyphOp::FillPolygon(smallvec![pt(5.0, 13.0), pt(11.0, 13.0), pt(5.0, 7.0)]),
            GlyphOp::FillPolygon(smallvec![pt(13.0, 4.0), pt(7.0, 4.0), pt(13.0, 10.0)]),
        ],
    }
}

fn minimize_glyph(variant: ThemeVariant) -> GlyphSpec {
    let (from, to) = match variant {
        ThemeVariant::Plain => (pt(4.0, 9.0), pt(14.0, 9.0)),
        ThemeVariant::Filled => (pt(6.0, 9.0), pt(12.0, 9.0)),
    };
    smallvec![GlyphOp::Line { from, to }]
}

fn shade_glyph(checked: bool) -> GlyphSpec {
    let chevron = if checked {
        smallvec![pt(4.0, 8.0), pt(9.0, 13.0), pt(14.0, 8.0)]
    } else {
        smallvec![pt(4.0, 13.0), pt(9.0, 8.0), pt(14.0, 13.0)]
    };
    smallvec![
        GlyphOp::Line {
            from: pt(4.0, 5.0),
            to: pt(14.0, 5.0),
        },
        GlyphOp::Polyline(chevron),
    ]
}

/// Four visually distinct sub-states from the checked/hovered pair
fn on_all_desktops_glyph(checked: bool, hovered: bool) -> GlyphSpec {
    match (checked, hovered) {
        (false, false) => smallvec![GlyphOp::StrokeEllipse(Rect::new(5.5, 5.5, 7.0, 7.0))],
        (false, true) => smallvec![GlyphOp::FillEllipse(Rect::new(6.5, 6.5, 5.0, 5.0))],
        (true, false) => smallvec![GlyphOp::FillEllipse(Rect::new(5.0, 5.0, 8.0, 8.0))],
        (true, true) => smallvec![
            GlyphOp::StrokeEllipse(Rect::new(3.0, 3.0, 12.0, 12.0)),
            GlyphOp::FillEllipse(Rect::new(8.0, 8.0, 2.0, 2.0)),
        ],
    }
}

fn keep_above_glyph(variant: ThemeVariant) -> GlyphSpec {
    match variant {
        ThemeVariant::Plain => smallvec![
            GlyphOp::Polyline(smallvec![pt(4.0, 9.0), pt(9.0, 4.0), pt(14.0, 9.0)]),
            GlyphOp::Polyline(smallvec![pt(4.0, 13.0), pt(9.0, 8.0), pt(14.0, 13.0)]),
        ],
        ThemeVariant::Filled => smallvec![GlyphOp::FillPolygon(smallvec![
            pt(5.0, 12.0),
            pt(13.0, 12.0),
            pt(9.0, 6.0),
        ])],
    }
}

fn keep_below_glyph(variant: ThemeVariant) -> GlyphSpec {
    match variant {
        ThemeVariant::Plain => smallvec![
            GlyphOp::Polyline(smallvec![pt(4.0, 5.0), pt(9.0, 10.0), pt(14.0, 5.0)]),
            GlyphOp::Polyline(smallvec![pt(4.0, 9.0), pt(9.0, 14.0), pt(14.0, 9.0)]),
        ],
        ThemeVariant::Filled => smallvec![GlyphOp::FillPolygon(smallvec![
            pt(5.0, 6.0),
            pt(13.0, 6.0),
            pt(9.0, 12.0),
        ])],
    }
}

/// Question mark: arc bowl, cubic tail, and a dot
fn context_help_glyph() -> GlyphSpec {
    let path = PathBuilder::new()
        .move_to(5.0, 6.0)
        .arc_to(9.0, 6.0, 4.0, 2.5, 180.0, -180.0)
        .cubic_to(12.5, 9.5, 9.0, 7.5, 9.0, 11.5)
        .build();
    smallvec![GlyphOp::StrokePath(path), GlyphOp::Dot(pt(9.0, 15.0))]
}

/// Interpret a glyph spec against the canvas.
///
/// Stroked ops use round caps and miter joins; filled ops use the same
/// glyph color. Coordinates are logical (the caller has already scaled
/// the canvas so the icon box spans 18x18 units).
pub fn draw_glyph(canvas: &mut Canvas, spec: &GlyphSpec, color: Color, pen_width: f32) {
    let stroke = StrokeStyle {
        color,
        width: pen_width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Miter,
    };

    for op in spec {
        match op {
            GlyphOp::Line { from, to } => canvas.stroke_line(*from, *to, stroke.clone()),
            GlyphOp::Polyline(points) => {
                let mut builder = PathBuilder::new();
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    builder = builder.move_to(first.x, first.y);
                    for p in iter {
                        builder = builder.line_to(p.x, p.y);
                    }
                }
                canvas.stroke_path(builder.build(), stroke.clone());
            }
            GlyphOp::FillPolygon(points) => {
                let mut builder = PathBuilder::new();
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    builder = builder.move_to(first.x, first.y);
                    for p in iter {
                        builder = builder.line_to(p.x, p.y);
                    }
                }
                canvas.fill_path(builder.close().build(), color);
            }
            GlyphOp::StrokeEllipse(rect) => canvas.stroke_ellipse(*rect, stroke.clone()),
            GlyphOp::FillEllipse(rect) => canvas.fill_ellipse(*rect, color),
            GlyphOp::StrokePath(path) => canvas.stroke_path(path.clone(), stroke.clone()),
            GlyphOp::Dot(at) => canvas.draw_point(*at, stroke.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cornice_paint::canvas::PaintCommand;

    #[test]
    fn maximize_chevron_flips_with_checked() {
        let up = glyph_spec(ButtonKind::Maximize, ThemeVariant::Plain, false, false);
        let down = glyph_spec(ButtonKind::Maximize, ThemeVariant::Plain, true, false);
        assert_ne!(up, down);

        // apex above the endpoints when unchecked, below when checked
        let GlyphOp::Polyline(points) = &up[0] else {
            panic!("expected polyline");
        };
        assert!(points[1].y < points[0].y);
        let GlyphOp::Polyline(points) = &down[0] else {
            panic!("expected polyline");
        };
        assert!(points[1].y > points[0].y);
    }

    #[test]
    fn shade_keeps_top_line_in_both_states() {
        for checked in [false, true] {
            let spec = glyph_spec(ButtonKind::Shade, ThemeVariant::Plain, checked, false);
            assert_eq!(
                spec[0],
                GlyphOp::Line {
                    from: pt(4.0, 5.0),
                    to: pt(14.0, 5.0),
                }
            );
        }
    }

    #[test]
    fn on_all_desktops_has_four_distinct_substates() {
        let specs: Vec<_> = [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .map(|(c, h)| glyph_spec(ButtonKind::OnAllDesktops, ThemeVariant::Plain, c, h))
            .collect();
        for i in 0..specs.len() {
            for j in (i + 1)..specs.len() {
                assert_ne!(specs[i], specs[j], "sub-states {i} and {j} must differ");
            }
        }
    }

    #[test]
    fn menu_has_no_vector_glyph() {
        assert!(glyph_spec(ButtonKind::Menu, ThemeVariant::Plain, false, false).is_empty());
        assert!(glyph_spec(ButtonKind::Menu, ThemeVariant::Filled, false, true).is_empty());
    }

    #[test]
    fn context_help_is_path_plus_dot() {
        let spec = glyph_spec(ButtonKind::ContextHelp, ThemeVariant::Plain, false, false);
        assert!(matches!(spec[0], GlyphOp::StrokePath(_)));
        assert_eq!(spec[1], GlyphOp::Dot(pt(9.0, 15.0)));
    }

    #[test]
    fn filled_keep_above_hint_is_a_filled_triangle() {
        let spec = glyph_spec(ButtonKind::KeepAbove, ThemeVariant::Filled, false, true);
        assert!(matches!(spec[0], GlyphOp::FillPolygon(_)));
    }

    #[test]
    fn draw_glyph_strokes_with_round_caps() {
        let mut canvas = Canvas::new();
        let spec = glyph_spec(ButtonKind::Close, ThemeVariant::Plain, false, false);
        draw_glyph(&mut canvas, &spec, Color::BLACK, 1.1);

        assert_eq!(canvas.commands().len(), 2);
        for cmd in canvas.commands() {
            let PaintCommand::StrokeLine { style, .. } = cmd else {
                panic!("expected stroke lines");
            };
            assert_eq!(style.line_cap, LineCap::Round);
            assert_eq!(style.line_join, LineJoin::Miter);
        }
    }

    #[test]
    fn hamburger_is_three_parallel_lines() {
        let spec = glyph_spec(ButtonKind::ApplicationMenu, ThemeVariant::Plain, false, false);
        assert_eq!(spec.len(), 3);
        for op in &spec {
            let GlyphOp::Line { from, to } = op else {
                panic!("expected lines");
            };
            assert_eq!(from.y, to.y);
        }
    }
}
