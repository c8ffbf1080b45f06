//! Fixed layout metrics
//!
//! Margins are in multiples of the host's small spacing unit; the glyph
//! box is the logical coordinate system every button icon is drawn in.

/// Corner radius of the decorated frame, device pixels
pub const FRAME_RADIUS: f32 = 3.0;

/// Title-bar margins, in small-spacing units
pub const TITLEBAR_TOP_MARGIN: i32 = 2;
pub const TITLEBAR_BOTTOM_MARGIN: i32 = 2;
pub const TITLEBAR_SIDE_MARGIN: i32 = 2;

/// Overlap between the shadow tile and the decorated frame, device pixels
pub const SHADOW_OVERLAP: u32 = 3;

/// Side length of the logical box glyphs are drawn in
pub const GLYPH_BOX: f32 = 18.0;

/// Logical reference width the glyph pen width is derived from: the
/// painter window is 20x20 with a 1-unit inset on each side
pub const GLYPH_REF: f32 = 20.0;

/// Stroke width for a glyph in an icon box of `size` device pixels.
///
/// Scales inversely with the box size, floored so thin buttons never
/// collapse to a hairline.
pub fn glyph_pen_width(size: f32) -> f32 {
    1.1 * (GLYPH_REF / size).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pen_width_floors_at_default_size() {
        // at and above the reference size the pen stays at the floor
        assert!((glyph_pen_width(20.0) - 1.1).abs() < 1e-6);
        assert!((glyph_pen_width(40.0) - 1.1).abs() < 1e-6);
    }

    #[test]
    fn pen_width_grows_for_small_buttons() {
        assert!(glyph_pen_width(10.0) > glyph_pen_width(20.0));
    }
}
