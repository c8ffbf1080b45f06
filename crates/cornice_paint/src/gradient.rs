//! Gradient fills

use crate::color::Color;
use crate::path::Point;

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

/// Gradient type
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    Radial {
        center: Point,
        radius: f32,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Create a simple linear gradient between two colors
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    /// Create a linear gradient from explicit stops
    pub fn linear(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Gradient::Linear { start, end, stops }
    }

    /// Create a radial gradient from explicit stops
    pub fn radial(center: Point, radius: f32, stops: Vec<GradientStop>) -> Self {
        Gradient::Radial {
            center,
            radius,
            stops,
        }
    }

    /// Sample the gradient's stop ramp at `t` (piecewise-linear)
    pub fn sample(&self, t: f32) -> Color {
        let stops = match self {
            Gradient::Linear { stops, .. } => stops,
            Gradient::Radial { stops, .. } => stops,
        };
        let Some(first) = stops.first() else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.mix(b.color, (t - a.offset) / span);
            }
        }
        stops.last().map(|s| s.color).unwrap_or(Color::TRANSPARENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_interpolates_between_stops() {
        let g = Gradient::linear_simple(
            Point::ZERO,
            Point::new(0.0, 1.0),
            Color::BLACK,
            Color::WHITE,
        );
        assert_eq!(g.sample(0.0), Color::BLACK);
        assert_eq!(g.sample(1.0), Color::WHITE);
        let mid = g.sample(0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sample_clamps_outside_ramp() {
        let g = Gradient::radial(
            Point::ZERO,
            10.0,
            vec![
                GradientStop {
                    offset: 0.2,
                    color: Color::WHITE,
                },
                GradientStop {
                    offset: 0.8,
                    color: Color::TRANSPARENT,
                },
            ],
        );
        assert_eq!(g.sample(0.0), Color::WHITE);
        assert_eq!(g.sample(1.0), Color::TRANSPARENT);
    }
}
