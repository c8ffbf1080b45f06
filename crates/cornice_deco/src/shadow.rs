//! Drop-shadow tile cache
//!
//! Every decorated window with the same shadow configuration shares one
//! immutable rasterized tile. The cache hands out `Arc`s keyed by the
//! parameter tuple; a tile lives exactly as long as its last owner, and
//! a configuration change simply resolves to a different key.

use std::sync::{Arc, Weak};

use cornice_paint::{Color, Gradient, GradientStop, Margins, Point, Rect};
use rustc_hash::FxHashMap;

use crate::metrics::SHADOW_OVERLAP;

/// Parameter tuple identifying one shadow rendition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShadowKey {
    pub size: u32,
    pub strength: u8,
    pub color: [u8; 3],
}

/// A rasterized shadow bitmap plus its placement metrics.
///
/// The tile is a `2*size` square, RGBA8 with straight alpha, meant to be
/// nine-patch-stretched around the window by the host. `padding` says
/// how far the tile extends past each window edge; `inner_rect` is the
/// 1px region the host stretches to cover the window body.
pub struct ShadowTile {
    size: u32,
    pixels: Vec<u8>,
    padding: Margins,
    inner_rect: Rect,
}

impl ShadowTile {
    /// Tile edge length in pixels (`2 * size`)
    pub fn edge(&self) -> u32 {
        self.size * 2
    }

    /// RGBA8 pixel data, row-major, `edge() * edge() * 4` bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn padding(&self) -> Margins {
        self.padding
    }

    pub fn inner_rect(&self) -> Rect {
        self.inner_rect
    }

    fn build(key: ShadowKey) -> Self {
        let overlap = SHADOW_OVERLAP;
        // floor the working size so the punch-out and padding terms
        // (size - offset - overlap) stay non-negative for tiny settings
        let size = key.size.max(3 * overlap);
        let edge = 2 * size;
        // keep the top overhang small so the shadow reads as cast downward
        let offset = (6 * size / 16).max(2 * overlap);

        let base = Color::from_rgb8(key.color[0], key.color[1], key.color[2]);
        let strength = key.strength as f32 / 255.0;

        // the gaussian falloff is quantized into ten stops, like a
        // radial-gradient fill would be
        let falloff = |x: f32| (-x * x / 0.15).exp();
        let mut stops: Vec<GradientStop> = (0..10)
            .map(|i| {
                let x = i as f32 / 9.0;
                GradientStop {
                    offset: x,
                    color: base.with_alpha(falloff(x) * strength),
                }
            })
            .collect();
        if let Some(last) = stops.last_mut() {
            last.color = base.with_alpha(0.0);
        }
        let gradient = Gradient::radial(Point::new(size as f32, size as f32), size as f32, stops);

        // region the window body occupies, punched out of the bitmap so
        // nothing shows through a translucent window
        let punch = Rect::new(
            (size - overlap) as f32,
            (size - offset - overlap) as f32,
            (2 * overlap) as f32,
            (offset + 2 * overlap) as f32,
        );

        let ring = base.with_alpha(strength * 0.5);
        let mut pixels = vec![0u8; (edge * edge * 4) as usize];
        for y in 0..edge {
            for x in 0..edge {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                let on_ring = on_boundary(&punch, px, py);
                let color = if on_ring {
                    ring
                } else if punch.contains(Point::new(px, py)) {
                    base.with_alpha(0.0)
                } else {
                    let dx = px - size as f32;
                    let dy = py - size as f32;
                    let t = (dx * dx + dy * dy).sqrt() / size as f32;
                    gradient.sample(t.min(1.0))
                };

                let i = ((y * edge + x) * 4) as usize;
                let [r, g, b, a] = color.to_rgba8();
                pixels[i] = r;
                pixels[i + 1] = g;
                pixels[i + 2] = b;
                pixels[i + 3] = a;
            }
        }

        Self {
            size,
            pixels,
            padding: Margins::new(
                (size - overlap) as i32,
                (size - offset - overlap) as i32,
                (size - overlap) as i32,
                (size - overlap) as i32,
            ),
            inner_rect: Rect::new(size as f32, size as f32, 1.0, 1.0),
        }
    }
}

fn on_boundary(rect: &Rect, x: f32, y: f32) -> bool {
    let inside = rect.contains(Point::new(x, y));
    let interior = rect.adjusted(1.0, 1.0, -1.0, -1.0);
    inside && !(interior.width > 0.0 && interior.height > 0.0 && interior.contains(Point::new(x, y)))
}

/// Shared tile cache.
///
/// Entries are weak, so dropping every decoration using a rendition
/// frees its bitmap; the dead entry is pruned on the next lookup.
#[derive(Default)]
pub struct ShadowCache {
    tiles: FxHashMap<ShadowKey, Weak<ShadowTile>>,
}

impl ShadowCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&mut self, key: ShadowKey) -> Arc<ShadowTile> {
        if let Some(tile) = self.tiles.get(&key).and_then(Weak::upgrade) {
            return tile;
        }
        self.tiles.retain(|_, w| w.strong_count() > 0);
        tracing::debug!(
            size = key.size,
            strength = key.strength,
            "building shadow tile"
        );
        let tile = Arc::new(ShadowTile::build(key));
        self.tiles.insert(key, Arc::downgrade(&tile));
        tile
    }

    /// Number of live cached renditions
    pub fn len(&self) -> usize {
        self.tiles
            .values()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
