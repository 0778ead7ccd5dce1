//! Screen geometry — the addressable pixel extent and dirty rectangles.

use serde::Serialize;

use crate::options::MatrixOptions;

/// Fixed pixel format of the frame surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PixelFormat {
    /// 32-bit ARGB with premultiplied alpha (`0xAARRGGBB`).
    Argb32Premultiplied,
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelFormat::Argb32Premultiplied => write!(f, "ARGB32-premultiplied"),
        }
    }
}

/// Axis-aligned rectangle in surface coordinates.
///
/// The origin may be negative and the extent may exceed the surface: dirty
/// regions are clipped at flush time, not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// True if the rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersection with another rectangle, or `None` when disjoint.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = i64::from(self.x).max(i64::from(other.x));
        let y0 = i64::from(self.y).max(i64::from(other.y));
        let x1 = (i64::from(self.x) + i64::from(self.width))
            .min(i64::from(other.x) + i64::from(other.width));
        let y1 = (i64::from(self.y) + i64::from(self.height))
            .min(i64::from(other.y) + i64::from(other.height));
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }
}

/// The pixel extent a topology configuration exposes to the frame surface.
///
/// Pure function of [`MatrixOptions`], recomputed on demand: the width spans
/// the daisy chain (`cols × chain_length`) and the height the parallel banks
/// (`rows × parallel`). The surface and the sink both derive from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
}

impl ScreenGeometry {
    pub fn from_options(options: &MatrixOptions) -> Self {
        ScreenGeometry {
            width: options.cols.saturating_mul(options.chain_length),
            height: options.rows.saturating_mul(options.parallel),
        }
    }

    /// Fixed pixel depth in bits.
    pub const fn depth(&self) -> u32 {
        32
    }

    /// Fixed pixel format.
    pub const fn format(&self) -> PixelFormat {
        PixelFormat::Argb32Premultiplied
    }

    /// The full extent as a rectangle at the origin.
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Rect ──

    #[test]
    fn empty_rects() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, 0).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn intersect_overlapping() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));
    }

    #[test]
    fn intersect_contained() {
        let outer = Rect::new(0, 0, 32, 32);
        let inner = Rect::new(4, 4, 8, 8);
        assert_eq!(outer.intersect(&inner), Some(inner));
        assert_eq!(inner.intersect(&outer), Some(inner));
    }

    #[test]
    fn intersect_disjoint_is_none() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(10, 10, 4, 4);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn intersect_touching_edges_is_none() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(4, 0, 4, 4);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn intersect_negative_origin_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 8, 8);
        let dirty = Rect::new(-3, -2, 6, 6);
        assert_eq!(dirty.intersect(&bounds), Some(Rect::new(0, 0, 3, 4)));
    }

    #[test]
    fn intersect_with_empty_is_none() {
        let a = Rect::new(0, 0, 4, 4);
        let empty = Rect::new(1, 1, 0, 0);
        assert_eq!(a.intersect(&empty), None);
    }

    #[test]
    fn intersect_huge_extent_does_not_overflow() {
        let bounds = Rect::new(0, 0, 64, 32);
        let dirty = Rect::new(-1, -1, u32::MAX, u32::MAX);
        assert_eq!(dirty.intersect(&bounds), Some(bounds));
    }

    // ── ScreenGeometry ──

    #[test]
    fn geometry_single_panel() {
        let g = ScreenGeometry::from_options(&MatrixOptions::default());
        assert_eq!(g.width, 32);
        assert_eq!(g.height, 32);
    }

    #[test]
    fn geometry_spans_chain_and_parallel() {
        let options = MatrixOptions {
            rows: 16,
            cols: 32,
            chain_length: 4,
            parallel: 2,
            ..MatrixOptions::default()
        };
        let g = ScreenGeometry::from_options(&options);
        assert_eq!(g.width, 128);
        assert_eq!(g.height, 32);
    }

    #[test]
    fn geometry_fixed_depth_and_format() {
        let g = ScreenGeometry::from_options(&MatrixOptions::default());
        assert_eq!(g.depth(), 32);
        assert_eq!(g.format(), PixelFormat::Argb32Premultiplied);
    }

    #[test]
    fn geometry_bounds_at_origin() {
        let options = MatrixOptions {
            rows: 16,
            cols: 32,
            ..MatrixOptions::default()
        };
        let g = ScreenGeometry::from_options(&options);
        assert_eq!(g.bounds(), Rect::new(0, 0, 32, 16));
    }

    #[test]
    fn geometry_recomputed_per_options() {
        // Stateless: two calls with different options never share state.
        let a = ScreenGeometry::from_options(&MatrixOptions {
            rows: 8,
            ..MatrixOptions::default()
        });
        let b = ScreenGeometry::from_options(&MatrixOptions::default());
        assert_eq!(a.height, 8);
        assert_eq!(b.height, 32);
    }
}
