//! Region flusher — propagates dirty rectangles from the surface to the
//! sink.

use crate::geometry::Rect;
use crate::sink::{PixelSink, Result};
use crate::surface::{self, FrameSurface};

/// Flush the pixels of `regions` to `sink`, one `set_pixel` per coordinate.
///
/// Each rectangle is intersected with the surface bounds first; coordinates
/// outside the surface are dropped silently (expected at geometry edges,
/// not an error). Surviving pixels are visited in row-major order, read
/// from the surface, split into (r, g, b) with alpha discarded, and
/// forwarded individually. Overlapping rectangles are flushed as given, so
/// a pixel may be written more than once.
///
/// Returns the number of writes issued.
pub fn flush_regions(
    regions: &[Rect],
    surface: &FrameSurface,
    sink: &mut dyn PixelSink,
) -> Result<u64> {
    let bounds = Rect::new(0, 0, surface.width(), surface.height());
    let mut writes = 0u64;
    for region in regions {
        let Some(clipped) = region.intersect(&bounds) else {
            continue;
        };
        for dy in 0..clipped.height {
            let y = clipped.y as u32 + dy;
            for dx in 0..clipped.width {
                let x = clipped.x as u32 + dx;
                let Some(pixel) = surface.pixel(x, y) else {
                    continue;
                };
                let (r, g, b) = surface::channels(pixel);
                sink.set_pixel(x, y, r, g, b)?;
                writes += 1;
            }
        }
    }
    Ok(writes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SinkError;
    use crate::sink::mock::RecordingSink;
    use crate::surface::argb;

    fn surface_4x4_red() -> FrameSurface {
        let mut s = FrameSurface::new();
        s.resize(4, 4);
        s.fill(argb(255, 0, 0));
        s
    }

    // ── full-surface flush ──

    #[test]
    fn full_rect_writes_every_pixel_once() {
        let surface = surface_4x4_red();
        let mut sink = RecordingSink::new();
        let n = flush_regions(&[Rect::new(0, 0, 4, 4)], &surface, &mut sink).unwrap();

        assert_eq!(n, 16);
        assert_eq!(sink.len(), 16);
        for &(_, _, r, g, b) in sink.snapshot().iter() {
            assert_eq!((r, g, b), (255, 0, 0));
        }
    }

    #[test]
    fn writes_are_row_major_per_rect() {
        let surface = surface_4x4_red();
        let mut sink = RecordingSink::new();
        flush_regions(&[Rect::new(0, 0, 4, 4)], &surface, &mut sink).unwrap();

        let coords: Vec<(u32, u32)> = sink.snapshot().iter().map(|&(x, y, ..)| (x, y)).collect();
        let mut expected = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                expected.push((x, y));
            }
        }
        assert_eq!(coords, expected);
    }

    #[test]
    fn colors_match_surface_contents() {
        let mut surface = FrameSurface::new();
        surface.resize(2, 2);
        surface.set_pixel(0, 0, argb(10, 20, 30));
        surface.set_pixel(1, 0, argb(40, 50, 60));
        surface.set_pixel(0, 1, argb(70, 80, 90));
        surface.set_pixel(1, 1, argb(100, 110, 120));

        let mut sink = RecordingSink::new();
        flush_regions(&[Rect::new(0, 0, 2, 2)], &surface, &mut sink).unwrap();
        assert_eq!(
            sink.snapshot(),
            vec![
                (0, 0, 10, 20, 30),
                (1, 0, 40, 50, 60),
                (0, 1, 70, 80, 90),
                (1, 1, 100, 110, 120),
            ]
        );
    }

    #[test]
    fn alpha_is_not_forwarded() {
        let mut surface = FrameSurface::new();
        surface.resize(1, 1);
        surface.set_pixel(0, 0, 0x8012_3456); // half-transparent

        let mut sink = RecordingSink::new();
        flush_regions(&[Rect::new(0, 0, 1, 1)], &surface, &mut sink).unwrap();
        assert_eq!(sink.snapshot(), vec![(0, 0, 0x12, 0x34, 0x56)]);
    }

    // ── clipping ──

    #[test]
    fn rect_entirely_outside_writes_nothing() {
        let surface = surface_4x4_red();
        let mut sink = RecordingSink::new();
        let n = flush_regions(&[Rect::new(10, 10, 4, 4)], &surface, &mut sink).unwrap();
        assert_eq!(n, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn rect_straddling_boundary_writes_only_in_bounds() {
        let surface = surface_4x4_red();
        let mut sink = RecordingSink::new();
        // Covers x in [2,6), y in [2,6) — only [2,4)×[2,4) is in bounds.
        let n = flush_regions(&[Rect::new(2, 2, 4, 4)], &surface, &mut sink).unwrap();

        assert_eq!(n, 4);
        let coords: Vec<(u32, u32)> = sink.snapshot().iter().map(|&(x, y, ..)| (x, y)).collect();
        assert_eq!(coords, vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
    }

    #[test]
    fn negative_origin_clips_to_zero() {
        let surface = surface_4x4_red();
        let mut sink = RecordingSink::new();
        let n = flush_regions(&[Rect::new(-2, -2, 3, 3)], &surface, &mut sink).unwrap();

        assert_eq!(n, 1);
        assert_eq!(sink.snapshot()[0].0, 0);
        assert_eq!(sink.snapshot()[0].1, 0);
    }

    #[test]
    fn empty_region_list_writes_nothing() {
        let surface = surface_4x4_red();
        let mut sink = RecordingSink::new();
        assert_eq!(flush_regions(&[], &surface, &mut sink).unwrap(), 0);
    }

    #[test]
    fn empty_surface_writes_nothing() {
        let surface = FrameSurface::new();
        let mut sink = RecordingSink::new();
        let n = flush_regions(&[Rect::new(0, 0, 8, 8)], &surface, &mut sink).unwrap();
        assert_eq!(n, 0);
    }

    // ── multiple regions ──

    #[test]
    fn overlapping_rects_write_pixels_twice() {
        let surface = surface_4x4_red();
        let mut sink = RecordingSink::new();
        let regions = [Rect::new(0, 0, 2, 2), Rect::new(1, 1, 2, 2)];
        let n = flush_regions(&regions, &surface, &mut sink).unwrap();
        // 4 + 4 writes; (1,1) appears in both rects.
        assert_eq!(n, 8);
        let count = sink
            .snapshot()
            .iter()
            .filter(|&&(x, y, ..)| (x, y) == (1, 1))
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn regions_flushed_in_given_order() {
        let surface = surface_4x4_red();
        let mut sink = RecordingSink::new();
        let regions = [Rect::new(3, 3, 1, 1), Rect::new(0, 0, 1, 1)];
        flush_regions(&regions, &surface, &mut sink).unwrap();
        let coords: Vec<(u32, u32)> = sink.snapshot().iter().map(|&(x, y, ..)| (x, y)).collect();
        assert_eq!(coords, vec![(3, 3), (0, 0)]);
    }

    // ── error propagation ──

    #[test]
    fn write_failure_propagates() {
        let surface = surface_4x4_red();
        let mut sink = RecordingSink::new();
        sink.fail_writes.set(true);
        let err = flush_regions(&[Rect::new(0, 0, 4, 4)], &surface, &mut sink).unwrap_err();
        assert!(matches!(err, SinkError::WriteFailed(_)));
    }
}
