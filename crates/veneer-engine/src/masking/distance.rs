use crate::coords::{Rect, Vec2};

use super::MaskingInfo;

/// Signed distance from `position + offset` to the masking rect rounded by
/// `radius`.
///
/// The rect is first shrunk by `radius` on every side. Inside the shrunk
/// rect the result is the (non-positive) Chebyshev distance to its edge;
/// outside, the per-axis excess is combined with the superellipse metric
/// `(dx^e + dy^e)^(1/e)` where `e = corner_exponent`. Along the straight
/// edges this reduces to the plain axis distance, at the corners it traces
/// the rounded profile.
pub fn distance_from_rounded_rect(info: &MaskingInfo, position: Vec2, offset: Vec2, radius: f32) -> f32 {
    let p = position + offset;
    let top_left = info.masking_rect.min() - p;
    let bottom_right = p - info.masking_rect.max();

    let r = Vec2::splat(radius);
    let from_shrunk = (bottom_right + r).max(top_left + r);
    let max_dist = from_shrunk.max_element();

    if max_dist <= 0.0 {
        return max_dist;
    }

    let e = info.corner_exponent;
    let d = from_shrunk.max(Vec2::zero());
    (d.x.powf(e) + d.y.powf(e)).powf(1.0 / e)
}

/// Distance past the drawing rect, in units of `blend_range`.
///
/// Axes with a zero (or negative) blend range contribute 0. Inside the rect
/// the result is negative.
pub fn distance_from_drawing_rect(tex_coord: Vec2, tex_rect: Rect, blend_range: Vec2) -> f32 {
    let scale = |v: f32, range: f32| if range > 0.0 { v / range } else { 0.0 };

    let tl = tex_rect.min() - tex_coord;
    let br = tex_coord - tex_rect.max();

    let top_left = Vec2::new(scale(tl.x, blend_range.x), scale(tl.y, blend_range.y));
    let bottom_right = Vec2::new(scale(br.x, blend_range.x), scale(br.y, blend_range.y));

    top_left.max(bottom_right).max_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(exponent: f32) -> MaskingInfo {
        MaskingInfo::masked(Rect::new(0.0, 0.0, 100.0, 60.0)).with_corner_exponent(exponent)
    }

    fn dist(info: &MaskingInfo, x: f32, y: f32, radius: f32) -> f32 {
        distance_from_rounded_rect(info, Vec2::new(x, y), Vec2::zero(), radius)
    }

    // ── inside ────────────────────────────────────────────────────────────

    #[test]
    fn centre_is_deepest_and_non_positive() {
        let i = info(2.0);
        let centre = dist(&i, 50.0, 30.0, 10.0);
        assert!(centre <= 0.0);
        // Chebyshev distance to the shrunk rect (10..90 x 10..50).
        assert_eq!(centre, -20.0);
    }

    #[test]
    fn distance_increases_toward_edge() {
        let i = info(2.0);
        let mut last = f32::NEG_INFINITY;
        for step in 0..=10 {
            let y = 30.0 - step as f32 * 2.0;
            let d = dist(&i, 50.0, y, 10.0);
            assert!(d > last, "not increasing at y={y}: {d} <= {last}");
            last = d;
        }
    }

    // ── outside ───────────────────────────────────────────────────────────

    #[test]
    fn straight_edge_is_axis_distance() {
        let i = info(2.0);
        // Shrunk rect top is y=10; point is 15 above it.
        assert!((dist(&i, 50.0, -5.0, 10.0) - 15.0).abs() < 1e-4);
    }

    #[test]
    fn circular_corner_matches_euclidean() {
        let i = info(2.0);
        // Shrunk rect corner at (10, 10); offset (-3, -4) from it.
        assert!((dist(&i, 7.0, 6.0, 10.0) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn corner_follows_superellipse_metric() {
        let i = info(4.0);
        let d = dist(&i, 7.0, 6.0, 10.0);
        let expected = (3.0f32.powi(4) + 4.0f32.powi(4)).powf(0.25);
        assert!((d - expected).abs() < 1e-4);
        // Higher exponents pull the corner outward (squarer shape).
        assert!(d < dist(&info(2.0), 7.0, 6.0, 10.0));
    }

    #[test]
    fn offset_shifts_the_sample() {
        let i = info(2.0);
        let a = distance_from_rounded_rect(&i, Vec2::new(40.0, 30.0), Vec2::new(10.0, 0.0), 10.0);
        assert_eq!(a, dist(&i, 50.0, 30.0, 10.0));
    }

    // ── drawing rect ──────────────────────────────────────────────────────

    #[test]
    fn drawing_rect_inside_is_negative() {
        let d = distance_from_drawing_rect(
            Vec2::new(0.5, 0.5),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Vec2::new(0.1, 0.1),
        );
        assert!((d + 5.0).abs() < 1e-4);
    }

    #[test]
    fn drawing_rect_scales_by_blend_range() {
        let d = distance_from_drawing_rect(
            Vec2::new(1.05, 0.5),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Vec2::new(0.1, 0.1),
        );
        assert!((d - 0.5).abs() < 1e-4);
    }

    #[test]
    fn drawing_rect_zero_range_axis_is_ignored() {
        let d = distance_from_drawing_rect(
            Vec2::new(3.0, 0.5),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Vec2::new(0.0, 0.1),
        );
        // X contributes 0; Y is 5 ranges inside.
        assert!((d - 0.0).abs() < 1e-4);
    }
}
