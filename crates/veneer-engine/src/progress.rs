//! Circular progress ring membership.

use core::f32::consts::{FRAC_PI_2, TAU};

use crate::coords::Vec2;

/// Angle of `pixel_pos` around the unit square's centre, measured clockwise
/// from 12 o'clock (with +Y down), in `[0, 2π)`.
#[inline]
pub fn pixel_angle(pixel_pos: Vec2) -> f32 {
    let angle = (0.5 - pixel_pos.y).atan2(0.5 - pixel_pos.x) - FRAC_PI_2;
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Whether `pixel_pos` (unit space) is covered by a circular progress ring.
///
/// The ring spans radii `(0.5 * (1 - inner_radius), 0.5)` and is swept
/// clockwise from 12 o'clock over `progress * 2π`. With `rounded_caps`,
/// half-discs of radius `inner_radius / 4` close both ends of the arc.
pub fn inside_progress(pixel_pos: Vec2, progress: f32, inner_radius: f32, rounded_caps: bool) -> bool {
    let angle = pixel_angle(pixel_pos);
    let progress_angle = TAU * progress;
    let centre = Vec2::splat(0.5);

    if progress >= 1.0 || angle < progress_angle {
        let from_centre = pixel_pos.distance(centre);
        let inner_border = 0.5 * (1.0 - inner_radius);
        return from_centre < 0.5 && from_centre > inner_border;
    }

    if rounded_caps {
        let path_radius = 0.25 * inner_radius;

        let arc_start = Vec2::new(0.5, path_radius);
        let end_dir = Vec2::new((progress_angle - FRAC_PI_2).cos(), (progress_angle - FRAC_PI_2).sin());
        let arc_end = centre + end_dir * (0.5 - path_radius);

        let to_arc = pixel_pos.distance(arc_start).min(pixel_pos.distance(arc_end));
        return to_arc < path_radius;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polar(angle: f32, radius: f32) -> Vec2 {
        Vec2::new(0.5 + radius * angle.sin(), 0.5 - radius * angle.cos())
    }

    // ── pixel_angle ───────────────────────────────────────────────────────

    #[test]
    fn angle_is_clockwise_from_top() {
        assert!(pixel_angle(Vec2::new(0.5, 0.0)).abs() < 1e-6);
        assert!((pixel_angle(Vec2::new(1.0, 0.5)) - FRAC_PI_2).abs() < 1e-6);
        assert!((pixel_angle(Vec2::new(0.5, 1.0)) - core::f32::consts::PI).abs() < 1e-6);
        assert!((pixel_angle(Vec2::new(0.0, 0.5)) - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }

    // ── ring ──────────────────────────────────────────────────────────────

    #[test]
    fn inside_swept_sector() {
        assert!(inside_progress(polar(0.5, 0.45), 0.25, 0.2, false));
        assert!(!inside_progress(polar(2.0, 0.45), 0.25, 0.2, false));
    }

    #[test]
    fn outside_ring_radii() {
        assert!(!inside_progress(polar(0.5, 0.3), 0.25, 0.2, false));
        assert!(!inside_progress(polar(0.5, 0.55), 0.25, 0.2, false));
    }

    #[test]
    fn full_progress_covers_whole_ring() {
        for k in 0..12 {
            assert!(inside_progress(polar(k as f32 * 0.5, 0.45), 1.0, 0.2, false));
        }
    }

    // ── caps ──────────────────────────────────────────────────────────────

    #[test]
    fn rounded_cap_extends_before_start() {
        let p = Vec2::new(0.48, 0.05);
        assert!(!inside_progress(p, 0.25, 0.2, false));
        assert!(inside_progress(p, 0.25, 0.2, true));
    }

    #[test]
    fn rounded_cap_extends_past_end() {
        // Just past the quarter mark, on the arc centreline.
        let p = polar(FRAC_PI_2 + 0.03, 0.45);
        assert!(!inside_progress(p, 0.25, 0.2, false));
        assert!(inside_progress(p, 0.25, 0.2, true));
    }
}
