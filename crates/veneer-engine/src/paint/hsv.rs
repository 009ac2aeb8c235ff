//! HSV <-> RGB conversion.
//!
//! Branchless formulation from
//! <http://lolengine.net/blog/2013/07/27/rgb-to-hsv-in-glsl>, extended to
//! carry alpha through unchanged. Hue is in `[0, 1]` and wraps.

use super::Rgba;

#[inline]
fn fract(v: f32) -> f32 {
    v - v.floor()
}

/// `(h, s, v, a)` -> `(r, g, b, a)`.
pub fn hsv_to_rgb(c: Rgba) -> Rgba {
    let (h, s, v) = (c.r, c.g, c.b);
    let channel = |k: f32| {
        let p = (fract(h + k) * 6.0 - 3.0).abs();
        let ramp = (p - 1.0).clamp(0.0, 1.0);
        v * (1.0 + (ramp - 1.0) * s)
    };
    Rgba::new(channel(1.0), channel(2.0 / 3.0), channel(1.0 / 3.0), c.a)
}

/// `(r, g, b, a)` -> `(h, s, v, a)`.
pub fn rgb_to_hsv(c: Rgba) -> Rgba {
    const EPS: f32 = 1.0e-10;

    let p = if c.g >= c.b {
        [c.g, c.b, 0.0, -1.0 / 3.0]
    } else {
        [c.b, c.g, -1.0, 2.0 / 3.0]
    };
    let q = if c.r >= p[0] {
        [c.r, p[1], p[2], p[0]]
    } else {
        [p[0], p[1], p[3], c.r]
    };

    let d = q[0] - q[3].min(q[1]);
    let h = (q[2] + (q[3] - q[1]) / (6.0 * d + EPS)).abs();
    Rgba::new(h, d / (q[0] + EPS), q[0], c.a)
}
