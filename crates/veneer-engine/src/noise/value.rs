//! 2D hash and value noise.
//!
//! The classic `fract(sin(dot(...)))` hash; see
//! <https://thebookofshaders.com/11/>. Output depends on `sin` precision, so
//! CPU and GPU results agree only approximately.

use crate::coords::Vec2;

const HASH_DIR: Vec2 = Vec2::new(12.9898, 78.233);
const HASH_SCALE: f32 = 43758.545;

#[inline]
fn fract(v: f32) -> f32 {
    v - v.floor()
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Pseudo-random value in `[0, 1)` for a lattice point.
#[inline]
pub fn random(st: Vec2) -> f32 {
    fract(st.dot(HASH_DIR).sin() * HASH_SCALE)
}

/// Smooth value noise in `[0, 1]`.
///
/// Bilinear interpolation of [`random`] at the four surrounding lattice
/// corners, eased with a cubic Hermite curve.
pub fn value_noise(st: Vec2) -> f32 {
    let i = st.floor();
    let f = st.fract();

    let a = random(i);
    let b = random(i + Vec2::new(1.0, 0.0));
    let c = random(i + Vec2::new(0.0, 1.0));
    let d = random(i + Vec2::new(1.0, 1.0));

    let ux = f.x * f.x * (3.0 - 2.0 * f.x);
    let uy = f.y * f.y * (3.0 - 2.0 * f.y);

    mix(a, b, ux) + (c - a) * uy * (1.0 - ux) + (d - b) * ux * uy
}

/// GLSL `smoothstep`. `edge0 > edge1` yields a falling edge.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_is_deterministic_and_in_range() {
        for k in 0..64 {
            let p = Vec2::new(k as f32 * 0.37, k as f32 * -1.91);
            let v = random(p);
            assert_eq!(v, random(p));
            assert!((0.0..1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn noise_hits_lattice_values() {
        let p = Vec2::new(3.0, -2.0);
        assert_eq!(value_noise(p), random(p));
    }

    #[test]
    fn noise_stays_in_unit_range() {
        for k in 0..200 {
            let p = Vec2::new(k as f32 * 0.173, (k as f32 * 0.311).sin() * 9.0);
            let v = value_noise(p);
            assert!((-1e-6..=1.0 + 1e-6).contains(&v), "{v} at {p:?}");
        }
    }

    #[test]
    fn noise_is_continuous() {
        let p = Vec2::new(4.5, 7.25);
        let eps = Vec2::new(1e-4, 1e-4);
        assert!((value_noise(p) - value_noise(p + eps)).abs() < 1e-2);
    }

    #[test]
    fn smoothstep_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
        // Reversed edges fall from 1 to 0.
        assert_eq!(smoothstep(1.0, 0.0, -1.0), 1.0);
        assert_eq!(smoothstep(1.0, 0.0, 2.0), 0.0);
    }
}
