use core::f32::consts::FRAC_PI_2;

use crate::coords::Vec2;
use crate::progress::pixel_angle;

use super::{smoothstep, value_noise};

/// Parameters of the noisy blob outline.
///
/// All lengths are in the unit square the blob is drawn in (centre at
/// `(0.5, 0.5)`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlobParams {
    /// Thickness of the outline relative to the blob; the stroke radius is a
    /// quarter of it.
    pub inner_radius: f32,

    /// Size of one pixel; the width of the anti-aliased edge.
    pub texel_size: f32,

    /// How many noise cells fit around the outline.
    pub frequency: f32,

    /// How far (in unit space, halved) the noise may push the outline in.
    pub amplitude: f32,

    /// Offset into the noise field; animate it to make the blob wobble.
    pub noise_position: Vec2,
}

impl Default for BlobParams {
    fn default() -> Self {
        Self {
            inner_radius: 0.2,
            texel_size: 0.01,
            frequency: 1.5,
            amplitude: 0.5,
            noise_position: Vec2::zero(),
        }
    }
}

impl BlobParams {
    #[inline]
    pub fn complexity(&self) -> f32 {
        (self.frequency + self.amplitude) * 0.5 + 1.0
    }

    /// Number of candidate points sampled per pixel.
    #[inline]
    pub fn point_count(&self) -> usize {
        (5.0 * self.complexity()).ceil().max(0.0) as usize
    }

    /// Angular window (radians) centred on the pixel's own angle.
    #[inline]
    pub fn search_range(&self) -> f32 {
        0.1 * self.complexity()
    }

    #[inline]
    pub fn path_radius(&self) -> f32 {
        self.inner_radius * 0.25
    }
}

/// Alpha of the blob outline at `pixel_pos` (unit space), in `[0, 1]`.
///
/// The outline is approximated locally: candidate points are spread over
/// [`BlobParams::search_range`] around the pixel's angle, each sitting on a
/// circle pulled inwards by value noise. The distance to the closest one,
/// minus the stroke radius, is mapped through a falling smoothstep one texel
/// wide.
pub fn blob_alpha_at(pixel_pos: Vec2, params: &BlobParams) -> f32 {
    let angle = pixel_angle(pixel_pos);

    let point_count = params.point_count();
    let search_range = params.search_range();
    let path_radius = params.path_radius();
    let centre = Vec2::splat(0.5);

    let start = angle - search_range * 0.5;
    let mut shortest = 1.0f32;

    for i in 0..point_count {
        let a = start + search_range * i as f32 / point_count as f32 - FRAC_PI_2;
        let cs = Vec2::new(a.cos(), a.sin());

        let n = value_noise(params.noise_position + cs * params.frequency);
        let reach = 0.5 - path_radius - params.texel_size - n * 0.5 * params.amplitude;
        let pos = centre + cs * reach;

        shortest = shortest.min(pixel_pos.distance(pos));
    }

    smoothstep(params.texel_size, 0.0, shortest - path_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> BlobParams {
        BlobParams {
            inner_radius: 0.2,
            texel_size: 0.01,
            frequency: 0.0,
            amplitude: 0.0,
            noise_position: Vec2::zero(),
        }
    }

    /// Point at `radius` from the centre, `angle` clockwise from 12 o'clock.
    fn polar(angle: f32, radius: f32) -> Vec2 {
        Vec2::new(0.5 + radius * angle.sin(), 0.5 - radius * angle.cos())
    }

    #[test]
    fn complexity_scales_sampling() {
        let p = calm();
        assert_eq!(p.complexity(), 1.0);
        assert_eq!(p.point_count(), 5);
        assert!((p.search_range() - 0.1).abs() < 1e-6);

        let busy = BlobParams { frequency: 3.0, amplitude: 1.0, ..calm() };
        assert_eq!(busy.complexity(), 3.0);
        assert_eq!(busy.point_count(), 15);
    }

    #[test]
    fn on_path_is_opaque() {
        let p = calm();
        let ring = 0.5 - p.path_radius() - p.texel_size;
        for k in 0..8 {
            let angle = k as f32 * 0.7 + 0.1;
            assert_eq!(blob_alpha_at(polar(angle, ring), &p), 1.0, "angle {angle}");
        }
    }

    #[test]
    fn beyond_one_texel_is_transparent() {
        let p = calm();
        let ring = 0.5 - p.path_radius() - p.texel_size;
        let outside = ring + p.path_radius() + p.texel_size + 0.002;
        let inside = ring - p.path_radius() - p.texel_size - 0.002;
        assert_eq!(blob_alpha_at(polar(1.0, outside), &p), 0.0);
        assert_eq!(blob_alpha_at(polar(1.0, inside), &p), 0.0);
        assert_eq!(blob_alpha_at(Vec2::splat(0.5), &p), 0.0);
    }

    #[test]
    fn edge_is_anti_aliased() {
        let p = calm();
        let ring = 0.5 - p.path_radius() - p.texel_size;
        let mid = ring + p.path_radius() + p.texel_size * 0.5;
        let a = blob_alpha_at(polar(2.0, mid), &p);
        assert!(a > 0.0 && a < 1.0, "{a}");
    }

    #[test]
    fn noisy_alpha_stays_in_unit_range() {
        let p = BlobParams { frequency: 4.0, amplitude: 0.6, noise_position: Vec2::new(3.3, 1.7), ..calm() };
        for y in 0..24 {
            for x in 0..24 {
                let pos = Vec2::new(x as f32 / 23.0, y as f32 / 23.0);
                let a = blob_alpha_at(pos, &p);
                assert!((0.0..=1.0).contains(&a), "{a} at {pos:?}");
            }
        }
    }
}
