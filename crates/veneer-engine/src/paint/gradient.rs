use crate::coords::Vec2;

use super::Rgba;

/// Border colour gradient defined by its four corners.
///
/// Stored in the shader's `mat4` column order:
/// `[top_left, bottom_left, top_right, bottom_right]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BorderGradient {
    pub corners: [Rgba; 4],
}

impl BorderGradient {
    #[inline]
    pub const fn new(top_left: Rgba, bottom_left: Rgba, top_right: Rgba, bottom_right: Rgba) -> Self {
        Self { corners: [top_left, bottom_left, top_right, bottom_right] }
    }

    /// Single colour on all corners.
    #[inline]
    pub const fn uniform(c: Rgba) -> Self {
        Self { corners: [c; 4] }
    }

    /// Vertical gradient, `top` at the top edge and `bottom` at the bottom.
    #[inline]
    pub const fn vertical(top: Rgba, bottom: Rgba) -> Self {
        Self::new(top, bottom, top, bottom)
    }

    /// Bilinear sample at `rel` (unit coordinates, not clamped).
    #[inline]
    pub fn sample(&self, rel: Vec2) -> Rgba {
        let [tl, bl, tr, br] = self.corners;
        let top = tl.lerp(tr, rel.x);
        let bottom = bl.lerp(br, rel.x);
        top.lerp(bottom, rel.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.corners.iter().all(|c| c.is_finite())
    }

    /// Column-major `mat4` payload.
    #[inline]
    pub fn to_cols(&self) -> [[f32; 4]; 4] {
        self.corners.map(Rgba::to_array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);
    const WHITE: Rgba = Rgba::white();

    fn close(a: Rgba, b: Rgba) -> bool {
        (a.to_array().iter().zip(b.to_array())).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn corners_sample_exactly() {
        let g = BorderGradient::new(RED, GREEN, BLUE, WHITE);
        assert_eq!(g.sample(Vec2::new(0.0, 0.0)), RED);
        assert_eq!(g.sample(Vec2::new(0.0, 1.0)), GREEN);
        assert_eq!(g.sample(Vec2::new(1.0, 0.0)), BLUE);
        assert_eq!(g.sample(Vec2::new(1.0, 1.0)), WHITE);
    }

    #[test]
    fn vertical_gradient_ignores_x() {
        let g = BorderGradient::vertical(RED, BLUE);
        assert_eq!(g.sample(Vec2::new(0.0, 0.5)), g.sample(Vec2::new(1.0, 0.5)));
        assert!(close(g.sample(Vec2::new(0.3, 0.5)), Rgba::new(0.5, 0.0, 0.5, 1.0)));
    }

    #[test]
    fn uniform_is_constant() {
        let g = BorderGradient::uniform(GREEN);
        assert!(close(g.sample(Vec2::new(0.7, 0.2)), GREEN));
    }
}
