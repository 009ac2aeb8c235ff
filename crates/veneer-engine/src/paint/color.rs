use core::ops::{Add, Mul};

/// Four-channel colour, GLSL `vec4` semantics.
///
/// Unlike a typed colour space, `Rgba` does not carry an alpha convention:
/// the shading pipeline moves between straight and premultiplied alpha
/// explicitly (`premultiplied`, `unpremultiplied`), and vertex colours may
/// carry a negative alpha to flag emissive output.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Smallest alpha a premultiplied texel is raised to before unmultiplying.
///
/// Fully additive texels have zero alpha and could not be unmultiplied
/// otherwise. The value is small enough to be invisible after remultiplying.
pub const MIN_UNMULTIPLY_ALPHA: f32 = 1.0 / 1024.0;

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.r.abs(), self.g.abs(), self.b.abs(), self.a.abs())
    }

    /// Whether the colour carries the emissive flag (negative alpha).
    #[inline]
    pub fn is_emissive(self) -> bool {
        self.a < 0.0
    }

    /// `(rgb * a, a)`.
    #[inline]
    pub fn premultiplied(self) -> Self {
        Self::new(self.r * self.a, self.g * self.a, self.b * self.a, self.a)
    }

    /// Inverse of [`premultiplied`](Self::premultiplied).
    ///
    /// Alpha is first raised to [`MIN_UNMULTIPLY_ALPHA`] so the division is
    /// always defined; the raised alpha is kept.
    #[inline]
    pub fn unpremultiplied(self) -> Self {
        let a = self.a.max(MIN_UNMULTIPLY_ALPHA);
        Self::new(self.r / a, self.g / a, self.b / a, a)
    }

    /// Drops alpha to zero for emissive output, keeping colour.
    ///
    /// With premultiplied blending an alpha of zero means the colour is
    /// added to the destination without occluding it.
    #[inline]
    pub fn to_emissive(self, is_emissive: bool) -> Self {
        if is_emissive { self.with_alpha(0.0) } else { self }
    }

    /// GLSL `mix(self, other, t)`.
    #[inline]
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Clamps every channel to `[0, 1]`.
    #[inline]
    pub fn saturate(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Creates a colour from 8-bit channels.
    #[inline]
    pub fn from_rgba8(c: [u8; 4]) -> Self {
        Self::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        )
    }

    /// Quantizes to 8-bit channels (saturating, round to nearest).
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Alpha-composites `src` over `dst`.
///
/// Both inputs must be premultiplied. They are expected to be linear, but the
/// UI deliberately blends in sRGB space for looks; premultiplication is the
/// only hard requirement.
#[inline]
pub fn blend(src: Rgba, dst: Rgba) -> Rgba {
    src + dst * (1.0 - src.a)
}

impl Add for Rgba {
    type Output = Rgba;
    #[inline]
    fn add(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Mul for Rgba {
    type Output = Rgba;
    #[inline]
    fn mul(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

impl Mul<f32> for Rgba {
    type Output = Rgba;
    #[inline]
    fn mul(self, rhs: f32) -> Rgba {
        Rgba::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl From<[f32; 4]> for Rgba {
    #[inline]
    fn from(v: [f32; 4]) -> Self {
        Rgba::new(v[0], v[1], v[2], v[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-5
            && (a.g - b.g).abs() < 1e-5
            && (a.b - b.b).abs() < 1e-5
            && (a.a - b.a).abs() < 1e-5
    }

    // ── premultiplication ─────────────────────────────────────────────────

    #[test]
    fn premultiplied_scales_rgb_only() {
        let c = Rgba::new(1.0, 0.5, 0.25, 0.5).premultiplied();
        assert_eq!(c, Rgba::new(0.5, 0.25, 0.125, 0.5));
    }

    #[test]
    fn unpremultiply_restores_straight_colour() {
        let straight = Rgba::new(0.8, 0.4, 0.2, 0.5);
        assert!(approx(straight.premultiplied().unpremultiplied(), straight));
    }

    #[test]
    fn unpremultiply_zero_alpha_raises_alpha() {
        let c = Rgba::new(0.5, 0.0, 0.0, 0.0).unpremultiplied();
        assert_eq!(c.a, MIN_UNMULTIPLY_ALPHA);
        assert_eq!(c.r, 0.5 * 1024.0);
        assert!(approx(c.premultiplied(), Rgba::new(0.5, 0.0, 0.0, MIN_UNMULTIPLY_ALPHA)));
    }

    // ── blend ─────────────────────────────────────────────────────────────

    #[test]
    fn opaque_source_replaces_destination() {
        let src = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let dst = Rgba::new(0.0, 1.0, 0.0, 1.0);
        assert_eq!(blend(src, dst), src);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        let dst = Rgba::new(0.2, 0.3, 0.4, 0.5);
        assert_eq!(blend(Rgba::transparent(), dst), dst);
    }

    #[test]
    fn emissive_source_adds_without_occluding() {
        let src = Rgba::new(0.25, 0.25, 0.25, 0.0);
        let dst = Rgba::new(0.5, 0.5, 0.5, 1.0);
        assert!(approx(blend(src, dst), Rgba::new(0.75, 0.75, 0.75, 1.0)));
    }

    // ── emissive ──────────────────────────────────────────────────────────

    #[test]
    fn to_emissive_zeroes_alpha_only_when_flagged() {
        let c = Rgba::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.to_emissive(false), c);
        assert_eq!(c.to_emissive(true), Rgba::new(0.1, 0.2, 0.3, 0.0));
        assert!(Rgba::new(1.0, 1.0, 1.0, -0.5).is_emissive());
    }

    #[test]
    fn rgba8_round_trip_is_stable() {
        assert_eq!(Rgba::from_rgba8([255, 128, 0, 64]).to_rgba8(), [255, 128, 0, 64]);
        assert_eq!(Rgba::new(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }
}
