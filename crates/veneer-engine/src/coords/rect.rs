use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { origin: min, size: max - min }
    }

    /// Builds a rect from the shader's `vec4(left, top, right, bottom)` form.
    #[inline]
    pub fn from_ltrb(ltrb: [f32; 4]) -> Self {
        Self::from_min_max(Vec2::new(ltrb[0], ltrb[1]), Vec2::new(ltrb[2], ltrb[3]))
    }

    /// `vec4(left, top, right, bottom)` as consumed by the shader headers.
    #[inline]
    pub fn to_ltrb(self) -> [f32; 4] {
        let max = self.max();
        [self.origin.x, self.origin.y, max.x, max.y]
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let min = self.origin.min(self.max());
        let max = self.origin.max(self.max());
        Rect::from_min_max(min, max)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }

    /// Maps `p` into the rect's unit square (`min -> (0, 0)`, `max -> (1, 1)`).
    #[inline]
    pub fn to_unit(self, p: Vec2) -> Vec2 {
        (p - self.origin).div_elem(self.size)
    }
}
