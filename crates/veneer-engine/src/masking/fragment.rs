use crate::coords::{Rect, Vec2};
use crate::paint::Rgba;

/// Interpolated per-fragment inputs of the masking header.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FragmentInput {
    /// Fragment position in masking space.
    pub masking_position: Vec2,

    /// Vertex colour. A negative alpha flags emissive output; the magnitude
    /// is the real colour.
    pub colour: Rgba,

    /// Texture coordinate used for the drawing-rect fade.
    pub tex_coord: Vec2,

    /// Texture-space rect of the drawn quad.
    pub tex_rect: Rect,

    /// Per-axis fade distance at the drawing-rect edges, in texture units.
    /// Zero disables the fade on that axis.
    pub blend_range: Vec2,
}

impl Default for FragmentInput {
    fn default() -> Self {
        Self {
            masking_position: Vec2::zero(),
            colour: Rgba::white(),
            tex_coord: Vec2::zero(),
            tex_rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            blend_range: Vec2::zero(),
        }
    }
}

impl FragmentInput {
    #[inline]
    pub fn at(masking_position: Vec2) -> Self {
        Self { masking_position, ..Self::default() }
    }

    #[inline]
    pub fn with_colour(mut self, colour: Rgba) -> Self {
        self.colour = colour;
        self
    }

    #[inline]
    pub fn with_tex(mut self, tex_coord: Vec2, tex_rect: Rect) -> Self {
        self.tex_coord = tex_coord;
        self.tex_rect = tex_rect;
        self
    }

    #[inline]
    pub fn with_blend_range(mut self, blend_range: Vec2) -> Self {
        self.blend_range = blend_range;
        self
    }
}
