use crate::coords::{Mat3, Rect, Vec2};
use crate::paint::BorderGradient;

use super::MaskingError;

/// Per-draw masking state.
///
/// Mirrors the global masking block the shader headers read. All lengths are
/// in masking space. `border_thickness` is in the same units as the rect;
/// the division by `masking_blend_range` the shader expects happens when the
/// value is consumed (see `Masking` and `MaskingUniform`).
#[derive(Debug, Clone, PartialEq)]
pub struct MaskingInfo {
    /// Maps screen positions to masking space.
    pub to_masking_space: Mat3,

    /// When false, only the per-vertex blend range can fade the fragment.
    pub is_masking: bool,

    pub corner_radius: f32,

    /// Superellipse exponent of the corners. `2.0` is circular; larger
    /// values approach a square.
    pub corner_exponent: f32,

    pub masking_rect: Rect,

    pub border_thickness: f32,
    pub border_colour: BorderGradient,

    /// Width of the alpha falloff at the edge.
    pub masking_blend_range: f32,

    /// Applied to the final alpha factor; values above 1 soften glow.
    pub alpha_exponent: f32,

    /// Offset of the hollow interior relative to the outer shape.
    pub edge_offset: Vec2,

    /// Discard (or fade) fragments inside the inner rounded rect.
    pub discard_inner: bool,
    pub inner_corner_radius: f32,
}

impl Default for MaskingInfo {
    fn default() -> Self {
        Self {
            to_masking_space: Mat3::IDENTITY,
            is_masking: false,
            corner_radius: 0.0,
            corner_exponent: 2.5,
            masking_rect: Rect::default(),
            border_thickness: 0.0,
            border_colour: BorderGradient::default(),
            masking_blend_range: 1.0,
            alpha_exponent: 1.0,
            edge_offset: Vec2::zero(),
            discard_inner: false,
            inner_corner_radius: 0.0,
        }
    }
}

impl MaskingInfo {
    /// Root state for draws that are not masked: the masking rect covers the
    /// whole `viewport`, so only the drawing-rect fade applies.
    pub fn unmasked(viewport: Rect) -> Self {
        Self {
            masking_rect: viewport,
            ..Self::default()
        }
    }

    /// Masking enabled on `rect` with square corners.
    pub fn masked(rect: Rect) -> Self {
        Self {
            is_masking: true,
            masking_rect: rect,
            ..Self::default()
        }
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_corner_exponent(mut self, exponent: f32) -> Self {
        self.corner_exponent = exponent;
        self
    }

    pub fn with_border(mut self, thickness: f32, colour: BorderGradient) -> Self {
        self.border_thickness = thickness;
        self.border_colour = colour;
        self
    }

    pub fn with_blend_range(mut self, range: f32) -> Self {
        self.masking_blend_range = range;
        self
    }

    pub fn with_alpha_exponent(mut self, exponent: f32) -> Self {
        self.alpha_exponent = exponent;
        self
    }

    pub fn with_to_masking_space(mut self, m: Mat3) -> Self {
        self.to_masking_space = m;
        self
    }

    /// Hollows the shape out: fragments inside the inner rounded rect
    /// (shifted by `edge_offset`) are discarded.
    pub fn with_hollow(mut self, edge_offset: Vec2, inner_corner_radius: f32) -> Self {
        self.discard_inner = true;
        self.edge_offset = edge_offset;
        self.inner_corner_radius = inner_corner_radius;
        self
    }

    /// Border thickness in blend-range units, as the shader consumes it.
    #[inline]
    pub fn normalized_border_thickness(&self) -> f32 {
        self.border_thickness / self.masking_blend_range
    }

    /// Checks the invariants the shading math relies on.
    pub fn validate(&self) -> Result<(), MaskingError> {
        let scalars = [
            ("corner_radius", self.corner_radius),
            ("corner_exponent", self.corner_exponent),
            ("border_thickness", self.border_thickness),
            ("masking_blend_range", self.masking_blend_range),
            ("alpha_exponent", self.alpha_exponent),
            ("inner_corner_radius", self.inner_corner_radius),
        ];
        if let Some((field, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MaskingError::NonFinite(field));
        }
        if !self.to_masking_space.is_finite() {
            return Err(MaskingError::NonFinite("to_masking_space"));
        }
        if !self.masking_rect.is_finite() {
            return Err(MaskingError::NonFinite("masking_rect"));
        }
        if !self.edge_offset.is_finite() {
            return Err(MaskingError::NonFinite("edge_offset"));
        }
        if !self.border_colour.is_finite() {
            return Err(MaskingError::NonFinite("border_colour"));
        }

        for (field, value) in [
            ("corner_exponent", self.corner_exponent),
            ("alpha_exponent", self.alpha_exponent),
        ] {
            if value <= 0.0 {
                return Err(MaskingError::NonPositive { field, value });
            }
        }
        if self.is_masking && self.masking_blend_range <= 0.0 {
            return Err(MaskingError::NonPositive {
                field: "masking_blend_range",
                value: self.masking_blend_range,
            });
        }

        let size = self.masking_rect.size;
        if size.x < 0.0 || size.y < 0.0 {
            return Err(MaskingError::InvertedRect { width: size.x, height: size.y });
        }

        Ok(())
    }
}
