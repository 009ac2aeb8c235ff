use crate::coords::Vec2;
use crate::paint::{blend, Rgba};

use super::{distance_from_drawing_rect, distance_from_rounded_rect, FragmentInput, MaskingInfo};

/// Coverage of a fragment that survived masking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coverage {
    /// Alpha multiplier in `(0, 1]`, after the alpha exponent.
    pub alpha: f32,

    /// Fill vs. border mix: `1` is pure fill, `<= 0` is pure border.
    pub colour_weight: f32,
}

/// Evaluates the masking header for one draw.
///
/// Bundles the per-draw [`MaskingInfo`] with the texture alpha convention of
/// the draw; everything else comes in per fragment.
#[derive(Debug, Copy, Clone)]
pub struct Masking<'a> {
    info: &'a MaskingInfo,
    texture_has_premultiplied_alpha: bool,
}

impl<'a> Masking<'a> {
    #[inline]
    pub fn new(info: &'a MaskingInfo) -> Self {
        Self { info, texture_has_premultiplied_alpha: false }
    }

    /// Declares that sampled texels are premultiplied and must be
    /// unmultiplied before shading.
    #[inline]
    pub fn with_premultiplied_texture(mut self, premultiplied: bool) -> Self {
        self.texture_has_premultiplied_alpha = premultiplied;
        self
    }

    #[inline]
    pub fn info(&self) -> &'a MaskingInfo {
        self.info
    }

    #[inline]
    pub fn texture_has_premultiplied_alpha(&self) -> bool {
        self.texture_has_premultiplied_alpha
    }

    /// Border colour at a masking-space position.
    ///
    /// The gradient is sampled at `position / rect_size`, i.e. positions are
    /// taken relative to the masking-space origin.
    pub fn border_colour(&self, position: Vec2) -> Rgba {
        let rect = self.info.masking_rect;
        let rel = position.div_elem(rect.max() - rect.min());
        self.info.border_colour.sample(rel)
    }

    /// Whether the fragment takes the unmasked fast path.
    #[inline]
    fn is_passthrough(&self, input: &FragmentInput) -> bool {
        !self.info.is_masking && input.blend_range.is_zero()
    }

    /// Masking coverage of a fragment, or `None` when it is fully masked out.
    ///
    /// Only meaningful when masking is active or the fragment carries a
    /// blend range; [`rounded_color`](Self::rounded_color) skips it otherwise.
    pub fn coverage(&self, input: &FragmentInput) -> Option<Coverage> {
        let info = self.info;
        let blend_range = info.masking_blend_range;

        let dist = distance_from_rounded_rect(info, input.masking_position, Vec2::zero(), info.corner_radius);
        let mut alpha = 1.0f32;

        if info.discard_inner {
            let inner_dist = if info.edge_offset.is_zero() && info.inner_corner_radius == info.corner_radius {
                dist
            } else {
                distance_from_rounded_rect(
                    info,
                    input.masking_position,
                    info.edge_offset,
                    info.inner_corner_radius,
                )
            };

            // For hollow shapes the vertex blend range carries the blend range
            // of the edge-effect container; it drives the inner fade.
            let inner_blend = (info.inner_corner_radius - blend_range - inner_dist) / input.blend_range.x;
            if inner_blend > 1.0 {
                return None;
            }

            // Pre-compensate for the alpha exponent applied below.
            alpha = (1.0 - inner_blend).min(1.0).powf(1.0 / info.alpha_exponent);
        }

        let dist = dist / blend_range;

        // Keeps radii below one blend range from fading the whole shape.
        let radius_correction = if info.corner_radius <= 0.0 {
            blend_range
        } else {
            (blend_range - info.corner_radius).max(0.0)
        };
        let fade_start = (info.corner_radius + radius_correction) / blend_range;
        alpha *= (fade_start - dist).min(1.0);

        if input.blend_range.x > 0.0 || input.blend_range.y > 0.0 {
            let drawing = distance_from_drawing_rect(input.tex_coord, input.tex_rect, input.blend_range);
            alpha *= (1.0 - drawing).clamp(0.0, 1.0);
        }

        if alpha <= 0.0 {
            return None;
        }

        let alpha = alpha.powf(info.alpha_exponent);

        let border_start = 1.0 + fade_start - info.normalized_border_thickness();
        let colour_weight = (border_start - dist).min(1.0);

        Some(Coverage { alpha, colour_weight })
    }

    /// Final premultiplied colour of a fragment.
    ///
    /// `texel` is the sampled texture colour (straight alpha unless the draw
    /// declared premultiplied textures). The output is premultiplied; emissive
    /// fragments (negative vertex alpha) come out with zero alpha.
    pub fn rounded_color(&self, input: &FragmentInput, texel: Rgba) -> Rgba {
        let texel = if self.texture_has_premultiplied_alpha {
            texel.unpremultiplied()
        } else {
            texel
        };

        let is_emissive = input.colour.is_emissive();
        let content = input.colour.abs() * texel;

        if self.is_passthrough(input) {
            return content.premultiplied().to_emissive(is_emissive);
        }

        let Some(coverage) = self.coverage(input) else {
            return Rgba::transparent();
        };

        if coverage.colour_weight == 1.0 {
            return content
                .with_alpha(content.a * coverage.alpha)
                .premultiplied()
                .to_emissive(is_emissive);
        }

        let border = self.border_colour(input.masking_position);

        if coverage.colour_weight <= 0.0 {
            return border
                .with_alpha(border.a * coverage.alpha)
                .premultiplied()
                .to_emissive(is_emissive);
        }

        let fill = content.with_alpha(content.a * coverage.alpha);
        let border = border.with_alpha(border.a * (1.0 - coverage.colour_weight));
        blend(border.premultiplied(), fill.premultiplied()).to_emissive(is_emissive)
    }
}
