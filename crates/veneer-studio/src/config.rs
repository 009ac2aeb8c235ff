//! TOML scene description.
//!
//! ```toml
//! [canvas]
//! width = 256
//! height = 128
//! clear = [0.1, 0.1, 0.12, 1.0]
//!
//! [[quad]]
//! rect = [16.0, 16.0, 224.0, 96.0]
//! colour = [0.9, 0.3, 0.2, 1.0]
//!
//! [quad.masking]
//! corner_radius = 24.0
//! border_thickness = 3.0
//! border_colour = [1.0, 1.0, 1.0, 1.0]
//!
//! [[blob]]
//! rect = [96.0, 32.0, 64.0, 64.0]
//! frequency = 2.0
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use veneer_engine::coords::{Mat3, Rect, Vec2};
use veneer_engine::masking::MaskingInfo;
use veneer_engine::noise::BlobParams;
use veneer_engine::paint::{BorderGradient, Rgba};
use veneer_engine::raster::QuadDraw;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default, rename = "quad")]
    pub quads: Vec<QuadConfig>,

    #[serde(default, rename = "blob")]
    pub blobs: Vec<BlobConfig>,
}

impl SceneConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        let scene = Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse scene {}", path.display()))?;
        log::info!(
            "loaded scene {}: {} quads, {} blobs",
            path.display(),
            scene.quads.len(),
            scene.blobs.len()
        );
        Ok(scene)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Straight-alpha clear colour.
    #[serde(default = "default_clear")]
    pub clear: [f32; 4],
}

fn default_width() -> u32 {
    256
}

fn default_height() -> u32 {
    256
}

fn default_clear() -> [f32; 4] {
    [0.0, 0.0, 0.0, 0.0]
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            clear: default_clear(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadConfig {
    /// `[x, y, width, height]` in canvas pixels.
    pub rect: [f32; 4],

    #[serde(default = "default_white")]
    pub colour: [f32; 4],

    /// Constant texture colour.
    #[serde(default = "default_white")]
    pub texel: [f32; 4],

    /// Adds light instead of covering (negative vertex alpha).
    #[serde(default)]
    pub emissive: bool,

    #[serde(default)]
    pub premultiplied_texture: bool,

    /// Drawing-rect smoothing, in texture units.
    #[serde(default)]
    pub blend_range: [f32; 2],

    /// Drawing rect in texture space, `[x, y, width, height]`. The quad
    /// spans texture coordinates `(0, 0)..(1, 1)`.
    #[serde(default = "default_tex_rect")]
    pub tex_rect: [f32; 4],

    #[serde(default)]
    pub masking: Option<MaskingConfig>,
}

fn default_white() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_tex_rect() -> [f32; 4] {
    [0.0, 0.0, 1.0, 1.0]
}

impl QuadConfig {
    pub fn rect(&self) -> Rect {
        let [x, y, w, h] = self.rect;
        Rect::new(x, y, w, h)
    }

    pub fn draw(&self) -> QuadDraw {
        let mut colour = Rgba::from(self.colour);
        if self.emissive {
            colour.a = -colour.a.abs();
        }
        let [x, y, w, h] = self.tex_rect;
        let mut draw = QuadDraw::new(self.rect(), colour)
            .with_texel(Rgba::from(self.texel))
            .with_blend_range(Vec2::from(self.blend_range));
        draw.tex_rect = Rect::new(x, y, w, h);
        draw
    }

    /// Masking state of the quad. Without a `[quad.masking]` table the
    /// masking rect covers the whole `viewport`.
    pub fn masking_info(&self, viewport: Rect) -> MaskingInfo {
        match &self.masking {
            Some(masking) => masking.to_info(self.rect()),
            None => MaskingInfo::unmasked(viewport),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskingConfig {
    #[serde(default)]
    pub corner_radius: f32,

    #[serde(default = "default_corner_exponent")]
    pub corner_exponent: f32,

    #[serde(default = "default_one")]
    pub blend_range: f32,

    #[serde(default = "default_one")]
    pub alpha_exponent: f32,

    /// In pixels.
    #[serde(default)]
    pub border_thickness: f32,

    #[serde(default)]
    pub border_colour: Option<[f32; 4]>,

    /// Per-corner border colours: top-left, bottom-left, top-right,
    /// bottom-right. Takes precedence over `border_colour`.
    #[serde(default)]
    pub border_gradient: Option<[[f32; 4]; 4]>,

    /// Mask in quad-local space (rect at the origin) rather than canvas
    /// space. Border gradients then span the quad.
    #[serde(default = "default_true")]
    pub local: bool,

    #[serde(default)]
    pub hollow: Option<HollowConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HollowConfig {
    #[serde(default)]
    pub edge_offset: [f32; 2],

    #[serde(default)]
    pub inner_corner_radius: f32,
}

fn default_corner_exponent() -> f32 {
    2.5
}

fn default_one() -> f32 {
    1.0
}

fn default_true() -> bool {
    true
}

impl MaskingConfig {
    pub fn border(&self) -> BorderGradient {
        if let Some([tl, bl, tr, br]) = self.border_gradient {
            return BorderGradient::new(tl.into(), bl.into(), tr.into(), br.into());
        }
        self.border_colour
            .map(|c| BorderGradient::uniform(c.into()))
            .unwrap_or_default()
    }

    pub fn to_info(&self, rect: Rect) -> MaskingInfo {
        let (masking_rect, to_masking_space) = if self.local {
            (Rect::new(0.0, 0.0, rect.size.x, rect.size.y), Mat3::translation(-rect.origin))
        } else {
            (rect, Mat3::IDENTITY)
        };

        let mut info = MaskingInfo::masked(masking_rect)
            .with_to_masking_space(to_masking_space)
            .with_corner_radius(self.corner_radius)
            .with_corner_exponent(self.corner_exponent)
            .with_blend_range(self.blend_range)
            .with_alpha_exponent(self.alpha_exponent)
            .with_border(self.border_thickness, self.border());

        if let Some(hollow) = &self.hollow {
            info = info.with_hollow(Vec2::from(hollow.edge_offset), hollow.inner_corner_radius);
        }
        info
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobConfig {
    /// `[x, y, width, height]` in canvas pixels.
    pub rect: [f32; 4],

    #[serde(default = "default_white")]
    pub colour: [f32; 4],

    #[serde(default = "default_inner_radius")]
    pub inner_radius: f32,

    /// Edge softness in unit space; defaults to one canvas pixel.
    #[serde(default)]
    pub texel_size: Option<f32>,

    #[serde(default = "default_frequency")]
    pub frequency: f32,

    #[serde(default = "default_amplitude")]
    pub amplitude: f32,

    #[serde(default)]
    pub noise_position: [f32; 2],
}

fn default_inner_radius() -> f32 {
    BlobParams::default().inner_radius
}

fn default_frequency() -> f32 {
    BlobParams::default().frequency
}

fn default_amplitude() -> f32 {
    BlobParams::default().amplitude
}

impl BlobConfig {
    pub fn rect(&self) -> Rect {
        let [x, y, w, h] = self.rect;
        Rect::new(x, y, w, h)
    }

    pub fn params(&self) -> BlobParams {
        let size = self.rect[2].max(self.rect[3]).max(1.0);
        BlobParams {
            inner_radius: self.inner_radius,
            texel_size: self.texel_size.unwrap_or(1.0 / size),
            frequency: self.frequency,
            amplitude: self.amplitude,
            noise_position: Vec2::from(self.noise_position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_uses_defaults() {
        let scene = SceneConfig::from_toml_str("").unwrap();
        assert_eq!(scene.canvas, CanvasConfig::default());
        assert!(scene.quads.is_empty());
        assert!(scene.blobs.is_empty());
    }

    #[test]
    fn parses_quads_and_blobs() {
        let scene = SceneConfig::from_toml_str(
            r#"
            [canvas]
            width = 64
            height = 32

            [[quad]]
            rect = [4.0, 4.0, 56.0, 24.0]
            colour = [1.0, 0.0, 0.0, 1.0]
            emissive = true

            [quad.masking]
            corner_radius = 8.0
            border_thickness = 2.0
            border_colour = [0.0, 0.0, 1.0, 1.0]

            [[blob]]
            rect = [0.0, 0.0, 32.0, 32.0]
            "#,
        )
        .unwrap();

        assert_eq!(scene.canvas.width, 64);
        assert_eq!(scene.canvas.clear, [0.0; 4]);
        assert_eq!(scene.quads.len(), 1);
        assert_eq!(scene.blobs.len(), 1);

        let quad = &scene.quads[0];
        assert_eq!(quad.draw().colour.a, -1.0);

        let masking = quad.masking.as_ref().unwrap();
        assert_eq!(masking.corner_exponent, 2.5);
        assert_eq!(masking.blend_range, 1.0);
        assert!(masking.local);
    }

    #[test]
    fn quad_without_masking_table_uses_viewport() {
        let quad: QuadConfig = toml::from_str("rect = [2.0, 2.0, 4.0, 4.0]\nblend_range = [0.1, 0.1]").unwrap();
        let info = quad.masking_info(Rect::new(0.0, 0.0, 64.0, 32.0));
        assert!(!info.is_masking);
        assert_eq!(info.masking_rect, Rect::new(0.0, 0.0, 64.0, 32.0));
        assert_eq!(quad.draw().tex_rect, Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn local_masking_moves_rect_to_origin() {
        let masking = MaskingConfig {
            corner_radius: 4.0,
            corner_exponent: 2.0,
            blend_range: 1.0,
            alpha_exponent: 1.0,
            border_thickness: 0.0,
            border_colour: None,
            border_gradient: None,
            local: true,
            hollow: None,
        };
        let info = masking.to_info(Rect::new(10.0, 20.0, 30.0, 40.0));

        assert!(info.is_masking);
        assert_eq!(info.masking_rect, Rect::new(0.0, 0.0, 30.0, 40.0));
        assert_eq!(
            info.to_masking_space.transform_point(Vec2::new(10.0, 20.0)),
            Vec2::zero()
        );

        let global = MaskingConfig { local: false, ..masking }.to_info(Rect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(global.masking_rect, Rect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(global.to_masking_space, Mat3::IDENTITY);
    }

    #[test]
    fn gradient_wins_over_single_colour() {
        let mut masking: MaskingConfig = toml::from_str(
            r#"
            border_colour = [1.0, 1.0, 1.0, 1.0]
            border_gradient = [
                [1.0, 0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0, 1.0],
                [0.0, 0.0, 1.0, 1.0],
                [1.0, 1.0, 1.0, 1.0],
            ]
            "#,
        )
        .unwrap();
        assert_eq!(masking.border().corners[1], Rgba::new(0.0, 1.0, 0.0, 1.0));

        masking.border_gradient = None;
        assert_eq!(masking.border(), BorderGradient::uniform(Rgba::white()));
    }

    #[test]
    fn blob_texel_defaults_to_one_pixel() {
        let blob: BlobConfig = toml::from_str("rect = [0.0, 0.0, 50.0, 100.0]").unwrap();
        let params = blob.params();
        assert_eq!(params.texel_size, 0.01);
        assert_eq!(params.frequency, BlobParams::default().frequency);
    }

    #[test]
    fn hollow_table_enables_discard_inner() {
        let masking: MaskingConfig = toml::from_str(
            r#"
            corner_radius = 6.0
            hollow = { edge_offset = [1.0, 1.0], inner_corner_radius = 4.0 }
            "#,
        )
        .unwrap();
        let info = masking.to_info(Rect::new(0.0, 0.0, 20.0, 20.0));
        assert!(info.discard_inner);
        assert_eq!(info.inner_corner_radius, 4.0);
        assert_eq!(info.edge_offset, Vec2::new(1.0, 1.0));
    }
}
