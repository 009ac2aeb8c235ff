use crate::coords::{Rect, Vec2};
use crate::masking::{FragmentInput, Masking, MaskingInfo};
use crate::noise::{blob_alpha_at, BlobParams};
use crate::paint::{blend, Rgba};

/// One textured quad as the vertex stage would emit it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadDraw {
    /// Screen-space rect covered by the quad.
    pub rect: Rect,
    /// Vertex colour, straight alpha. Negative alpha marks emissive.
    pub colour: Rgba,
    /// Colour every texture lookup returns.
    pub texel: Rgba,
    /// Texture coordinates at the quad's corners.
    pub tex_coords: Rect,
    /// Drawing rect in texture space; fragments past it fade over
    /// `blend_range`.
    pub tex_rect: Rect,
    /// Edge smoothing of the drawing rect, in texture units.
    pub blend_range: Vec2,
}

impl QuadDraw {
    pub fn new(rect: Rect, colour: Rgba) -> Self {
        Self {
            rect,
            colour,
            texel: Rgba::white(),
            tex_coords: Rect::new(0.0, 0.0, 1.0, 1.0),
            tex_rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            blend_range: Vec2::zero(),
        }
    }

    pub fn with_texel(mut self, texel: Rgba) -> Self {
        self.texel = texel;
        self
    }

    pub fn with_blend_range(mut self, blend_range: Vec2) -> Self {
        self.blend_range = blend_range;
        self
    }

    /// Texture coordinate at screen position `p`.
    fn tex_coord_at(&self, p: Vec2) -> Vec2 {
        self.tex_coords.origin + self.rect.to_unit(p).mul_elem(self.tex_coords.size)
    }
}

/// Premultiplied RGBA float image.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Creates a canvas filled with `clear` (straight alpha).
    pub fn new(width: u32, height: u32, clear: Rgba) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![clear.premultiplied(); len],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major premultiplied pixels.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// `(0, 0)..(width, height)`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    pub fn clear(&mut self, colour: Rgba) {
        self.pixels.fill(colour.premultiplied());
    }

    /// Shades every pixel whose centre lies in `quad.rect`.
    ///
    /// Pixel centres are mapped through `to_masking_space` to obtain the
    /// masking position. Unmasked state without a masking rect is treated
    /// as [`MaskingInfo::unmasked`] over the canvas bounds. Returns the
    /// number of fragments shaded.
    pub fn draw_masked_quad(&mut self, masking: &Masking<'_>, quad: &QuadDraw) -> usize {
        let root;
        let mut masking = *masking;
        if !masking.info().is_masking && masking.info().masking_rect.is_empty() {
            root = MaskingInfo {
                masking_rect: self.bounds(),
                ..masking.info().clone()
            };
            masking = Masking::new(&root).with_premultiplied_texture(masking.texture_has_premultiplied_alpha());
        }

        let info = masking.info();
        if let Err(e) = info.validate() {
            log::warn!("drawing quad with invalid masking info: {e}");
        }

        let to_masking_space = info.to_masking_space;
        let shaded = self.shade(quad.rect, |p| {
            let input = FragmentInput::at(to_masking_space.transform_point(p))
                .with_colour(quad.colour)
                .with_tex(quad.tex_coord_at(p), quad.tex_rect)
                .with_blend_range(quad.blend_range);
            masking.rounded_color(&input, quad.texel)
        });

        log::debug!("masked quad {:?}: {shaded} fragments", quad.rect);
        shaded
    }

    /// Draws a procedural blob outline filling `rect`.
    ///
    /// Blob alpha is evaluated in the rect's unit space and scales `colour`
    /// (straight alpha).
    pub fn draw_blob(&mut self, rect: Rect, params: &BlobParams, colour: Rgba) -> usize {
        let shaded = self.shade(rect, |p| {
            let alpha = blob_alpha_at(rect.to_unit(p), params);
            colour.with_alpha(colour.a * alpha).premultiplied()
        });

        log::debug!("blob {rect:?}: {shaded} fragments");
        shaded
    }

    /// Runs `fragment` at each pixel centre inside `rect` and blends the
    /// result over the canvas.
    fn shade(&mut self, rect: Rect, mut fragment: impl FnMut(Vec2) -> Rgba) -> usize {
        let rect = rect.normalized();
        if rect.is_empty() || !rect.is_finite() || self.width == 0 {
            return 0;
        }

        let (x0, x1) = pixel_span(rect.min().x, rect.max().x, self.width);
        let (y0, y1) = pixel_span(rect.min().y, rect.max().y, self.height);

        let mut shaded = 0;
        for (y, row) in self
            .pixels
            .chunks_exact_mut(self.width as usize)
            .enumerate()
            .take(y1)
            .skip(y0)
        {
            for (x, dst) in row.iter_mut().enumerate().take(x1).skip(x0) {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if !rect.contains(p) {
                    continue;
                }
                *dst = blend(fragment(p), *dst);
                shaded += 1;
            }
        }
        shaded
    }

    /// Unpremultiplied 8-bit RGBA, row-major.
    pub fn to_rgba8_straight(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            let rgba = if px.a <= 0.0 {
                [0; 4]
            } else {
                px.unpremultiplied().to_rgba8()
            };
            out.extend_from_slice(&rgba);
        }
        out
    }
}

/// Pixel indices whose centres may fall in `[min, max)`, clamped to `len`.
fn pixel_span(min: f32, max: f32, len: u32) -> (usize, usize) {
    let lo = (min - 0.5).ceil().max(0.0) as usize;
    let hi = ((max - 0.5).ceil().max(0.0) as usize).min(len as usize);
    (lo.min(hi), hi)
}
