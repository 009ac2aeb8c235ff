use std::path::Path;

use anyhow::{Context, Result};
use veneer_engine::masking::Masking;
use veneer_engine::paint::Rgba;
use veneer_engine::raster::Canvas;

use crate::config::SceneConfig;

/// Rasterizes every quad, then every blob, in file order.
pub fn render_scene(scene: &SceneConfig) -> Canvas {
    let mut canvas = Canvas::new(scene.canvas.width, scene.canvas.height, Rgba::from(scene.canvas.clear));

    for quad in &scene.quads {
        let info = quad.masking_info(canvas.bounds());
        let masking = Masking::new(&info).with_premultiplied_texture(quad.premultiplied_texture);
        canvas.draw_masked_quad(&masking, &quad.draw());
    }

    for blob in &scene.blobs {
        canvas.draw_blob(blob.rect(), &blob.params(), Rgba::from(blob.colour));
    }

    canvas
}

pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.to_rgba8_straight())
        .context("canvas size does not match its pixel buffer")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}x{} image to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}
