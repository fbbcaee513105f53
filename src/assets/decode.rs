use std::path::Path;

use image::RgbaImage;

use crate::foundation::{
    core::Size,
    error::{FadeError, FadeResult},
};

/// Decode an in-memory image (any format the `image` crate understands) into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> FadeResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FadeError::load(format!("decode image from memory: {e}")))?;
    into_rgba8(dyn_img)
}

/// Open and decode an image file into straight RGBA8.
pub fn load_image(path: &Path) -> FadeResult<RgbaImage> {
    let dyn_img = image::open(path)
        .map_err(|e| FadeError::load(format!("open image '{}': {e}", path.display())))?;
    let rgba = into_rgba8(dyn_img)?;
    tracing::debug!(path = %path.display(), size = %Size::of(&rgba), "loaded image");
    Ok(rgba)
}

fn into_rgba8(dyn_img: image::DynamicImage) -> FadeResult<RgbaImage> {
    let rgba = dyn_img.into_rgba8();
    let (width, height) = rgba.dimensions();
    Size::new(width, height)?;
    Ok(rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
