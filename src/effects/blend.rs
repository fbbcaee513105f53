use image::RgbaImage;

use crate::foundation::{
    core::Size,
    error::{FadeError, FadeResult},
};

/// Linear mix of one 8-bit channel, truncated toward zero.
///
/// `alpha == 0` returns `a` and `alpha == 1` returns `b` exactly.
#[inline]
pub fn lerp_channel(a: u8, b: u8, alpha: f32) -> u8 {
    ((1.0 - alpha) * f32::from(a) + alpha * f32::from(b)) as u8
}

pub fn blend_in_place(dst: &mut [u8], a: &[u8], b: &[u8], alpha: f32) -> FadeResult<()> {
    if dst.len() != a.len() || dst.len() != b.len() || !dst.len().is_multiple_of(4) {
        return Err(FadeError::validation(
            "blend_in_place expects equal-length rgba8 buffers",
        ));
    }
    let alpha = alpha.clamp(0.0, 1.0);
    for ((d, a), b) in dst.iter_mut().zip(a).zip(b) {
        *d = lerp_channel(*a, *b, alpha);
    }
    Ok(())
}

/// Pixel-wise `(1 - alpha) * a + alpha * b` over two equally sized images.
pub fn blend_images(a: &RgbaImage, b: &RgbaImage, alpha: f32) -> FadeResult<RgbaImage> {
    let size = Size::of(a);
    if size != Size::of(b) {
        return Err(FadeError::validation(format!(
            "blend inputs differ in size: {} vs {}",
            size,
            Size::of(b)
        )));
    }

    let mut out = RgbaImage::new(size.width, size.height);
    blend_in_place(&mut out, a.as_raw(), b.as_raw(), alpha)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blend.rs"]
mod tests;
