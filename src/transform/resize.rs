//! Bring two inputs to one shared frame size.

use image::{RgbaImage, imageops::FilterType};

use crate::foundation::{
    core::Size,
    error::{FadeError, FadeResult},
};

/// Resampling filter used for every resize.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Sizes involved in normalizing a pair of inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizePlan {
    pub first: Size,
    pub second: Size,
    /// Shared downscale factor, present only when an input exceeded the limit.
    pub scale: Option<f64>,
    pub scaled_first: Size,
    pub scaled_second: Size,
    /// Common output size: per-axis maximum of the scaled inputs.
    pub target: Size,
}

impl ResizePlan {
    pub fn new(first: Size, second: Size, max_dimension: u32) -> FadeResult<Self> {
        if max_dimension == 0 {
            return Err(FadeError::validation("max dimension must be > 0"));
        }
        Size::new(first.width, first.height)?;
        Size::new(second.width, second.height)?;

        let scale = downscale_factor(first, second, max_dimension);
        let (scaled_first, scaled_second) = match scale {
            None => (first, second),
            Some(_) => {
                let longest = first.union(second).longest_side();
                (
                    scale_size(first, max_dimension, longest),
                    scale_size(second, max_dimension, longest),
                )
            }
        };

        Ok(Self {
            first,
            second,
            scale,
            scaled_first,
            scaled_second,
            target: scaled_first.union(scaled_second),
        })
    }

    pub fn is_downscaled(&self) -> bool {
        self.scale.is_some()
    }
}

/// Factor that fits both inputs within `max_dimension`, or `None` when they already fit.
///
/// `min(max / widest, max / tallest)` reduces to `max / longest_side`.
pub fn downscale_factor(first: Size, second: Size, max_dimension: u32) -> Option<f64> {
    let bounds = first.union(second);
    if bounds.fits_within(max_dimension) {
        return None;
    }
    Some(f64::from(max_dimension) / f64::from(bounds.longest_side()))
}

// Exact integer floor of `dim * num / den`; never drops below one pixel.
fn scale_size(size: Size, num: u32, den: u32) -> Size {
    let scale = |v: u32| -> u32 {
        let scaled = u64::from(v) * u64::from(num) / u64::from(den);
        (scaled as u32).max(1)
    };
    Size {
        width: scale(size.width),
        height: scale(size.height),
    }
}

/// Resample to exactly `size`. Images already at that size pass through untouched.
pub fn resize_to(img: RgbaImage, size: Size) -> RgbaImage {
    if Size::of(&img) == size {
        return img;
    }
    image::imageops::resize(&img, size.width, size.height, RESAMPLE_FILTER)
}

/// Downscale both images by a shared factor when needed, then stretch both to the
/// per-axis maximum so they share one size.
///
/// The second step does not preserve aspect ratio when the inputs' proportions differ.
pub fn normalize_pair(
    first: RgbaImage,
    second: RgbaImage,
    max_dimension: u32,
) -> FadeResult<(ResizePlan, RgbaImage, RgbaImage)> {
    let plan = ResizePlan::new(Size::of(&first), Size::of(&second), max_dimension)?;

    let (first, second) = if plan.is_downscaled() {
        tracing::info!(
            size = %plan.first.union(plan.second),
            max_dimension,
            "images are large, resizing for better performance"
        );
        let first = resize_to(first, plan.scaled_first);
        let second = resize_to(second, plan.scaled_second);
        tracing::info!(first = %plan.scaled_first, second = %plan.scaled_second, "resized");
        (first, second)
    } else {
        (first, second)
    };

    let first = resize_to(first, plan.target);
    let second = resize_to(second, plan.target);
    tracing::debug!(target_size = %plan.target, "inputs share a common size");

    Ok((plan, first, second))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/resize.rs"]
mod tests;
