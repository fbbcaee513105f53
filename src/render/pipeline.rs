use std::path::Path;

use image::RgbaImage;

use crate::{
    assets::decode::load_image,
    compile::frames::{FrameSequence, build_frames},
    encode::gif::{EncoderKind, default_gif_config, write_animation},
    foundation::{core::Size, error::FadeResult, params::BlendParams},
    transform::resize::{ResizePlan, normalize_pair},
};

/// Summary of one finished render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendReport {
    pub resize: ResizePlan,
    pub size: Size,
    pub start_hold: usize,
    pub transition: usize,
    pub end_hold: usize,
    pub encoder: EncoderKind,
}

impl BlendReport {
    pub fn frame_count(&self) -> usize {
        self.start_hold + self.transition + self.end_hold
    }
}

/// Normalize two decoded images and build the frame timeline.
pub fn render_blend(
    first: RgbaImage,
    second: RgbaImage,
    params: &BlendParams,
) -> FadeResult<(ResizePlan, FrameSequence)> {
    params.validate()?;
    let (plan, first, second) = normalize_pair(first, second, params.max_dimension)?;
    let frames = build_frames(&first, &second, params)?;
    Ok((plan, frames))
}

/// Load both inputs from disk, then [`render_blend`].
pub fn render_blend_from_paths(
    first: &Path,
    second: &Path,
    params: &BlendParams,
) -> FadeResult<(ResizePlan, FrameSequence)> {
    params.validate()?;
    let first = load_image(first)?;
    let second = load_image(second)?;
    render_blend(first, second, params)
}

/// Full pipeline: load, resize, blend, and write a looping GIF to `out`.
///
/// Load and validation failures come back unchanged. When every encoder fails the
/// result is [`crate::FadeError::Encode`].
#[tracing::instrument(skip(params), fields(frames = params.frames, duration_ms = params.duration_ms))]
pub fn blend_to_gif(
    first: &Path,
    second: &Path,
    out: &Path,
    params: &BlendParams,
) -> FadeResult<BlendReport> {
    let (resize, frames) = render_blend_from_paths(first, second, params)?;
    let size = frames.size();

    tracing::info!(
        frames = frames.len(),
        size = %size,
        playback_ms = params.total_duration_ms(frames.len()),
        "saving gif (this may take a moment)"
    );
    let cfg = default_gif_config(out, size.width, size.height, params.duration_ms);
    let encoder = write_animation(&cfg, &frames)?;

    Ok(BlendReport {
        resize,
        size,
        start_hold: frames.start_hold_len(),
        transition: frames.transition_len(),
        end_hold: frames.end_hold_len(),
        encoder,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
