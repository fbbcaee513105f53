//! Frame timeline assembly: start hold, blend transition, end hold.

use std::sync::Arc;

use image::RgbaImage;

use crate::{
    effects::blend::blend_images,
    foundation::{
        core::Size,
        error::{FadeError, FadeResult},
        params::BlendParams,
    },
};

/// Ordered animation frames sharing one size.
///
/// Hold frames reference the same pixel buffer rather than owning copies.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    frames: Vec<Arc<RgbaImage>>,
    size: Size,
    start_hold: usize,
    transition: usize,
    end_hold: usize,
}

impl FrameSequence {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn frames(&self) -> &[Arc<RgbaImage>] {
        &self.frames
    }

    pub fn iter(&self) -> impl Iterator<Item = &RgbaImage> {
        self.frames.iter().map(Arc::as_ref)
    }

    pub fn start_hold_len(&self) -> usize {
        self.start_hold
    }

    pub fn transition_len(&self) -> usize {
        self.transition
    }

    pub fn end_hold_len(&self) -> usize {
        self.end_hold
    }

    pub fn transition_frames(&self) -> &[Arc<RgbaImage>] {
        &self.frames[self.start_hold..self.start_hold + self.transition]
    }
}

/// `max(1, floor(hold_ms / duration_ms))`.
pub fn hold_frame_count(hold_ms: u32, duration_ms: u32) -> FadeResult<usize> {
    if duration_ms == 0 {
        return Err(FadeError::validation("frame duration must be > 0 ms"));
    }
    Ok(((hold_ms / duration_ms) as usize).max(1))
}

/// Blend weight of transition frame `i` out of `steps`; zero steps pins alpha at 0.
pub fn transition_alpha(i: u32, steps: u32) -> f32 {
    if steps == 0 {
        return 0.0;
    }
    i as f32 / steps as f32
}

/// Build the full timeline from two equally sized images.
pub fn build_frames(
    first: &RgbaImage,
    second: &RgbaImage,
    params: &BlendParams,
) -> FadeResult<FrameSequence> {
    params.validate()?;
    let size = Size::of(first);
    if size != Size::of(second) {
        return Err(FadeError::validation(format!(
            "frame inputs must share one size, got {} and {}",
            size,
            Size::of(second)
        )));
    }

    let start_hold = hold_frame_count(params.hold_start_ms, params.duration_ms)?;
    let end_hold = hold_frame_count(params.hold_end_ms, params.duration_ms)?;
    let transition = params.frames as usize + 1;

    let mut frames = Vec::with_capacity(start_hold + transition + end_hold);

    let head = Arc::new(first.clone());
    frames.extend(std::iter::repeat_n(head, start_hold));

    for i in 0..=params.frames {
        let alpha = transition_alpha(i, params.frames);
        frames.push(Arc::new(blend_images(first, second, alpha)?));
    }

    let tail = frames
        .last()
        .cloned()
        .ok_or_else(|| FadeError::validation("transition produced no frames"))?;
    frames.extend(std::iter::repeat_n(tail, end_hold));

    tracing::debug!(
        start_hold,
        transition,
        end_hold,
        total = frames.len(),
        "built frame sequence"
    );

    Ok(FrameSequence {
        frames,
        size,
        start_hold,
        transition,
        end_hold,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/frames.rs"]
mod tests;
