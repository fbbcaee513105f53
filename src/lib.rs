//! fadegif cross-fades two still images into a looping animated GIF.
//!
//! # Pipeline overview
//!
//! 1. **Load**: decode both inputs to straight RGBA8 ([`load_image`])
//! 2. **Normalize**: shrink oversized inputs by one shared factor, then stretch both to
//!    a common size ([`normalize_pair`])
//! 3. **Compile**: start hold, `frames + 1` linear blends, end hold ([`build_frames`])
//! 4. **Encode**: write an infinitely looping GIF, falling back to a second encoder when
//!    the first one fails ([`write_animation`])
//!
//! [`blend_to_gif`] runs all four steps.
#![forbid(unsafe_code)]

mod assets;
mod compile;
mod effects;
mod encode;
mod foundation;
mod render;
mod transform;

pub use assets::decode::{decode_image, load_image};
pub use compile::frames::{FrameSequence, build_frames, hold_frame_count, transition_alpha};
pub use effects::blend::{blend_images, blend_in_place, lerp_channel};
pub use encode::gif::{
    AnimationEncoder, DEFAULT_QUANTIZE_SPEED, EncodeConfig, EncoderKind, ImageGifEncoder,
    QuantizedGifEncoder, create_encoder, default_encoder_chain, default_gif_config,
    ensure_parent_dir, write_animation, write_animation_with,
};
pub use foundation::core::Size;
pub use foundation::error::{FadeError, FadeResult};
pub use foundation::params::{BlendParams, DEFAULT_MAX_DIMENSION};
pub use render::pipeline::{BlendReport, blend_to_gif, render_blend, render_blend_from_paths};
pub use transform::resize::{ResizePlan, downscale_factor, normalize_pair, resize_to};
