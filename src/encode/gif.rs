use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{Delay, Frame, RgbaImage, codecs::gif::GifEncoder};

use crate::{
    compile::frames::FrameSequence,
    foundation::{
        core::Size,
        error::{FadeError, FadeResult},
    },
};

/// NeuQuant sampling speed: 1 is slowest/best, 30 fastest.
pub const DEFAULT_QUANTIZE_SPEED: i32 = 10;

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    pub frame_duration_ms: u32,
    pub out_path: PathBuf,
    pub repeat_forever: bool,
    pub speed: i32,
}

impl EncodeConfig {
    pub fn validate(&self) -> FadeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FadeError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if self.frame_duration_ms == 0 {
            return Err(FadeError::validation(
                "encode frame duration must be non-zero",
            ));
        }
        if !(1..=30).contains(&self.speed) {
            return Err(FadeError::validation(format!(
                "encode speed must be within 1..=30, got {}",
                self.speed
            )));
        }
        Ok(())
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

}

pub fn default_gif_config(
    out_path: impl Into<PathBuf>,
    width: u32,
    height: u32,
    frame_duration_ms: u32,
) -> EncodeConfig {
    EncodeConfig {
        width,
        height,
        frame_duration_ms,
        out_path: out_path.into(),
        repeat_forever: true,
        speed: DEFAULT_QUANTIZE_SPEED,
    }
}

pub fn ensure_parent_dir(path: &Path) -> FadeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncoderKind {
    /// `image`'s GIF encoder.
    Image,
    /// The `gif` crate driven directly, quantizing each frame with NeuQuant.
    Quantized,
}

impl std::fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Image => "image-gif",
            Self::Quantized => "gif-quantized",
        })
    }
}

/// Writes a whole frame sequence as one animation file.
pub trait AnimationEncoder {
    fn kind(&self) -> EncoderKind;

    fn encode(&mut self, cfg: &EncodeConfig, frames: &FrameSequence) -> FadeResult<()>;
}

pub fn create_encoder(kind: EncoderKind) -> Box<dyn AnimationEncoder> {
    match kind {
        EncoderKind::Image => Box::new(ImageGifEncoder),
        EncoderKind::Quantized => Box::new(QuantizedGifEncoder),
    }
}

/// Primary encoder first, then the fallback.
pub fn default_encoder_chain() -> Vec<Box<dyn AnimationEncoder>> {
    vec![
        create_encoder(EncoderKind::Image),
        create_encoder(EncoderKind::Quantized),
    ]
}

pub fn write_animation(cfg: &EncodeConfig, frames: &FrameSequence) -> FadeResult<EncoderKind> {
    let mut chain = default_encoder_chain();
    write_animation_with(&mut chain, cfg, frames)
}

/// Try each encoder in order until one succeeds.
///
/// A failed attempt may leave a partial file behind; the next attempt truncates it.
pub fn write_animation_with(
    encoders: &mut [Box<dyn AnimationEncoder>],
    cfg: &EncodeConfig,
    frames: &FrameSequence,
) -> FadeResult<EncoderKind> {
    cfg.validate()?;
    if frames.is_empty() {
        return Err(FadeError::validation("cannot encode an empty frame sequence"));
    }
    if frames.size() != cfg.size() {
        return Err(FadeError::validation(format!(
            "frame size mismatch: got {}, expected {}",
            frames.size(),
            cfg.size()
        )));
    }
    ensure_parent_dir(&cfg.out_path).map_err(|e| FadeError::encode(e.to_string()))?;

    let count = encoders.len();
    let mut failures = Vec::with_capacity(count);
    for (idx, encoder) in encoders.iter_mut().enumerate() {
        let kind = encoder.kind();
        match encoder.encode(cfg, frames) {
            Ok(()) => {
                tracing::info!(
                    encoder = %kind,
                    path = %cfg.out_path.display(),
                    frames = frames.len(),
                    "animation written"
                );
                return Ok(kind);
            }
            Err(e) => {
                tracing::warn!(encoder = %kind, error = %e, "error saving animation");
                failures.push(format!("{kind}: {e}"));
                if idx + 1 < count {
                    tracing::info!("trying alternative encoder");
                }
            }
        }
    }

    if failures.is_empty() {
        return Err(FadeError::encode("no animation encoders configured"));
    }
    Err(FadeError::encode(failures.join("; ")))
}

pub struct ImageGifEncoder;

impl AnimationEncoder for ImageGifEncoder {
    fn kind(&self) -> EncoderKind {
        EncoderKind::Image
    }

    fn encode(&mut self, cfg: &EncodeConfig, frames: &FrameSequence) -> FadeResult<()> {
        gif_screen_size(cfg)?;
        let file = File::create(&cfg.out_path)
            .with_context(|| format!("create '{}'", cfg.out_path.display()))?;
        let mut writer = BufWriter::new(file);

        {
            let mut encoder = GifEncoder::new_with_speed(&mut writer, cfg.speed);
            if cfg.repeat_forever {
                encoder
                    .set_repeat(image::codecs::gif::Repeat::Infinite)
                    .context("set gif repeat")?;
            }
            let delay = Delay::from_numer_denom_ms(cfg.frame_duration_ms, 1);
            encoder
                .encode_frames(
                    frames
                        .iter()
                        .map(|img| Frame::from_parts(opaque_rgba8(img), 0, 0, delay)),
                )
                .context("encode gif frames")?;
        }

        writer.flush().context("flush gif output")?;
        Ok(())
    }
}

pub struct QuantizedGifEncoder;

impl AnimationEncoder for QuantizedGifEncoder {
    fn kind(&self) -> EncoderKind {
        EncoderKind::Quantized
    }

    fn encode(&mut self, cfg: &EncodeConfig, frames: &FrameSequence) -> FadeResult<()> {
        let (width, height) = gif_screen_size(cfg)?;
        let file = File::create(&cfg.out_path)
            .with_context(|| format!("create '{}'", cfg.out_path.display()))?;
        let mut writer = BufWriter::new(file);

        {
            let mut encoder =
                ::gif::Encoder::new(&mut writer, width, height, &[]).context("start gif stream")?;
            if cfg.repeat_forever {
                encoder
                    .set_repeat(::gif::Repeat::Infinite)
                    .context("set gif repeat")?;
            }

            let delay = delay_centis(cfg.frame_duration_ms);
            let mut rgb = vec![0u8; cfg.size().pixel_count() * 3];
            for img in frames.iter() {
                drop_alpha_rgb8(&mut rgb, img.as_raw())?;
                let mut frame = ::gif::Frame::from_rgb_speed(width, height, &rgb, cfg.speed);
                frame.delay = delay;
                encoder.write_frame(&frame).context("write gif frame")?;
            }
        }

        writer.flush().context("flush gif output")?;
        Ok(())
    }
}

fn gif_screen_size(cfg: &EncodeConfig) -> FadeResult<(u16, u16)> {
    match (u16::try_from(cfg.width), u16::try_from(cfg.height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(FadeError::validation(format!(
            "{} exceeds the gif limit of {}x{}",
            cfg.size(),
            u16::MAX,
            u16::MAX
        ))),
    }
}

/// GIF delays are stored in hundredths of a second.
fn delay_centis(ms: u32) -> u16 {
    (ms.saturating_add(5) / 10).min(u32::from(u16::MAX)) as u16
}

/// Copy with alpha forced to 255. Color channels are kept as-is, not composited.
fn opaque_rgba8(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    for px in out.chunks_exact_mut(4) {
        px[3] = 255;
    }
    out
}

fn drop_alpha_rgb8(dst: &mut [u8], src: &[u8]) -> FadeResult<()> {
    if !src.len().is_multiple_of(4) || dst.len() != src.len() / 4 * 3 {
        return Err(FadeError::validation(
            "drop_alpha_rgb8 expects an rgba8 source and a matching rgb8 destination",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(3).zip(src.chunks_exact(4)) {
        d.copy_from_slice(&s[..3]);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
