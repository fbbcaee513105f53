use std::path::PathBuf;

use super::*;
use crate::foundation::error::FadeError;

fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, image::Rgba(px))
}

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_pipeline").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn mixed_sizes_produce_documented_timeline() {
    let params = BlendParams {
        frames: 2,
        ..BlendParams::default()
    };
    let (plan, frames) = render_blend(
        solid(400, 300, [255, 0, 0, 255]),
        solid(600, 300, [0, 255, 0, 255]),
        &params,
    )
    .unwrap();

    assert!(!plan.is_downscaled());
    assert_eq!(frames.len(), 20 + 3 + 50);
    assert!(frames.iter().all(|f| f.dimensions() == (600, 300)));
}

#[test]
fn oversized_inputs_are_capped() {
    let params = BlendParams {
        frames: 1,
        hold_start_ms: 0,
        hold_end_ms: 0,
        ..BlendParams::default()
    };
    let (plan, frames) = render_blend(
        solid(1200, 900, [0, 0, 0, 255]),
        solid(300, 1000, [255, 255, 255, 255]),
        &params,
    )
    .unwrap();

    assert!(plan.is_downscaled());
    assert_eq!(frames.size(), Size::new(800, 666).unwrap());
    assert!(frames.size().fits_within(800));
    assert_eq!(frames.len(), 1 + 2 + 1);
}

#[test]
fn invalid_params_fail_before_any_work() {
    let params = BlendParams {
        duration_ms: 0,
        ..BlendParams::default()
    };
    let err = render_blend(solid(1, 1, [0; 4]), solid(1, 1, [0; 4]), &params).unwrap_err();
    assert!(matches!(err, FadeError::Validation(_)));
}

#[test]
fn missing_input_is_a_load_error() {
    let dir = out_dir("missing");
    let err = blend_to_gif(
        &dir.join("nope_a.png"),
        &dir.join("nope_b.png"),
        &dir.join("out.gif"),
        &BlendParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FadeError::Load(_)));
}

#[test]
fn blend_to_gif_writes_and_reports() {
    let dir = out_dir("write");
    let a = dir.join("a.png");
    let b = dir.join("b.png");
    solid(40, 30, [200, 10, 10, 255]).save(&a).unwrap();
    solid(60, 30, [10, 10, 200, 255]).save(&b).unwrap();
    let out = dir.join("out.gif");
    let _ = std::fs::remove_file(&out);

    let params = BlendParams {
        frames: 4,
        duration_ms: 50,
        hold_start_ms: 100,
        hold_end_ms: 150,
        ..BlendParams::default()
    };
    let report = blend_to_gif(&a, &b, &out, &params).unwrap();

    assert_eq!(report.size, Size::new(60, 30).unwrap());
    assert_eq!(report.start_hold, 2);
    assert_eq!(report.transition, 5);
    assert_eq!(report.end_hold, 3);
    assert_eq!(report.frame_count(), 10);
    assert_eq!(report.encoder, EncoderKind::Image);
    assert!(out.exists());
}
