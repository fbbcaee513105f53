use super::*;

fn size(w: u32, h: u32) -> Size {
    Size::new(w, h).unwrap()
}

fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, image::Rgba(px))
}

#[test]
fn small_inputs_are_not_downscaled() {
    let plan = ResizePlan::new(size(400, 300), size(600, 300), 800).unwrap();
    assert!(!plan.is_downscaled());
    assert_eq!(plan.scaled_first, size(400, 300));
    assert_eq!(plan.scaled_second, size(600, 300));
    assert_eq!(plan.target, size(600, 300));
}

#[test]
fn exactly_at_limit_is_not_downscaled() {
    assert_eq!(downscale_factor(size(800, 800), size(10, 10), 800), None);
}

#[test]
fn large_inputs_share_one_factor() {
    let plan = ResizePlan::new(size(1600, 1200), size(800, 600), 800).unwrap();
    assert_eq!(plan.scale, Some(0.5));
    assert_eq!(plan.scaled_first, size(800, 600));
    assert_eq!(plan.scaled_second, size(400, 300));
    assert_eq!(plan.target, size(800, 600));
}

#[test]
fn factor_uses_the_tighter_axis() {
    // Width ratio 800/1000, height ratio 800/2000: height wins.
    let f = downscale_factor(size(1000, 500), size(300, 2000), 800).unwrap();
    assert!((f - 0.4).abs() < 1e-12);

    let plan = ResizePlan::new(size(1000, 500), size(300, 2000), 800).unwrap();
    assert_eq!(plan.scaled_first, size(400, 200));
    assert_eq!(plan.scaled_second, size(120, 800));
    assert_eq!(plan.target, size(400, 800));
}

#[test]
fn downscaled_target_never_exceeds_limit() {
    let cases = [
        (size(801, 1), size(1, 1)),
        (size(1000, 999), size(999, 1000)),
        (size(4032, 3024), size(1920, 1080)),
        (size(3, 5000), size(7000, 2)),
    ];
    for (a, b) in cases {
        let plan = ResizePlan::new(a, b, 800).unwrap();
        assert!(plan.is_downscaled());
        assert!(plan.target.fits_within(800), "{a} + {b} -> {}", plan.target);
        assert_eq!(plan.target.longest_side(), 800);
    }
}

#[test]
fn tiny_axes_clamp_to_one_pixel() {
    let plan = ResizePlan::new(size(8000, 1), size(10, 10), 800).unwrap();
    assert_eq!(plan.scaled_first, size(800, 1));
    assert_eq!(plan.scaled_second, size(1, 1));
}

#[test]
fn zero_limit_is_rejected() {
    assert!(ResizePlan::new(size(1, 1), size(1, 1), 0).is_err());
}

#[test]
fn normalize_pair_equalizes_dimensions() {
    let a = solid(400, 300, [255, 0, 0, 255]);
    let b = solid(600, 300, [0, 0, 255, 255]);

    let (plan, a, b) = normalize_pair(a, b, 800).unwrap();
    assert_eq!(plan.target, size(600, 300));
    assert_eq!(a.dimensions(), (600, 300));
    assert_eq!(b.dimensions(), (600, 300));
}

#[test]
fn normalize_pair_downscales_large_inputs() {
    let a = solid(1600, 900, [10, 20, 30, 255]);
    let b = solid(400, 1000, [40, 50, 60, 255]);

    let (plan, a, b) = normalize_pair(a, b, 800).unwrap();
    assert!(plan.is_downscaled());
    assert_eq!(plan.target, size(800, 500));
    assert_eq!(a.dimensions(), (800, 500));
    assert_eq!(b.dimensions(), (800, 500));
}

#[test]
fn resize_to_same_size_is_identity() {
    let mut img = solid(3, 2, [1, 2, 3, 4]);
    img.put_pixel(1, 1, image::Rgba([9, 9, 9, 9]));
    let out = resize_to(img.clone(), size(3, 2));
    assert_eq!(out, img);
}
