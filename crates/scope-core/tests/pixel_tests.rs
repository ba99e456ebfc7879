// Native tests for device-pixel geometry.

use scope_core::{
    device_px, offset_remainder, snap_container_width, snap_offset, CssRect, DevicePixelBox,
    SnapOptions,
};

#[test]
fn lengths_round_for_common_ratios() {
    let opts = SnapOptions::default();
    for ratio in [1.0, 1.5, 2.0, 3.0] {
        for css in [0.0, 1.0, 99.5, 120.0, 333.33, 1024.0] {
            assert_eq!(
                device_px(css, ratio, opts),
                (css * ratio).round() as u32,
                "css={css} ratio={ratio}"
            );
        }
    }
}

#[test]
fn even_rounding_only_when_forced() {
    // 100.5 * 1.5 = 150.75 rounds to 151
    assert_eq!(device_px(100.5, 1.5, SnapOptions::default()), 151);
    assert_eq!(device_px(100.5, 1.5, SnapOptions { force_even: true }), 150);
    // already even counts are untouched
    assert_eq!(device_px(100.0, 2.0, SnapOptions { force_even: true }), 200);
}

#[test]
fn non_geometric_entries_are_ignored() {
    let rect = CssRect::from_entries([
        ("x", 10.25),
        ("y", 3.5),
        ("width", 300.0),
        ("height", 150.0),
        ("top", 3.5),
        ("right", 310.25),
        ("bottom", 153.5),
        ("left", 10.25),
        ("toJSON", 1.0),
    ]);
    assert_eq!(rect, CssRect::new(10.25, 3.5, 300.0, 150.0));
}

#[test]
fn missing_entries_default_to_zero() {
    let rect = CssRect::from_entries([("width", 640.0)]);
    assert_eq!(rect, CssRect::new(0.0, 0.0, 640.0, 0.0));
}

#[test]
fn offset_remainder_is_scaled_fraction() {
    // 10.3 * 2 = 20.6 -> remainder 0.6 device px
    assert!((offset_remainder(10.3, 2.0) - 0.6).abs() < 1e-9);
    // whole device pixel lines have no remainder
    assert!(offset_remainder(12.5, 2.0).abs() < 1e-9);
}

#[test]
fn snapped_offsets_land_on_device_pixel_lines() {
    for ratio in [1.0, 1.5, 2.0, 3.0] {
        for css in [0.0, 0.4, 10.3, 57.21, 199.99] {
            let snapped = snap_offset(css, ratio);
            assert!(snapped <= css + 1e-9);
            let scaled = snapped * ratio;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "css={css} ratio={ratio} scaled={scaled}"
            );
        }
    }
}

#[test]
fn device_pixel_box_combines_rounding_and_remainders() {
    let rect = CssRect::new(10.3, 20.0, 300.5, 150.25);
    let px = DevicePixelBox::from_css(&rect, 2.0, SnapOptions::default());
    assert_eq!(px.width_px, 601);
    assert_eq!(px.height_px, 301); // 300.5 rounds half away from zero
    assert!((px.left_remainder - 0.6).abs() < 1e-9);
    assert!(px.top_remainder.abs() < 1e-9);
}

#[test]
fn container_snap_properties() {
    for width in [0.0, 5.0, 99.9, 100.0, 101.0, 250.0, 999.99, 1000.0, 1234.56] {
        let snapped = snap_container_width(width);
        assert!(snapped <= width);
        assert_eq!(snapped % 100.0, 0.0);
        assert_eq!(snapped, 100.0 * (width / 100.0).floor());
    }
}
