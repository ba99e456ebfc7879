// Native tests for the sample-to-pixel trace mapping.

use scope_core::{sample_to_y, trace_points, FrameGeometry, TraceCursor};

fn geometry(width_px: u32, height_px: u32, visible_frames: u32) -> FrameGeometry {
    FrameGeometry {
        width_px,
        height_px,
        visible_frames,
    }
}

#[test]
fn sample_mapping_spans_the_canvas_height() {
    // +1 top, 0 center, -1 bottom
    assert_eq!(sample_to_y(1.0, 100), 0.0);
    assert_eq!(sample_to_y(0.0, 100), 50.0);
    assert_eq!(sample_to_y(-1.0, 100), 100.0);

    let window = [1.0, 0.0, -1.0, 0.0f32];
    let ys: Vec<f64> = window.iter().map(|v| sample_to_y(*v, 100)).collect();
    assert_eq!(ys, vec![0.0, 50.0, 100.0, 50.0]);
}

#[test]
fn frame_width_and_step_derive_from_visible_frames() {
    let geo = geometry(200, 100, 2);
    assert_eq!(geo.frame_width(), 100.0);
    assert_eq!(geo.delta_x(512), 100.0 / 512.0);
    assert_eq!(geo.delta_x(4), 25.0);
}

#[test]
fn zero_size_geometry_is_not_drawable() {
    assert!(!geometry(0, 100, 2).is_drawable());
    assert!(!geometry(200, 0, 2).is_drawable());
    assert!(geometry(200, 100, 2).is_drawable());
}

#[test]
fn polyline_covers_the_trailing_frame_strip() {
    let geo = geometry(200, 100, 2);
    let cursor = TraceCursor::default();
    let window = [0.5, -0.5, 0.25, 1.0f32];
    let points = trace_points(&cursor, &window, &geo);

    assert_eq!(points.len(), window.len() + 1);
    let delta_x = geo.delta_x(window.len());
    // starts one step left of the fresh strip, at the carried sample
    assert_eq!(points[0].0, 200.0 - 100.0 - delta_x);
    assert_eq!(points[0].1, sample_to_y(0.0, 100));
    // steps delta_x per sample and ends one step short of the right edge
    for pair in points.windows(2) {
        assert!((pair[1].0 - pair[0].0 - delta_x).abs() < 1e-9);
    }
    assert_eq!(points.last().unwrap().0, 200.0 - delta_x);
    assert_eq!(points.last().unwrap().1, sample_to_y(1.0, 100));
}

#[test]
fn consecutive_frames_join_without_a_step() {
    let geo = geometry(480, 120, 6);
    let mut cursor = TraceCursor::default();

    let first = [0.1, 0.7, -0.3, -0.9f32];
    let first_points = trace_points(&cursor, &first, &geo);
    cursor.advance(&first, &geo);

    let second = [0.4, 0.0, 0.2, 0.6f32];
    let second_points = trace_points(&cursor, &second, &geo);

    assert_eq!(
        second_points[0].1,
        first_points.last().unwrap().1,
        "frame k+1 must start at frame k's final y"
    );
}

#[test]
fn cursor_tracks_the_final_draw_position() {
    let geo = geometry(480, 120, 6);
    let mut cursor = TraceCursor::default();
    let window = [0.2, 0.9f32];
    cursor.advance(&window, &geo);
    assert_eq!(cursor.last_value, 0.9);
    // final sample sits one step short of the right edge
    assert_eq!(cursor.last_x, 480.0 - geo.delta_x(window.len()));
}

#[test]
fn cursor_resets_to_the_midline() {
    let geo = geometry(480, 120, 6);
    let mut cursor = TraceCursor::default();
    cursor.advance(&[0.9f32], &geo);
    assert_eq!(cursor.last_value, 0.9);
    cursor.reset();
    assert_eq!(cursor.last_value, 0.0);
    assert_eq!(cursor.last_x, 0.0);
    assert_eq!(sample_to_y(cursor.last_value, 120), 60.0);
}

#[test]
fn empty_window_produces_no_points() {
    let geo = geometry(200, 100, 2);
    assert!(trace_points(&TraceCursor::default(), &[], &geo).is_empty());
}

#[test]
fn geometry_changes_apply_on_the_next_frame() {
    // halving visible_frames doubles the strip on the very next pass
    let mut cursor = TraceCursor::default();
    let window = [0.0, 0.5f32];
    let before = geometry(400, 100, 4);
    cursor.advance(&window, &before);

    let after = geometry(400, 100, 2);
    let points = trace_points(&cursor, &window, &after);
    assert_eq!(points[0].0, 400.0 - 200.0 - after.delta_x(window.len()));
}
