//! Trace mapping: sample values to canvas pixels.
//!
//! One render frame is one analysis window drawn into the frame-width-wide
//! strip at the right edge of the canvas, after the existing pixels have
//! been shifted left by the same amount. [`TraceCursor`] carries the final
//! sample of the previous frame so consecutive frames join without a step.

/// Live canvas geometry for one render pass.
///
/// Rebuilt from the canvas every pass; `frame_width` and `delta_x` are
/// derived on demand and never cached across a resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub width_px: u32,
    pub height_px: u32,
    pub visible_frames: u32,
}

impl FrameGeometry {
    /// Width of one scroll step in device pixels.
    #[inline]
    pub fn frame_width(&self) -> f64 {
        self.width_px as f64 / self.visible_frames.max(1) as f64
    }

    /// Horizontal step per sample within a frame.
    #[inline]
    pub fn delta_x(&self, window_size: usize) -> f64 {
        self.frame_width() / window_size.max(1) as f64
    }

    /// A zero-size canvas has nothing to draw into.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.width_px > 0 && self.height_px > 0
    }
}

/// Map a sample in [-1, 1] to a vertical pixel position.
///
/// +1 is the top edge, -1 the bottom, 0 the vertical center.
#[inline]
pub fn sample_to_y(value: f32, height_px: u32) -> f64 {
    (height_px as f64 / 2.0) * (1.0 - value as f64)
}

/// Continuity state carried across frame boundaries.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceCursor {
    pub last_value: f32,
    pub last_x: f64,
}

impl TraceCursor {
    /// Back to the midline, as at renderer start.
    pub fn reset(&mut self) {
        *self = TraceCursor::default();
    }

    /// Record the frame's final sample and draw position.
    pub fn advance(&mut self, window: &[f32], geo: &FrameGeometry) {
        if let Some(last) = window.last() {
            self.last_value = *last;
            self.last_x = geo.width_px as f64 - geo.delta_x(window.len());
        }
    }
}

/// Points of one frame's polyline, left to right.
///
/// The first point repeats the previous frame's final sample at
/// `width - frame_width - delta_x`; each of the window's samples then steps
/// `delta_x` to the right.
pub fn trace_points(cursor: &TraceCursor, window: &[f32], geo: &FrameGeometry) -> Vec<(f64, f64)> {
    if window.is_empty() {
        return Vec::new();
    }
    let delta_x = geo.delta_x(window.len());
    let start_x = geo.width_px as f64 - geo.frame_width() - delta_x;
    let mut points = Vec::with_capacity(window.len() + 1);
    points.push((start_x, sample_to_y(cursor.last_value, geo.height_px)));
    for (i, value) in window.iter().enumerate() {
        points.push((
            start_x + (i as f64 + 1.0) * delta_x,
            sample_to_y(*value, geo.height_px),
        ));
    }
    points
}
