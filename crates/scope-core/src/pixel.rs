//! Device-pixel-exact geometry.
//!
//! Canvas backing stores are sized in physical device pixels while layout
//! hands out CSS-pixel boxes, so every size that reaches a canvas goes
//! through the rounding here. Offsets get the fractional remainder treatment
//! instead: an absolutely-positioned element shifted by the remainder lands
//! on an exact device pixel line.

use crate::constants::CONTAINER_WIDTH_QUANTUM_PX;

/// CSS-pixel bounding box as reported by layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CssRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CssRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rect from loosely-typed (name, value) entries.
    ///
    /// The fallback resize path serializes a DOMRect before handing it over,
    /// which carries non-geometric keys (`toJSON`) and derived ones (`x`,
    /// `right`, ...). Only the four fields named here are consumed; anything
    /// else is dropped.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut rect = CssRect::default();
        for (name, value) in entries {
            match name {
                "left" => rect.left = value,
                "top" => rect.top = value,
                "width" => rect.width = value,
                "height" => rect.height = value,
                _ => {}
            }
        }
        rect
    }
}

/// Rounding policy for CSS-to-device conversions.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapOptions {
    /// Round lengths down to an even pixel count. Workaround for
    /// inconsistent fractional-DPR rendering in one engine; leave disabled
    /// unless that artifact shows up.
    pub force_even: bool,
}

/// Scale a CSS length to whole device pixels.
#[inline]
pub fn device_px(css: f64, dpr: f64, opts: SnapOptions) -> u32 {
    let px = (css * dpr).round().max(0.0) as u32;
    if opts.force_even {
        px & !1
    } else {
        px
    }
}

/// Fractional part of a ratio-scaled offset, in device pixels, in [0, 1).
#[inline]
pub fn offset_remainder(css: f64, dpr: f64) -> f64 {
    (css * dpr).rem_euclid(1.0)
}

/// Largest CSS offset at or below `css` that lands on an exact device pixel
/// line at the given ratio.
#[inline]
pub fn snap_offset(css: f64, dpr: f64) -> f64 {
    css - offset_remainder(css, dpr) / dpr
}

/// Device-pixel geometry derived from a CSS box at a given pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DevicePixelBox {
    pub width_px: u32,
    pub height_px: u32,
    /// Sub-pixel remainder of the scaled left edge, in device pixels.
    pub left_remainder: f64,
    /// Sub-pixel remainder of the scaled top edge, in device pixels.
    pub top_remainder: f64,
}

impl DevicePixelBox {
    pub fn from_css(rect: &CssRect, dpr: f64, opts: SnapOptions) -> Self {
        Self {
            width_px: device_px(rect.width, dpr, opts),
            height_px: device_px(rect.height, dpr, opts),
            left_remainder: offset_remainder(rect.left, dpr),
            top_remainder: offset_remainder(rect.top, dpr),
        }
    }
}

/// Snap a container width down to the layout quantum.
#[inline]
pub fn snap_container_width(css_width: f64) -> f64 {
    (css_width / CONTAINER_WIDTH_QUANTUM_PX).floor().max(0.0) * CONTAINER_WIDTH_QUANTUM_PX
}
