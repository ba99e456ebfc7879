//! Canvas backing-store sizing.
//!
//! The stage container holds two stacked canvases (static backdrop, scrolling
//! trace) that must track the container's physical pixel size exactly.
//! Preferred signal: a ResizeObserver reporting the device-pixel content box.
//! Fallback when that granularity is unavailable: border-box observation with
//! manual ratio conversion, plus a window resize listener because a CSS-box
//! observer never fires when zoom changes the ratio without changing the box.

use crate::constants::{BACKDROP_FILL, GRID_LINE_WIDTH, GRID_STROKE};
use crate::dom;
use scope_core::{pixel, CssRect, DevicePixelBox, SnapOptions};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasSizer {
    container: web::HtmlElement,
    backdrop: Option<web::HtmlCanvasElement>,
    trace: web::HtmlCanvasElement,
    snap: SnapOptions,
}

impl CanvasSizer {
    pub fn new(
        container: web::HtmlElement,
        backdrop: Option<web::HtmlCanvasElement>,
        trace: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            container,
            backdrop,
            trace,
            snap: SnapOptions::default(),
        }
    }

    #[inline]
    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    fn layers(&self) -> impl Iterator<Item = &web::HtmlCanvasElement> {
        self.backdrop.iter().chain(std::iter::once(&self.trace))
    }

    /// Resize every layer's backing store to the given device pixel counts.
    ///
    /// Writing a canvas size clears its pixels, so sizes are only written
    /// when they actually changed. That also makes redundant delivery from
    /// the primary and fallback observation paths harmless.
    pub fn apply_device_px(&self, width_px: u32, height_px: u32) {
        let mut changed = false;
        for canvas in self.layers() {
            if canvas.width() != width_px {
                canvas.set_width(width_px);
                changed = true;
            }
            if canvas.height() != height_px {
                canvas.set_height(height_px);
                changed = true;
            }
        }
        if changed {
            self.redraw_static();
        }
    }

    /// Repaint static content after a resize wiped the buffers.
    pub fn redraw_static(&self) {
        match &self.backdrop {
            Some(backdrop) => self.paint_backdrop(backdrop),
            // without a backdrop layer the trace canvas carries the fill
            None => self.paint_fill(&self.trace),
        }
    }

    fn paint_fill(&self, canvas: &web::HtmlCanvasElement) {
        let ctx = match context_2d(canvas) {
            Some(ctx) => ctx,
            None => return,
        };
        ctx.set_fill_style_str(BACKDROP_FILL);
        ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }

    fn paint_backdrop(&self, canvas: &web::HtmlCanvasElement) {
        let ctx = match context_2d(canvas) {
            Some(ctx) => ctx,
            None => return,
        };
        let w = canvas.width() as f64;
        let h = canvas.height() as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        ctx.set_fill_style_str(BACKDROP_FILL);
        ctx.fill_rect(0.0, 0.0, w, h);
        ctx.set_stroke_style_str(GRID_STROKE);
        ctx.set_line_width(GRID_LINE_WIDTH);
        // half-pixel centers keep the 1px strokes crisp
        let mid = (h / 2.0).floor() + 0.5;
        ctx.begin_path();
        ctx.move_to(0.0, mid);
        ctx.line_to(w, mid);
        ctx.stroke();
        ctx.stroke_rect(0.5, 0.5, w - 1.0, h - 1.0);
    }

    /// Fallback sizing: measure the container box and convert to device
    /// pixels by ratio rounding. Also the initial sizing pass.
    pub fn refresh_from_layout(&self) {
        let window = match web::window() {
            Some(w) => w,
            None => return,
        };
        let dpr = window.device_pixel_ratio();
        self.snap_width();
        let rect = css_rect_of(&self.container);
        let px = DevicePixelBox::from_css(&rect, dpr, self.snap);
        self.apply_device_px(px.width_px, px.height_px);
        self.snap_layer_offsets(&rect, dpr);
    }

    /// Pin the container CSS width to the layout quantum below its parent's
    /// width, so any common ratio scales it to a whole pixel count and the
    /// scroll animation has no fractional-pixel jitter.
    pub fn snap_width(&self) {
        let parent = match self.container.parent_element() {
            Some(p) => p,
            None => return,
        };
        let snapped = pixel::snap_container_width(parent.get_bounding_client_rect().width());
        if snapped <= 0.0 {
            return;
        }
        let value = format!("{}px", snapped);
        let style = self.container.style();
        if style.get_property_value("width").ok().as_deref() == Some(value.as_str()) {
            return;
        }
        let _ = style.set_property("width", &value);
    }

    /// Nudge the absolutely-positioned layers so the container's scaled
    /// left/top remainders cancel and each layer sits on an exact device
    /// pixel line.
    fn snap_layer_offsets(&self, rect: &CssRect, dpr: f64) {
        let dx = pixel::snap_offset(rect.left, dpr) - rect.left;
        let dy = pixel::snap_offset(rect.top, dpr) - rect.top;
        for canvas in self.layers() {
            let style = canvas.style();
            let _ = style.set_property("left", &format!("{dx}px"));
            let _ = style.set_property("top", &format!("{dy}px"));
        }
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Serialize a bounding rect the way the fallback path consumes it. The
/// DOMRect JSON carries derived and non-geometric keys; the core parser
/// keeps only left/top/width/height.
fn css_rect_of(el: &web::Element) -> CssRect {
    let json = el.get_bounding_client_rect().to_json();
    let mut entries: Vec<(String, f64)> = Vec::new();
    for key in js_sys::Object::keys(&json).iter() {
        let name = match key.as_string() {
            Some(n) => n,
            None => continue,
        };
        if let Some(value) = js_sys::Reflect::get(&json, &key)
            .ok()
            .and_then(|v| v.as_f64())
        {
            entries.push((name, value));
        }
    }
    CssRect::from_entries(entries.iter().map(|(k, v)| (k.as_str(), *v)))
}

/// Probe once whether ResizeObserver entries expose device-pixel content
/// box sizes in this engine.
fn device_pixel_boxes_supported() -> bool {
    let ctor = match js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("ResizeObserverEntry")) {
        Ok(v) if !v.is_undefined() => v,
        _ => return false,
    };
    let proto = match js_sys::Reflect::get(&ctor, &JsValue::from_str("prototype")) {
        Ok(v) => v,
        Err(_) => return false,
    };
    js_sys::Reflect::has(&proto, &JsValue::from_str("devicePixelContentBoxSize")).unwrap_or(false)
}

/// Wire resize observation for the sizer's container.
pub fn observe(sizer: Rc<CanvasSizer>) -> Result<(), JsValue> {
    if device_pixel_boxes_supported() {
        let sizer_cb = sizer.clone();
        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            if let Some(entry) = entries.iter().last() {
                let entry: web::ResizeObserverEntry = entry.unchecked_into();
                if let Some(size) = entry.device_pixel_content_box_size().iter().next() {
                    let size: web::ResizeObserverSize = size.unchecked_into();
                    sizer_cb.apply_device_px(size.inline_size() as u32, size.block_size() as u32);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())?;
        let options = web::ResizeObserverOptions::new();
        options.set_box(web::ResizeObserverBoxOptions::DevicePixelContentBox);
        observer.observe_with_options(sizer.container(), &options);
        closure.forget();
        // the observer lives for the page lifetime
        std::mem::forget(observer);

        // the container width quantum still tracks the window
        let sizer_resize = sizer.clone();
        if let Some(window) = web::window() {
            dom::add_listener(&window, "resize", move || sizer_resize.snap_width());
        }
    } else {
        log::warn!("[resize] device-pixel content box unsupported; using border-box + ratio fallback");
        let sizer_cb = sizer.clone();
        let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            sizer_cb.refresh_from_layout();
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())?;
        let options = web::ResizeObserverOptions::new();
        options.set_box(web::ResizeObserverBoxOptions::BorderBox);
        observer.observe_with_options(sizer.container(), &options);
        closure.forget();
        std::mem::forget(observer);

        // zoom can change the ratio without touching the CSS box
        let sizer_resize = sizer.clone();
        if let Some(window) = web::window() {
            dom::add_listener(&window, "resize", move || sizer_resize.refresh_from_layout());
        }
    }
    Ok(())
}
