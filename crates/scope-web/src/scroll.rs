//! The scrolling trace renderer.
//!
//! A two-state machine: `Idle` (no callback scheduled) and `Running` (one
//! animation-frame callback pending, identified by its handle). Every
//! callback re-arms itself; a render pass only happens when the frame clock
//! says one window's worth of audio time has elapsed, which decouples the
//! render cadence from the display refresh rate.

use crate::constants::{TRACE_LINE_WIDTH, TRACE_STROKE};
use crate::tap::AudioTap;
use anyhow::anyhow;
use scope_core::{clamp_visible_frames, trace_points, FrameClock, FrameGeometry, TraceCursor};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct RenderState {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    tap: AudioTap,
    clock: FrameClock,
    cursor: TraceCursor,
    visible_frames: Rc<Cell<u32>>,
}

impl RenderState {
    /// One scheduled callback while `Running`.
    fn render_pass(&mut self, now_ms: f64) {
        if !self.clock.tick(now_ms) {
            return;
        }
        // geometry comes fresh from the live canvas every pass; a resize
        // between passes simply changes the next strip
        let geo = FrameGeometry {
            width_px: self.canvas.width(),
            height_px: self.canvas.height(),
            visible_frames: clamp_visible_frames(self.visible_frames.get()),
        };
        if !geo.is_drawable() {
            return;
        }
        let frame_width = geo.frame_width();

        // shift the plot left one frame width with an overwrite blit;
        // smoothing would smear the waveform a little more every frame
        self.ctx.set_image_smoothing_enabled(false);
        let _ = self.ctx.set_global_composite_operation("copy");
        let _ = self
            .ctx
            .draw_image_with_html_canvas_element(&self.canvas, -frame_width, 0.0);
        let _ = self.ctx.set_global_composite_operation("source-over");

        let window = self.tap.read_window();
        let points = trace_points(&self.cursor, window, &geo);
        if points.is_empty() {
            return;
        }
        self.ctx.begin_path();
        self.ctx.move_to(points[0].0, points[0].1);
        for (x, y) in points.iter().skip(1) {
            self.ctx.line_to(*x, *y);
        }
        self.ctx.set_line_width(TRACE_LINE_WIDTH);
        self.ctx.set_stroke_style_str(TRACE_STROKE);
        self.ctx.stroke();
        self.cursor.advance(window, &geo);
    }
}

/// Handle to the renderer; clones share one state machine.
#[derive(Clone)]
pub struct ScrollRenderer {
    state: Rc<RefCell<RenderState>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl ScrollRenderer {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        tap: AudioTap,
        clock: FrameClock,
        visible_frames: Rc<Cell<u32>>,
    ) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context error: {:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("2d context cast error: {:?}", e))?;
        let state = Rc::new(RefCell::new(RenderState {
            canvas,
            ctx,
            tap,
            clock,
            cursor: TraceCursor::default(),
            visible_frames,
        }));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let state_tick = state.clone();
        let raf_tick = raf_id.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            if raf_tick.get().is_none() {
                // stopped after this callback was queued
                return;
            }
            state_tick.borrow_mut().render_pass(now_ms);
            if let Some(w) = web::window() {
                match w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    Ok(id) => raf_tick.set(Some(id)),
                    Err(e) => {
                        log::error!("[scroll] requestAnimationFrame error: {:?}", e);
                        raf_tick.set(None);
                    }
                }
            }
        }) as Box<dyn FnMut(f64)>));

        Ok(Self {
            state,
            raf_id,
            tick,
        })
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }

    /// `Idle` -> `Running`. Starting while already running is a no-op.
    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            state.cursor.reset();
            state.clock.reset();
        }
        if let Some(w) = web::window() {
            match w.request_animation_frame(
                self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(e) => log::error!("[scroll] requestAnimationFrame error: {:?}", e),
            }
        }
    }

    /// `Running` -> `Idle`, canceling the pending callback. Stopping when
    /// already idle is a no-op.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }
}
