#![cfg(target_arch = "wasm32")]

mod constants;
mod controller;
mod controls;
mod dom;
mod playback;
mod scroll;
mod sizer;
mod tap;

use anyhow::anyhow;
use constants::{
    AUDIO_ELEMENT_ID, BACKDROP_CANVAS_ID, FRAMES_INPUT_ID, STAGE_ELEMENT_ID, TRACE_CANVAS_ID,
};
use controller::ScopeController;
use scope_core::{FrameClock, DEFAULT_VISIBLE_FRAMES, WINDOW_SIZE};
use scroll::ScrollRenderer;
use sizer::CanvasSizer;
use std::cell::Cell;
use std::rc::Rc;
use tap::AudioTap;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scope-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    let media: web::HtmlAudioElement = dom::element_by_id(&document, AUDIO_ELEMENT_ID)
        .ok_or_else(|| anyhow!("missing #{}", AUDIO_ELEMENT_ID))?;
    let stage: web::HtmlElement = dom::element_by_id(&document, STAGE_ELEMENT_ID)
        .ok_or_else(|| anyhow!("missing #{}", STAGE_ELEMENT_ID))?;
    let trace: web::HtmlCanvasElement = dom::element_by_id(&document, TRACE_CANVAS_ID)
        .ok_or_else(|| anyhow!("missing #{}", TRACE_CANVAS_ID))?;
    let backdrop: Option<web::HtmlCanvasElement> =
        dom::element_by_id(&document, BACKDROP_CANVAS_ID);

    let audio_ctx =
        web::AudioContext::new().map_err(|e| anyhow!("AudioContext error: {:?}", e))?;
    let tap = AudioTap::attach(&audio_ctx, &media, WINDOW_SIZE as u32)?;
    let clock = FrameClock::new(audio_ctx.sample_rate() as f64, tap.window_size())?;
    log::info!(
        "[init] sample_rate={} window={} interval={:.2}ms",
        audio_ctx.sample_rate(),
        tap.window_size(),
        clock.interval_ms()
    );

    let canvas_sizer = Rc::new(CanvasSizer::new(stage, backdrop, trace.clone()));
    canvas_sizer.refresh_from_layout();
    sizer::observe(canvas_sizer).map_err(|e| anyhow!("resize observer error: {:?}", e))?;

    let visible_frames = Rc::new(Cell::new(DEFAULT_VISIBLE_FRAMES));
    let renderer = ScrollRenderer::new(trace, tap, clock, visible_frames.clone())?;
    let controller = ScopeController::new(audio_ctx, renderer, visible_frames);

    match dom::element_by_id::<web::HtmlInputElement>(&document, FRAMES_INPUT_ID) {
        Some(input) => {
            input.set_value(&DEFAULT_VISIBLE_FRAMES.to_string());
            controls::wire_visible_frames(&input, &controller);
        }
        None => log::warn!(
            "[ui] missing #{}; visible frames fixed at {}",
            FRAMES_INPUT_ID,
            DEFAULT_VISIBLE_FRAMES
        ),
    }
    playback::wire_playback(&media, &controller);

    log::info!("[init] wavescope ready");
    Ok(())
}
