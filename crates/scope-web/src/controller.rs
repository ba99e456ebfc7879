//! Command dispatch.
//!
//! One controller owns the pieces the UI can act on; event wiring hands it
//! typed commands instead of touching renderer state from closures.

use crate::scroll::ScrollRenderer;
use scope_core::{clamp_visible_frames, Command};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Clones share the same underlying state.
#[derive(Clone)]
pub struct ScopeController {
    audio_ctx: web::AudioContext,
    renderer: ScrollRenderer,
    visible_frames: Rc<Cell<u32>>,
}

impl ScopeController {
    pub fn new(
        audio_ctx: web::AudioContext,
        renderer: ScrollRenderer,
        visible_frames: Rc<Cell<u32>>,
    ) -> Self {
        Self {
            audio_ctx,
            renderer,
            visible_frames,
        }
    }

    pub fn dispatch(&self, command: Command) {
        match command {
            Command::SetVisibleFrames(n) => {
                self.visible_frames.set(clamp_visible_frames(n));
            }
            Command::Start => self.start_playback(),
            Command::Stop => self.renderer.stop(),
        }
    }

    /// New audio contexts start suspended under autoplay policies; the
    /// renderer only starts once the resume has settled.
    fn start_playback(&self) {
        let audio_ctx = self.audio_ctx.clone();
        let renderer = self.renderer.clone();
        spawn_local(async move {
            if audio_ctx.state() == web::AudioContextState::Suspended {
                match audio_ctx.resume() {
                    Ok(promise) => {
                        let _ = JsFuture::from(promise).await;
                    }
                    Err(e) => log::error!("[audio] resume error: {:?}", e),
                }
            }
            renderer.start();
        });
    }
}
