//! Playback wiring: the renderer runs in lockstep with the media element.

use crate::controller::ScopeController;
use crate::dom;
use scope_core::Command;
use web_sys as web;

/// Map media element lifecycle events onto renderer commands.
pub fn wire_playback(media: &web::HtmlMediaElement, controller: &ScopeController) {
    {
        let controller = controller.clone();
        dom::add_listener(media, "play", move || controller.dispatch(Command::Start));
    }
    for event in ["pause", "ended"] {
        let controller = controller.clone();
        dom::add_listener(media, event, move || controller.dispatch(Command::Stop));
    }
}
