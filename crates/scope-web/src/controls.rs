//! The one user-facing control: how many frames are visible at once.

use crate::controller::ScopeController;
use crate::dom;
use scope_core::Command;
use web_sys as web;

/// Turn edits of the numeric input into visible-frames commands.
///
/// Non-numeric values produce no command, so the previous value stays;
/// numeric values clamp at dispatch. The renderer picks the result up on
/// its next pass.
pub fn wire_visible_frames(input: &web::HtmlInputElement, controller: &ScopeController) {
    let input_cb = input.clone();
    let controller = controller.clone();
    dom::add_listener(input, "input", move || {
        if let Some(command) = Command::parse_visible_frames(&input_cb.value()) {
            controller.dispatch(command);
        }
    });
}
