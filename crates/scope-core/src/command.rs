//! Typed commands produced by event wiring.
//!
//! DOM callbacks never reach into renderer state directly; they build a
//! command and hand it to the controller's dispatch.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// The visible-frames control changed.
    SetVisibleFrames(u32),
    /// The media element entered playback.
    Start,
    /// The media element paused or finished.
    Stop,
}

impl Command {
    /// Parse the visible-frames control's raw value.
    ///
    /// Anything that is not a non-negative integer produces no command, so
    /// the previous value stays in effect.
    pub fn parse_visible_frames(raw: &str) -> Option<Command> {
        raw.trim().parse::<u32>().ok().map(Command::SetVisibleFrames)
    }
}
