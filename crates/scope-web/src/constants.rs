// Element ids the frontend binds to.
pub const AUDIO_ELEMENT_ID: &str = "scope-audio";
pub const STAGE_ELEMENT_ID: &str = "scope-stage";
pub const BACKDROP_CANVAS_ID: &str = "scope-backdrop";
pub const TRACE_CANVAS_ID: &str = "scope-trace";
pub const FRAMES_INPUT_ID: &str = "scope-frames";

// Trace stroke
pub const TRACE_STROKE: &str = "#4fc3f7";
pub const TRACE_LINE_WIDTH: f64 = 2.0;

// Static backdrop
pub const BACKDROP_FILL: &str = "#0a0e18";
pub const GRID_STROKE: &str = "rgba(80, 110, 150, 0.35)";
pub const GRID_LINE_WIDTH: f64 = 1.0;
