// Host-page wiring for the web front-end.

// Canvas the background paints onto when the page does not name one
pub const DEFAULT_CANVAS_ID: &str = "orb-canvas";

// Window events the background listens to
pub const RESIZE_EVENT: &str = "resize";
pub const POINTER_MOVE_EVENT: &str = "pointermove";

// Mixed into clock-derived seeds so consecutive mounts diverge quickly
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
