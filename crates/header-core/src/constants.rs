// Default tuning shared by the web frontend and host-side tests.

// Scroll behaviour
pub const SCROLL_THRESHOLD_PX: f64 = 80.0; // strictly greater than this marks the header
pub const SCROLLED_CLASS: &str = "scrolled";
pub const HEADER_SELECTOR: &str = "header";

// Scrolled-state look
pub const SCROLLED_BACKGROUND_HEX: &str = "#333";
pub const SCROLLED_TEXT_HEX: &str = "#f4f4f4";
pub const SHADOW_OFFSET_PX: (i32, i32) = (0, 2);
pub const SHADOW_BLUR_PX: u32 = 5;
pub const SHADOW_ALPHA: f32 = 0.2;

// Transition timing
pub const TRANSITION_SECS: f32 = 0.3;
pub const TRANSITION_TIMING: &str = "ease";
