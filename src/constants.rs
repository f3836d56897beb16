// Browser-side presentation and wiring constants.

// DOM
pub const CANVAS_ID: &str = "app-canvas";

// Assets
pub const PANIC_SOUND_URL: &str = "assets/se_drumroll03.mp3";

// Canvas text and strokes
pub const FONT_FAMILY: &str = "sans-serif";
pub const LINE_CAP: &str = "round";

// Backing store never collapses below one device pixel
pub const MIN_BACKING_PX: u32 = 1;
