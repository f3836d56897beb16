// Shared simulation tuning constants used by the core and the web frontend.

// Crowd
pub const CREATURE_COUNT: usize = 50;
pub const PERSON_PROBABILITY: f32 = 0.8; // remainder are dogs

// Timing
pub const FRAME_RATE: f32 = 60.0; // seconds -> frames for panic countdowns
pub const WALK_REROLL_EVERY_FRAMES: u64 = 100;
pub const WALK_REROLL_PROBABILITY: f32 = 0.2;

// Sizes
pub const ADULT_SIZE_MIN: f32 = 25.0;
pub const ADULT_SIZE_MAX: f32 = 40.0;
pub const CHILD_PROBABILITY: f32 = 0.3;
pub const CHILD_SIZE_MIN: f32 = 15.0;
pub const CHILD_SIZE_MAX: f32 = 24.0;
pub const DOG_SIZE_MIN: f32 = 20.0;
pub const DOG_SIZE_MAX: f32 = 30.0;

// Motion
pub const WALK_SPEED_MIN: f32 = 0.2;
pub const WALK_SPEED_MAX: f32 = 0.8;
pub const RUN_SPEED_MIN: f32 = 8.0;
pub const RUN_SPEED_MAX: f32 = 15.0;
pub const PERSON_JITTER: f32 = 5.0; // half-range per axis
pub const PERSON_SPIN_RADIUS: f32 = 5.0;
pub const PERSON_SPIN_RATE: f32 = 0.5; // radians per frame
pub const DOG_JITTER: f32 = 3.0;

// Local panic
pub const LOCAL_PANIC_RADIUS: f32 = 150.0;
pub const LOCAL_PANIC_SECS: f32 = 1.5;

// Rapid-tap detection
pub const TOUCH_WINDOW_MS: f64 = 1000.0;
pub const TOUCH_THRESHOLD: usize = 10;
pub const MIN_SIMULTANEOUS_TOUCHES: usize = 2;

// Ripples
pub const RIPPLE_START_DIAMETER: f32 = 20.0;
pub const RIPPLE_START_ALPHA: f32 = 150.0; // out of 255
pub const RIPPLE_GROWTH_PER_FRAME: f32 = 4.0;
pub const RIPPLE_FADE_PER_FRAME: f32 = 10.0;
pub const RIPPLE_STROKE_WIDTH: f32 = 2.0;

// Drawing
pub const CREATURE_STROKE_WIDTH: f32 = 3.0;
pub const CAPTION_TEXT: &str = "「わーっ！」";
pub const CAPTION_SIZE_PX: f32 = 64.0;
pub const CAPTION_TOP_PX: f32 = 20.0;
pub const START_PROMPT_TEXT: &str = "Touch to Start";
pub const START_PROMPT_SIZE_PX: f32 = 24.0;
pub const START_PROMPT_OFFSET_Y: f32 = 80.0;
pub const START_CURSOR_SCALE: f32 = 1.5;
pub const START_CURSOR_STROKE_WIDTH: f32 = 1.5;
