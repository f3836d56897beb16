// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use crowd_core::constants::*;

#[test]
fn panic_sound_asset_is_relative_mp3() {
    assert!(PANIC_SOUND_URL.ends_with(".mp3"));
    assert!(!PANIC_SOUND_URL.starts_with('/'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn size_classes_are_ordered() {
    assert!(CHILD_SIZE_MIN < CHILD_SIZE_MAX);
    assert!(CHILD_SIZE_MAX <= ADULT_SIZE_MIN);
    assert!(ADULT_SIZE_MIN < ADULT_SIZE_MAX);
    assert!(DOG_SIZE_MIN < DOG_SIZE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn probabilities_are_in_unit_range() {
    for p in [PERSON_PROBABILITY, CHILD_PROBABILITY, WALK_REROLL_PROBABILITY] {
        assert!((0.0..=1.0).contains(&p));
    }
}

#[test]
fn local_panic_is_a_whole_number_of_frames() {
    let frames = LOCAL_PANIC_SECS * FRAME_RATE;
    assert_eq!(frames, 90.0);
}

#[test]
fn ripple_fades_out_in_whole_frames() {
    let frames = RIPPLE_START_ALPHA / RIPPLE_FADE_PER_FRAME;
    assert_eq!(frames.fract(), 0.0);
    assert!(frames > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn global_panic_needs_more_than_one_finger() {
    assert!(MIN_SIMULTANEOUS_TOUCHES >= 2);
    assert!(TOUCH_THRESHOLD >= MIN_SIMULTANEOUS_TOUCHES);
    assert!(MIN_BACKING_PX >= 1);
}
