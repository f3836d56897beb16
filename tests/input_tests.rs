// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn client_to_canvas_subtracts_rect_origin() {
    let p = client_to_canvas(120.0, 45.0, 20.0, 5.0);
    assert_eq!(p, glam::Vec2::new(100.0, 40.0));
}

#[test]
fn client_to_canvas_is_identity_for_full_viewport_canvas() {
    let p = client_to_canvas(321.5, 87.25, 0.0, 0.0);
    assert_eq!(p, glam::Vec2::new(321.5, 87.25));
}

#[test]
fn clock_is_monotonic_and_starts_near_zero() {
    let clock = Clock::start();
    let a = clock.now_ms();
    let b = clock.now_ms();
    assert!(a >= 0.0);
    assert!(b >= a);
    assert!(a < 1000.0, "fresh clock should start near zero");
}

#[test]
fn clock_copies_share_origin() {
    let clock = Clock::start();
    let copy = clock;
    std::thread::sleep(std::time::Duration::from_millis(5));
    let diff = (clock.now_ms() - copy.now_ms()).abs();
    assert!(diff < 5.0);
    assert!(copy.now_ms() >= 5.0);
}
