// Host-side tests for the pure helpers of the canvas painter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod render {
    include!("../src/render.rs");
}

use crowd_core::{FontStyle, Rgba, TextAnchor};
use render::*;

#[test]
fn css_color_formats_opaque_black_and_white() {
    assert_eq!(css_color(Rgba::BLACK), "rgba(0, 0, 0, 1.000)");
    assert_eq!(css_color(Rgba::WHITE), "rgba(255, 255, 255, 1.000)");
}

#[test]
fn css_color_maps_ripple_alpha_from_255_scale() {
    let c = Rgba::black_alpha255(150.0);
    assert_eq!(css_color(c), "rgba(0, 0, 0, 0.588)");
}

#[test]
fn css_color_clamps_out_of_range_components() {
    let c = Rgba([2.0, -1.0, 0.5, 3.0]);
    assert_eq!(css_color(c), "rgba(255, 0, 128, 1.000)");
}

#[test]
fn font_spec_includes_style_size_and_family() {
    assert_eq!(font_spec(24.0, FontStyle::Normal), "24px sans-serif");
    assert_eq!(font_spec(64.0, FontStyle::Italic), "italic 64px sans-serif");
}

#[test]
fn text_baseline_follows_anchor() {
    assert_eq!(text_baseline(TextAnchor::CenterTop), "top");
    assert_eq!(text_baseline(TextAnchor::Center), "middle");
}
