use crate::constants::*;
use crate::draw::{DrawList, FontStyle, Primitive, Rgba, TextAnchor};
use glam::Vec2;
use smallvec::SmallVec;

// Arrow cursor outline, unscaled, centred near the origin.
const CURSOR_OUTLINE: [[f32; 2]; 7] = [
    [-8.0, -12.0],
    [-8.0, 10.0],
    [-2.0, 4.0],
    [3.0, 14.0],
    [5.0, 12.0],
    [0.0, 2.0],
    [7.0, 1.0],
];

/// Black screen with a cursor icon and a "Touch to Start" prompt, shown
/// until the first interaction unlocks audio.
pub fn push_start_overlay(bounds: Vec2, out: &mut DrawList) {
    let center = bounds * 0.5;
    out.push(Primitive::Clear(Rgba::BLACK));
    let points: SmallVec<[Vec2; 8]> = CURSOR_OUTLINE
        .iter()
        .map(|&[x, y]| center + Vec2::new(x, y) * START_CURSOR_SCALE)
        .collect();
    out.push(Primitive::Polygon {
        points,
        fill: Rgba::WHITE,
        stroke: Rgba::BLACK,
        width: START_CURSOR_STROKE_WIDTH * START_CURSOR_SCALE,
    });
    out.push(Primitive::Text {
        text: START_PROMPT_TEXT,
        at: center + Vec2::new(0.0, START_PROMPT_OFFSET_Y),
        size_px: START_PROMPT_SIZE_PX,
        style: FontStyle::Normal,
        anchor: TextAnchor::Center,
        color: Rgba::WHITE,
    });
}

pub fn push_caption(bounds: Vec2, out: &mut DrawList) {
    out.push(Primitive::Text {
        text: CAPTION_TEXT,
        at: Vec2::new(bounds.x * 0.5, CAPTION_TOP_PX),
        size_px: CAPTION_SIZE_PX,
        style: FontStyle::Italic,
        anchor: TextAnchor::CenterTop,
        color: Rgba::BLACK,
    });
}
