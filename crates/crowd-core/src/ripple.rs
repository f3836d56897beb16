use crate::constants::*;
use crate::draw::{DrawList, Rgba};
use glam::Vec2;

/// Expanding, fading ring left behind by a tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec2,
    pub diameter: f32,
    /// 0..=255
    pub alpha: f32,
}

impl Ripple {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            diameter: RIPPLE_START_DIAMETER,
            alpha: RIPPLE_START_ALPHA,
        }
    }

    /// Advance one frame. Returns `false` once the ripple has faded out.
    pub fn age(&mut self) -> bool {
        self.diameter += RIPPLE_GROWTH_PER_FRAME;
        self.alpha -= RIPPLE_FADE_PER_FRAME;
        self.alpha > 0.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct RippleField {
    ripples: Vec<Ripple>,
}

impl RippleField {
    pub fn spawn(&mut self, origin: Vec2) {
        self.ripples.push(Ripple::new(origin));
    }

    /// Draw every ripple at its current state, newest first, then age it
    /// and drop the ones that have faded out.
    pub fn draw_and_age(&mut self, out: &mut DrawList) {
        for r in self.ripples.iter_mut().rev() {
            out.ellipse(
                r.origin,
                r.diameter,
                RIPPLE_STROKE_WIDTH,
                Rgba::black_alpha255(r.alpha),
            );
            r.age();
        }
        self.ripples.retain(|r| r.alpha > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }
}
