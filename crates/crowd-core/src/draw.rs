//! Platform-neutral drawing commands.
//!
//! The simulation never touches a canvas directly. Each tick it fills a
//! [`DrawList`] in canvas pixel coordinates and the frontend replays it in
//! order onto whatever 2D surface it owns.

use glam::Vec2;
use smallvec::SmallVec;

/// Straight RGBA color with components in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Rgba = Rgba([1.0, 1.0, 1.0, 1.0]);

    /// Black with an alpha given on the 0..=255 scale, clamped.
    pub fn black_alpha255(alpha: f32) -> Rgba {
        Rgba([0.0, 0.0, 0.0, (alpha / 255.0).clamp(0.0, 1.0)])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Horizontally centred, `at.y` is the top of the glyphs.
    CenterTop,
    /// Horizontally and vertically centred on `at`.
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Fill the whole surface.
    Clear(Rgba),
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    /// Stroked circle outline.
    Ellipse {
        center: Vec2,
        diameter: f32,
        width: f32,
        color: Rgba,
    },
    /// Closed polygon, filled then stroked.
    Polygon {
        points: SmallVec<[Vec2; 8]>,
        fill: Rgba,
        stroke: Rgba,
        width: f32,
    },
    Text {
        text: &'static str,
        at: Vec2,
        size_px: f32,
        style: FontStyle,
        anchor: TextAnchor,
        color: Rgba,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    items: Vec<Primitive>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, p: Primitive) {
        self.items.push(p);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.items.push(Primitive::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn ellipse(&mut self, center: Vec2, diameter: f32, width: f32, color: Rgba) {
        self.items.push(Primitive::Ellipse {
            center,
            diameter,
            width,
            color,
        });
    }

    pub fn items(&self) -> &[Primitive] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.items
            .iter()
            .any(|p| matches!(p, Primitive::Text { text, .. } if *text == needle))
    }
}
