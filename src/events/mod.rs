pub mod pointer;
pub mod touch;

use crate::input::Clock;
use crowd_core::Crowd;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub crowd: Rc<RefCell<Crowd>>,
    pub audio_ctx: web::AudioContext,
    pub active_touches: Rc<Cell<usize>>,
    /// Last known pointer location, used when a touch reports no points.
    pub last_pointer: Rc<Cell<Vec2>>,
    pub clock: Clock,
}

pub fn wire_input_handlers(w: InputWiring) {
    pointer::wire_mousedown(&w);
    touch::wire_touchstart(&w);
    touch::wire_touch_release(&w, "touchend");
    touch::wire_touch_release(&w, "touchcancel");
}
