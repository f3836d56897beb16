use crate::audio::WebPanicSound;
use crate::input::Clock;
use crate::render;
use crowd_core::{Crowd, DrawList, TickInput};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub crowd: Rc<RefCell<Crowd>>,
    pub sound: WebPanicSound,
    pub active_touches: Rc<Cell<usize>>,
    pub clock: Clock,

    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub draw_list: DrawList,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let input = TickInput {
            now_ms: self.clock.now_ms(),
            active_touches: self.active_touches.get(),
        };
        let bounds = {
            let mut crowd = self.crowd.borrow_mut();
            crowd.tick(input, &mut self.sound, &mut self.draw_list);
            crowd.bounds()
        };

        let backing = (self.canvas.width(), self.canvas.height());
        let scale = if bounds.x > 0.0 {
            backing.0 as f64 / bounds.x as f64
        } else {
            1.0
        };
        render::paint(&self.ctx2d, &self.draw_list, backing, scale);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
