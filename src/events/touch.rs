use super::InputWiring;
use crate::audio;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // Keep the browser from synthesizing a mousedown for the same tap.
        ev.prevent_default();
        let points = input::touch_points(&ev, &w.canvas);
        w.active_touches.set(input::active_touch_count(&ev));
        if let Some(&p) = points.last() {
            w.last_pointer.set(p);
        }
        let now = w.clock.now_ms();
        let unlocked = w
            .crowd
            .borrow_mut()
            .touch_started(now, &points, w.last_pointer.get());
        if unlocked {
            audio::unlock(&w.audio_ctx);
        }
        log::debug!("[touch] start with {} points", points.len());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the simultaneous-touch count current when fingers lift, wherever
/// they end up.
pub fn wire_touch_release(w: &InputWiring, event: &str) {
    let active = w.active_touches.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        active.set(input::active_touch_count(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
