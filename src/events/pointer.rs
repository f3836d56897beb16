use super::InputWiring;
use crate::audio;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_mousedown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        w.last_pointer.set(pos);
        if w.crowd.borrow_mut().pointer_pressed(pos) {
            audio::unlock(&w.audio_ctx);
        }
        log::debug!("[mouse] press at ({:.0},{:.0})", pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}
