#![cfg(target_arch = "wasm32")]
use crowd_core::{Crowd, CrowdConfig, DrawList};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

// Resizing only changes the surface; the crowd keeps its positions.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, crowd: Rc<RefCell<Crowd>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let size = dom::sync_canvas_backing_size(&canvas_resize);
        crowd.borrow_mut().resize(size);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn config_from_page() -> CrowdConfig {
    let mut config = CrowdConfig::default();
    let query = dom::location_query();
    if let Err(e) = config.apply_query(&query) {
        log::warn!("ignoring page query {:?}: {}", query, e);
        config = CrowdConfig::default();
    }
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("crowd-panic starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let bounds = dom::sync_canvas_backing_size(&canvas);
    let crowd = Rc::new(RefCell::new(Crowd::new(config_from_page(), bounds)?));
    wire_canvas_resize(&canvas, crowd.clone());

    // Suspended until the first tap resumes it.
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buffer = match audio::load_buffer(&audio_ctx, constants::PANIC_SOUND_URL).await {
        Ok(b) => {
            log::info!(
                "[audio] loaded {} ({:.2}s)",
                constants::PANIC_SOUND_URL,
                b.duration()
            );
            Some(b)
        }
        Err(e) => {
            log::error!("[audio] panic sound unavailable: {:?}", e);
            None
        }
    };
    let sound = audio::WebPanicSound::new(audio_ctx.clone(), buffer);

    let clock = input::Clock::start();
    let active_touches = Rc::new(Cell::new(0usize));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        crowd: crowd.clone(),
        audio_ctx,
        active_touches: active_touches.clone(),
        last_pointer: Rc::new(Cell::new(bounds * 0.5)),
        clock,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        crowd,
        sound,
        active_touches,
        clock,
        canvas,
        ctx2d,
        draw_list: DrawList::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
