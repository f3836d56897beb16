use crate::constants::MIN_BACKING_PX;
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Query string of the current page, `""` when unavailable.
pub fn location_query() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
///
/// Returns the CSS size, which is the coordinate space the crowd lives in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(MIN_BACKING_PX));
        canvas.set_height(h_px.max(MIN_BACKING_PX));
    }
    Vec2::new(rect.width() as f32, rect.height() as f32)
}
