use glam::Vec2;
use instant::Instant;
use smallvec::SmallVec;
use web_sys as web;

/// Millisecond clock shared by touch timestamps and frame ticks.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Client (viewport) coordinates to canvas CSS pixels.
#[inline]
pub fn client_to_canvas(client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client_x - rect_left, client_y - rect_top)
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}

/// Every finger currently on the surface, in canvas CSS pixels.
pub fn touch_points(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> SmallVec<[Vec2; 4]> {
    let rect = canvas.get_bounding_client_rect();
    let touches = ev.touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| {
            client_to_canvas(
                t.client_x() as f32,
                t.client_y() as f32,
                rect.left() as f32,
                rect.top() as f32,
            )
        })
        .collect()
}

#[inline]
pub fn active_touch_count(ev: &web::TouchEvent) -> usize {
    ev.touches().length() as usize
}
