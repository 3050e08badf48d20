use crate::constants::MAX_PIXEL_RATIO;
use crate::core::motion::{Cursor, FrameInput, Viewport};
use web_sys as web;

/// Latest host input, written by the listeners and read once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub viewport: Viewport,
    pub cursor: Cursor,
    pub scroll_y: f32,
    pub pixel_ratio: f64,
}

impl InputState {
    pub fn new(viewport: Viewport, device_pixel_ratio: f64) -> Self {
        Self {
            viewport,
            cursor: Cursor::default(),
            scroll_y: 0.0,
            pixel_ratio: capped_pixel_ratio(device_pixel_ratio),
        }
    }

    pub fn frame_input(&self, delta: f32) -> FrameInput {
        FrameInput {
            delta,
            scroll_y: self.scroll_y,
            viewport: self.viewport,
            cursor: self.cursor,
        }
    }
}

#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Drawing-buffer size in device pixels for a CSS-sized viewport.
#[inline]
pub fn backing_size(viewport: Viewport, pixel_ratio: f64) -> (u32, u32) {
    let w = (viewport.width as f64 * pixel_ratio).round() as u32;
    let h = (viewport.height as f64 * pixel_ratio).round() as u32;
    (w.max(1), h.max(1))
}

// ---------------- Host readers ----------------
#[inline]
pub fn window_viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn window_scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

#[inline]
pub fn pointer_cursor(ev: &web::PointerEvent, viewport: Viewport) -> Cursor {
    Cursor::from_client(ev.client_x() as f32, ev.client_y() as f32, viewport)
}
