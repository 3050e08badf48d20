use crate::core::Scene;
use crate::dom::{self, Listener};
use crate::input::{self, InputState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ResizeWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub input_state: Rc<RefCell<InputState>>,
}

/// Keep viewport, camera aspect and canvas size in step with the window.
/// The GPU surface follows the canvas on the next frame.
pub fn wire_resize(window: &web::Window, w: ResizeWiring) -> Listener {
    let wnd = window.clone();
    Listener::new(window.as_ref(), "resize", move |_: web::Event| {
        let viewport = input::window_viewport(&wnd);
        let snapshot = {
            let mut state = w.input_state.borrow_mut();
            state.viewport = viewport;
            state.pixel_ratio = input::capped_pixel_ratio(wnd.device_pixel_ratio());
            *state
        };
        w.scene.borrow_mut().resize(viewport);
        dom::sync_canvas_size(&w.canvas, &snapshot);
        log::debug!(
            "[resize] {}x{} @{}x",
            viewport.width,
            viewport.height,
            snapshot.pixel_ratio
        );
    })
}
