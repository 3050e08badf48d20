use crate::error::MountError;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resolve the drawing surface; it has to exist before mount.
pub fn query_canvas(
    document: &web::Document,
    selector: &str,
) -> Result<web::HtmlCanvasElement, MountError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| MountError::SurfaceNotFound(selector.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(selector.to_string()))
}

/// Size the canvas to the viewport (CSS) and its drawing buffer to the
/// viewport times the capped pixel ratio.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, state: &input::InputState) {
    let (w_px, h_px) = input::backing_size(state.viewport, state.pixel_ratio);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", state.viewport.width));
    _ = style.set_property("height", &format!("{}px", state.viewport.height));
}

/// An event subscription that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] addEventListener({}) failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
