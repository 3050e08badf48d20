use crate::core::keys::{is_panel_toggle_key, is_text_entry_tag};
use crate::dom::Listener;
use crate::panel::DebugPanel;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// 'H' shows/hides the debug panel; ignored while typing into a form field
pub fn wire_panel_toggle(window: &web::Window, panel: Rc<DebugPanel>) -> Listener {
    Listener::new(window.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
        if !is_panel_toggle_key(&ev.key()) || ev.repeat() {
            return;
        }
        let typing = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| is_text_entry_tag(&el.tag_name()))
            .unwrap_or(false);
        if !typing {
            panel.toggle();
        }
    })
}
