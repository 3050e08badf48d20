use crate::dom::Listener;
use crate::input::{self, InputState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track the cursor in viewport-normalized coordinates.
pub fn wire_pointermove(window: &web::Window, input_state: Rc<RefCell<InputState>>) -> Listener {
    Listener::new(window.as_ref(), "pointermove", move |ev: web::PointerEvent| {
        let mut state = input_state.borrow_mut();
        state.cursor = input::pointer_cursor(&ev, state.viewport);
    })
}
