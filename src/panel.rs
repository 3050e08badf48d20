//! Minimal live-tuning panel: a fixed box of labelled controls in the page
//! corner, in the spirit of dat.gui-style debug widgets.

use crate::core::color::Rgb;
use crate::dom::Listener;
use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_STYLE: &str = "position:fixed;top:0;right:15px;z-index:1000;min-width:180px;\
padding:6px 8px;font:11px system-ui,sans-serif;color:#ebebeb;\
background:rgba(31,31,31,0.92);border-radius:0 0 4px 4px;";
const ROW_STYLE: &str = "display:flex;align-items:center;justify-content:space-between;gap:8px;";
const INPUT_STYLE: &str = "width:64px;height:20px;padding:0;border:none;background:none;cursor:pointer;";

pub struct DebugPanel {
    document: web::Document,
    root: web::HtmlElement,
    controls: RefCell<Vec<Listener>>,
    visible: Cell<bool>,
}

impl DebugPanel {
    pub fn new(document: &web::Document, id: &str, visible: bool) -> anyhow::Result<Self> {
        let root = create_html_element(document, "div")?;
        root.set_id(id);
        _ = root.set_attribute("style", PANEL_STYLE);
        let body = document.body().ok_or_else(|| anyhow!("no <body>"))?;
        body.append_child(&root)
            .map_err(|e| anyhow!("append panel: {:?}", e))?;
        let panel = Self {
            document: document.clone(),
            root,
            controls: RefCell::new(Vec::new()),
            visible: Cell::new(true),
        };
        panel.set_visible(visible);
        Ok(panel)
    }

    /// Add a color picker row. `on_change` receives every value the picker
    /// emits while it is being dragged.
    pub fn add_color(
        &self,
        label: &str,
        initial: Rgb,
        mut on_change: impl FnMut(Rgb) + 'static,
    ) -> anyhow::Result<()> {
        let row = create_html_element(&self.document, "div")?;
        _ = row.set_attribute("style", ROW_STYLE);

        let name = create_html_element(&self.document, "span")?;
        name.set_text_content(Some(label));

        let input = self
            .document
            .create_element("input")
            .map_err(|e| anyhow!("create input: {:?}", e))?
            .dyn_into::<web::HtmlInputElement>()
            .map_err(|_| anyhow!("input is not an HtmlInputElement"))?;
        input.set_type("color");
        input.set_value(&initial.to_hex());
        _ = input.set_attribute("style", INPUT_STYLE);

        _ = row.append_child(&name);
        _ = row.append_child(&input);
        self.root
            .append_child(&row)
            .map_err(|e| anyhow!("append row: {:?}", e))?;

        let field = label.to_string();
        let input_read = input.clone();
        let listener = Listener::new(input.as_ref(), "input", move |_: web::Event| {
            let raw = input_read.value();
            match Rgb::from_hex(&raw) {
                Ok(color) => on_change(color),
                Err(e) => log::warn!("[panel] ignoring {}={:?}: {}", field, raw, e),
            }
        });
        self.controls.borrow_mut().push(listener);
        Ok(())
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        let style = self.root.style();
        _ = style.set_property("display", if visible { "block" } else { "none" });
        self.visible.set(visible);
    }

    #[inline]
    pub fn toggle(&self) {
        self.set_visible(!self.is_visible());
    }
}

impl Drop for DebugPanel {
    fn drop(&mut self) {
        self.controls.borrow_mut().clear();
        self.root.remove();
    }
}

fn create_html_element(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("<{}> is not an HtmlElement", tag))
}
