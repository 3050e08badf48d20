// Keyboard predicates used by the DOM handlers, kept free of web-sys.

#[inline]
pub fn is_panel_toggle_key(key: &str) -> bool {
    key == "h" || key == "H"
}

/// Elements whose keystrokes belong to the user, not to shortcuts.
#[inline]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
