pub mod keyboard;
pub mod pointer;
pub mod resize;

pub use keyboard::wire_panel_toggle;
pub use pointer::wire_pointermove;
pub use resize::wire_resize;
