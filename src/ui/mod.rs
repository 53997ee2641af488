pub mod controls;
pub mod palette;

pub use controls::{render_ui_buttons, Slider};
pub use palette::render_color_picker;
