pub mod constants;
pub mod cell;
pub mod color;
pub mod engine;
pub mod grid;
pub mod mode;

pub use constants::*;
pub use cell::*;
pub use color::*;
pub use engine::*;
pub use grid::*;
pub use mode::*;
