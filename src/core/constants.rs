// Core constants for the drawing board
pub const BOARD_EXTENT: f32 = 500.0;
pub const DEFAULT_GRID_SIZE: usize = 40;
pub const MIN_GRID_SIZE: usize = 1;
pub const MAX_GRID_SIZE: usize = 100;
// Hard ceiling for any configured dimension
pub const GRID_SIZE_CAP: usize = 256;

// Board extents the window layout accepts
pub const MIN_BOARD_EXTENT: f32 = 100.0;
pub const MAX_BOARD_EXTENT: f32 = 1200.0;

// Screen placement of the board's top-left corner
pub const BOARD_ORIGIN_X: f32 = 20.0;
pub const BOARD_ORIGIN_Y: f32 = 110.0;

// Window space around the board: gap to the picker, right margin, status line below
pub const PICKER_GAP: f32 = 20.0;
pub const WINDOW_MARGIN: f32 = 20.0;
pub const STATUS_LINE_HEIGHT: f32 = 40.0;
// Controls row across the top needs this much width regardless of the board
pub const MIN_WINDOW_WIDTH: f32 = 520.0;

pub const GRID_LINE_THICKNESS: f32 = 0.5;

// Grid line color helper function (since Color::from_rgba is not const)
pub fn grid_line_color() -> macroquad::prelude::Color {
    macroquad::prelude::Color::from_rgba(225, 228, 235, 255)
}
