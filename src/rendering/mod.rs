pub mod board;
pub mod cursor;
pub mod grid;
pub mod status;

pub use board::draw_board;
pub use cursor::draw_cursor_based_on_mode;
pub use grid::draw_grid_lines;
pub use status::draw_status_line;
