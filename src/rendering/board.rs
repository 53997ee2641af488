use macroquad::prelude::*;

use crate::core::Grid;

/// Draws the cell mesh at the board origin, one rectangle per cell
pub fn draw_board(grid: &Grid, origin: Vec2) {
    let extent = grid.extent();
    // Unpainted cells show through as this background
    draw_rectangle(origin.x, origin.y, extent, extent, WHITE);

    for (id, cell) in grid.iter() {
        if !cell.is_painted() {
            continue;
        }
        let pos = origin + grid.cell_origin(id);
        draw_rectangle(pos.x, pos.y, cell.size, cell.size, cell.color.to_mq_color());
    }

    draw_rectangle_lines(origin.x, origin.y, extent, extent, 2.0, BLACK);
}
