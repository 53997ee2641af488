use macroquad::prelude::*;

use crate::core::{grid_line_color, Grid, GRID_LINE_THICKNESS};

/// Cells smaller than this get no separating lines, they would swamp the paint
const MIN_LINED_EDGE: f32 = 6.0;

pub fn draw_grid_lines(grid: &Grid, origin: Vec2) {
    let edge = grid.cell_edge();
    if grid.is_empty() || edge < MIN_LINED_EDGE {
        return;
    }

    let extent = grid.extent();
    let color = grid_line_color();

    for i in 1..grid.size() {
        let offset = i as f32 * edge;
        // Vertical
        draw_line(origin.x + offset, origin.y, origin.x + offset, origin.y + extent, GRID_LINE_THICKNESS, color);
        // Horizontal
        draw_line(origin.x, origin.y + offset, origin.x + extent, origin.y + offset, GRID_LINE_THICKNESS, color);
    }
}
