use macroquad::prelude::*;

use crate::core::{Grid, PaintMode, Rgba};

/// Outline the cell under the pointer in a style that hints at the paint mode
pub fn draw_cursor_based_on_mode(mode: PaintMode, grid: &Grid, origin: Vec2, active_color: Rgba, screen_mouse: Vec2) {
    let Some(id) = grid.cell_at(screen_mouse - origin) else {
        return;
    };
    let pos = origin + grid.cell_origin(id);
    let size = grid.cell_edge();

    match mode {
        PaintMode::Color => {
            draw_rectangle_lines(pos.x, pos.y, size, size, 2.0, Color::from_rgba(0, 0, 0, 150));
            draw_circle(screen_mouse.x, screen_mouse.y, 3.0, active_color.to_mq_color());
        }
        PaintMode::Rainbow => {
            draw_rectangle_lines(pos.x, pos.y, size, size, 2.0, Color::from_rgba(170, 60, 220, 200));
            draw_circle(screen_mouse.x, screen_mouse.y, 3.0, MAGENTA);
        }
        PaintMode::Eraser => {
            draw_rectangle_lines(pos.x, pos.y, size, size, 2.0, Color::from_rgba(255, 100, 100, 200));
            draw_rectangle(screen_mouse.x - 5.0, screen_mouse.y - 5.0, 10.0, 10.0, Color::from_rgba(255, 100, 100, 150));
        }
    }
}
