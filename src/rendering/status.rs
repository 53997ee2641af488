use macroquad::prelude::*;

use crate::core::{GridEngine, PaintMode};

/// One-line summary under the board: mode, mesh size and the keyboard shortcuts
pub fn status_text(engine: &GridEngine) -> String {
    let grid = engine.grid();
    format!(
        "Mode: {}   {n} x {n} ({} cells, {:.2}px)   [C]olor [R]ainbow [E]raser  Backspace clears",
        engine.mode().label(),
        grid.len(),
        grid.cell_edge(),
        n = grid.size(),
    )
}

pub fn draw_status_line(engine: &GridEngine) {
    let color = match engine.mode() {
        PaintMode::Eraser => Color::from_rgba(180, 60, 60, 255),
        _ => DARKGRAY,
    };
    draw_text(&status_text(engine), 10.0, screen_height() - 12.0, 18.0, color);
}
