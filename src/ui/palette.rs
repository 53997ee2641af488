use macroquad::prelude::*;

use crate::core::{Rgba, PICKER_COLS, PICKER_GAP, PICKER_ROWS, PICKER_SWATCHES};
use crate::state::ApplicationState;

const SWATCH_SIZE: f32 = 24.0;
const PADDING: f32 = 6.0;
const INDICATOR_SIZE: f32 = 48.0;
const SWATCHES_TOP: f32 = INDICATOR_SIZE + PADDING * 4.0;

pub const PANEL_WIDTH: f32 = PICKER_COLS as f32 * (SWATCH_SIZE + PADDING) + PADDING;
pub const PANEL_HEIGHT: f32 = SWATCHES_TOP + PICKER_ROWS as f32 * (SWATCH_SIZE + PADDING) + PADDING;

/// Color picker panel to the right of the board. Clicking a swatch sets the active color.
pub fn render_color_picker(state: &mut ApplicationState) {
    let board_extent = state.engine.grid().extent();
    let panel_x = state.board_origin.x + board_extent + PICKER_GAP;
    let panel_y = state.board_origin.y;
    let swatches_y = panel_y + SWATCHES_TOP;

    draw_rectangle(panel_x, panel_y, PANEL_WIDTH, PANEL_HEIGHT, Color::from_rgba(235, 235, 240, 255));
    draw_rectangle_lines(panel_x, panel_y, PANEL_WIDTH, PANEL_HEIGHT, 2.0, BLACK);

    // Current color indicator
    let indicator_x = panel_x + PADDING;
    let indicator_y = panel_y + PADDING * 2.0;
    draw_rectangle(indicator_x, indicator_y, INDICATOR_SIZE, INDICATOR_SIZE, state.current_color.to_mq_color());
    draw_rectangle_lines(indicator_x, indicator_y, INDICATOR_SIZE, INDICATOR_SIZE, 3.0, BLACK);
    draw_text(
        &state.current_color.to_string(),
        indicator_x + INDICATOR_SIZE + PADDING * 2.0,
        indicator_y + INDICATOR_SIZE / 2.0 + 6.0,
        18.0,
        BLACK,
    );

    let mouse_pos = Vec2::from(mouse_position());
    let clicked = is_mouse_button_pressed(MouseButton::Left);

    for (row, swatches) in PICKER_SWATCHES.iter().enumerate() {
        for (col, rgba) in swatches.iter().enumerate() {
            let x = panel_x + PADDING + col as f32 * (SWATCH_SIZE + PADDING);
            let y = swatches_y + row as f32 * (SWATCH_SIZE + PADDING);

            draw_rectangle(x, y, SWATCH_SIZE, SWATCH_SIZE, rgba.to_mq_color());

            let selected = *rgba == state.current_color;
            let (border_width, border_color) = if selected {
                (3.0, Color::from_rgba(255, 200, 0, 255))
            } else {
                (1.5, BLACK)
            };
            draw_rectangle_lines(x, y, SWATCH_SIZE, SWATCH_SIZE, border_width, border_color);

            if clicked && Rect::new(x, y, SWATCH_SIZE, SWATCH_SIZE).contains(mouse_pos) {
                pick(state, *rgba);
            }
        }
    }
}

fn pick(state: &mut ApplicationState, color: Rgba) {
    if state.current_color != color {
        tracing::debug!(%color, "active color picked");
        state.current_color = color;
    }
}
