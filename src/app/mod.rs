// src/app/mod.rs
use macroquad::prelude::*;

use crate::config::EtchConfig;
use crate::input;
use crate::rendering;
use crate::state::ApplicationState;
use crate::ui;

pub async fn run(config: EtchConfig) {
    let mut state = ApplicationState::new(&config);

    tracing::info!(
        grid_size = config.grid_size,
        max_grid_size = config.max_grid_size,
        board_extent = config.board_extent,
        "etch-grid started"
    );

    loop {
        clear_background(Color::from_rgba(248, 248, 250, 255));

        // Controls first: a resize finishes (rebuild + handlers) before any hover this frame
        ui::render_ui_buttons(&mut state);
        ui::render_color_picker(&mut state);
        input::handle_input(&mut state);

        rendering::draw_board(state.engine.grid(), state.board_origin);
        rendering::draw_grid_lines(state.engine.grid(), state.board_origin);
        rendering::draw_cursor_based_on_mode(
            state.engine.mode(),
            state.engine.grid(),
            state.board_origin,
            state.current_color,
            Vec2::from(mouse_position()),
        );

        rendering::draw_status_line(&state.engine);

        next_frame().await
    }
}
