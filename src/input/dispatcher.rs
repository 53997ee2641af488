use macroquad::prelude::*;

use crate::core::PaintMode;
use crate::state::ApplicationState;

/// Central input dispatcher: keyboard shortcuts, then pointer hover over the board
pub fn handle_input(state: &mut ApplicationState) {
    // Hotkeys for the mode switch
    if is_key_pressed(KeyCode::C) {
        state.engine.set_mode(PaintMode::Color);
    }
    if is_key_pressed(KeyCode::R) {
        state.engine.set_mode(PaintMode::Rainbow);
    }
    if is_key_pressed(KeyCode::E) {
        state.engine.set_mode(PaintMode::Eraser);
    }

    if is_key_pressed(KeyCode::Backspace) {
        let size = state.engine.grid().size();
        state.engine.clear_grid(size);
    }

    dispatch_hover(state, Vec2::from(mouse_position()));
}

/// Paint the cell the pointer just entered, if it entered one.
///
/// Cells crossed while the size slider is held are tracked but never painted.
pub fn dispatch_hover(state: &mut ApplicationState, pointer: Vec2) {
    let entered = state
        .hover
        .pointer_moved(state.engine.grid(), state.board_origin, pointer);
    if state.size_slider.is_dragging() {
        return;
    }
    if let Some(id) = entered {
        state.engine.hover(id, state.current_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EtchConfig;
    use crate::core::{CellId, Rgba, BACKGROUND};

    fn small_state() -> ApplicationState {
        let config = EtchConfig {
            grid_size: 4,
            ..EtchConfig::default()
        };
        ApplicationState::new(&config)
    }

    #[test]
    fn pointer_over_board_paints_with_active_color() {
        let mut state = small_state();
        state.current_color = Rgba::rgb(0, 128, 255);
        let pointer = state.board_origin + Vec2::new(130.0, 10.0);

        dispatch_hover(&mut state, pointer);

        let grid = state.engine.grid();
        assert_eq!(grid.cell(CellId::new(0, 1)).unwrap().color, Rgba::rgb(0, 128, 255));
        assert_eq!(grid.iter().filter(|(_, c)| c.is_painted()).count(), 1);
    }

    #[test]
    fn resting_pointer_does_not_repaint() {
        let mut state = small_state();
        state.engine.set_mode(PaintMode::Eraser);
        let pointer = state.board_origin + Vec2::new(10.0, 10.0);

        dispatch_hover(&mut state, pointer);
        state.engine.set_mode(PaintMode::Color);
        dispatch_hover(&mut state, pointer);

        assert_eq!(state.engine.grid().cell(CellId::new(0, 0)).unwrap().color, BACKGROUND);
    }

    #[test]
    fn slider_drag_across_board_paints_nothing() {
        let mut state = small_state();
        let track = Rect::new(20.0, 62.0, 300.0, 16.0);
        let knob = Vec2::new(track.x + state.size_slider.knob_offset(track.w), 70.0);
        state.size_slider.update(track, knob, true, true);
        assert!(state.size_slider.is_dragging());

        // Drag down over the board and across three cells
        for x in [10.0, 140.0, 270.0] {
            let pointer = state.board_origin + Vec2::new(x, 10.0);
            dispatch_hover(&mut state, pointer);
        }

        // Released back on the starting value: no resize, so nothing would wipe stray paint
        assert_eq!(state.size_slider.update(track, knob, false, false), None);
        let last = state.board_origin + Vec2::new(270.0, 10.0);
        dispatch_hover(&mut state, last);

        assert!(state.engine.grid().iter().all(|(_, c)| !c.is_painted()));

        // Moving on to another cell paints normally again
        let next = state.board_origin + Vec2::new(270.0, 140.0);
        dispatch_hover(&mut state, next);
        assert!(state.engine.grid().cell(CellId::new(1, 2)).unwrap().is_painted());
    }

    #[test]
    fn pointer_off_board_paints_nothing() {
        let mut state = small_state();
        dispatch_hover(&mut state, Vec2::new(0.0, 0.0));
        assert!(state.engine.grid().iter().all(|(_, c)| !c.is_painted()));
    }
}
