//! Application State Module
//!
//! Holds everything the frame loop mutates: the grid engine (mesh, paint mode,
//! hover handlers), the color picker's active color, the size slider and the
//! hover tracker that turns pointer motion into cell-enter events.

use macroquad::prelude::*;

use crate::config::EtchConfig;
use crate::core::{GridEngine, Rgba, BOARD_ORIGIN_X, BOARD_ORIGIN_Y, MIN_GRID_SIZE};
use crate::input::HoverTracker;
use crate::ui::Slider;

/// The main application state containing all global state
pub struct ApplicationState {
    /// Logical board: cells, paint mode and hover handlers
    pub engine: GridEngine,
    /// The color picker's current value, read at paint time in Color mode
    pub current_color: Rgba,
    /// Grid-size slider
    pub size_slider: Slider,
    /// Last cell the pointer was over
    pub hover: HoverTracker,
    /// Screen position of the board's top-left corner
    pub board_origin: Vec2,
}

impl ApplicationState {
    /// Creates the startup state: configured grid built, handlers attached, mode Color
    pub fn new(config: &EtchConfig) -> Self {
        ApplicationState {
            engine: GridEngine::with_grid(config.grid_size, config.board_extent),
            current_color: Rgba::BLACK,
            size_slider: Slider::new(MIN_GRID_SIZE, config.max_grid_size, config.grid_size),
            hover: HoverTracker::new(),
            board_origin: Vec2::new(BOARD_ORIGIN_X, BOARD_ORIGIN_Y),
        }
    }

    /// Text of the size label next to the slider, e.g. `40 x 40`
    pub fn size_label(&self) -> String {
        let n = self.size_slider.value();
        format!("{n} x {n}")
    }
}
