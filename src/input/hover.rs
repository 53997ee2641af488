use macroquad::math::Vec2;

use crate::core::{CellId, Grid};

/// Turns per-frame pointer positions into "pointer entered cell" events.
///
/// A cell fires once when the pointer moves onto it and again only after the
/// pointer has left and come back, like a DOM `mouseover`.
#[derive(Debug, Default)]
pub struct HoverTracker {
    last: Option<CellId>,
    generation: u64,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the pointer position in screen space. Returns the cell just entered, if any.
    pub fn pointer_moved(&mut self, grid: &Grid, board_origin: Vec2, pointer: Vec2) -> Option<CellId> {
        // A rebuilt mesh has new cells, the old address means nothing
        if self.generation != grid.generation() {
            self.generation = grid.generation();
            self.last = None;
        }

        let current = grid.cell_at(pointer - board_origin);
        if current == self.last {
            return None;
        }
        self.last = current;
        current
    }
}
