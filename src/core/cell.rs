use super::color::{Rgba, BACKGROUND};

/// One square of the board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Edge length in board pixels
    pub size: f32,
    pub color: Rgba,
}

impl Cell {
    pub fn new(size: f32) -> Self {
        Cell {
            size,
            color: BACKGROUND,
        }
    }

    pub fn paint(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn clear(&mut self) {
        self.color = BACKGROUND;
    }

    pub fn is_painted(&self) -> bool {
        self.color != BACKGROUND
    }
}

/// Row/column address of a cell inside one grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl CellId {
    pub const fn new(row: usize, col: usize) -> Self {
        CellId { row, col }
    }
}
