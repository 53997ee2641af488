use macroquad::math::Vec2;

use super::cell::{Cell, CellId};

/// Square mesh of `size * size` uniform cells stored row-major.
///
/// A grid is never resized in place. Changing the dimension means building a
/// new one, which gets a new `generation` so anything bound to the old mesh
/// can tell it is stale.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    extent: f32,
    generation: u64,
    cells: Vec<Cell>,
}

impl Grid {
    /// Mesh with no cells, before the first build
    pub fn empty(extent: f32) -> Self {
        Grid {
            size: 0,
            extent,
            generation: 0,
            cells: Vec::new(),
        }
    }

    pub fn build(size: usize, extent: f32, generation: u64) -> Self {
        debug_assert!(size >= 1, "grid dimension must be positive");
        let edge = extent / size as f32;

        let mut cells = Vec::with_capacity(size * size);
        for _row in 0..size {
            for _col in 0..size {
                cells.push(Cell::new(edge));
            }
        }

        Grid {
            size,
            extent,
            generation,
            cells,
        }
    }

    /// Cells per side
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell_edge(&self) -> f32 {
        self.extent / self.size as f32
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, id: CellId) -> bool {
        id.row < self.size && id.col < self.size
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        if self.contains(id) {
            self.cells.get(id.row * self.size + id.col)
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        if self.contains(id) {
            self.cells.get_mut(id.row * self.size + id.col)
        } else {
            None
        }
    }

    /// All cells with their addresses, row index outer, column inner
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (CellId::new(i / size, i % size), cell))
    }

    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Cell under a point given relative to the board's top-left corner
    pub fn cell_at(&self, local: Vec2) -> Option<CellId> {
        if local.x < 0.0 || local.y < 0.0 || local.x >= self.extent || local.y >= self.extent {
            return None;
        }
        let edge = self.cell_edge();
        let id = CellId::new((local.y / edge).floor() as usize, (local.x / edge).floor() as usize);
        // float rounding right at the far edge
        self.contains(id).then_some(id)
    }

    /// Top-left corner of a cell relative to the board
    pub fn cell_origin(&self, id: CellId) -> Vec2 {
        let edge = self.cell_edge();
        Vec2::new(id.col as f32 * edge, id.row as f32 * edge)
    }
}
