//! Grid engine
//!
//! Owns the logical board: the cell mesh, the active paint mode and the set of
//! hover handlers bound to the mesh. Rebuilding the mesh drops the handler set,
//! and handlers only ever react for the mesh generation they were attached to.

use std::collections::HashSet;

use super::cell::CellId;
use super::color::{generate_random_color, Rgba, BACKGROUND};
use super::grid::Grid;
use super::mode::PaintMode;

/// Hover reactions registered for one built mesh
#[derive(Clone, Debug)]
pub struct HoverHandlers {
    generation: u64,
    cells: HashSet<CellId>,
}

impl HoverHandlers {
    /// Register a reaction on every cell currently present in `grid`
    pub fn attach(grid: &Grid) -> Self {
        HoverHandlers {
            generation: grid.generation(),
            cells: grid.ids().collect(),
        }
    }

    pub fn handles(&self, grid: &Grid, id: CellId) -> bool {
        self.generation == grid.generation() && self.cells.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

pub struct GridEngine {
    grid: Grid,
    mode: PaintMode,
    handlers: Option<HoverHandlers>,
    extent: f32,
    next_generation: u64,
}

impl GridEngine {
    /// Empty engine: a mesh exists only after the first `build_grid`
    pub fn new(extent: f32) -> Self {
        GridEngine {
            grid: Grid::empty(extent),
            mode: PaintMode::default(),
            handlers: None,
            extent,
            next_generation: 1,
        }
    }

    /// Startup state: mesh of `size` with handlers attached, mode Color
    pub fn with_grid(size: usize, extent: f32) -> Self {
        let mut engine = GridEngine::new(extent);
        engine.resize(size);
        engine
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    #[cfg(test)]
    pub fn handlers(&self) -> Option<&HoverHandlers> {
        self.handlers.as_ref()
    }

    /// Replace the mesh with `size * size` fresh cells.
    ///
    /// The previous handler set is dropped; the new cells are not paintable
    /// until `attach_hover_handlers` runs.
    pub fn build_grid(&mut self, size: usize) {
        debug_assert!(size >= 1, "grid dimension must be positive");
        self.handlers = None;
        self.grid = Grid::build(size, self.extent, self.next_generation);
        self.next_generation += 1;
        tracing::info!(
            size,
            cells = self.grid.len(),
            edge = self.grid.cell_edge(),
            "grid rebuilt"
        );
    }

    /// Install hover handlers on the live mesh, replacing any existing set
    pub fn attach_hover_handlers(&mut self) {
        let handlers = HoverHandlers::attach(&self.grid);
        tracing::debug!(generation = self.grid.generation(), handlers = handlers.len(), "hover handlers attached");
        self.handlers = Some(handlers);
    }

    /// Slider change: rebuild and make paintable in one step
    pub fn resize(&mut self, size: usize) {
        self.build_grid(size);
        self.attach_hover_handlers();
    }

    /// Reset every cell of the live `size * size` mesh to the background
    pub fn clear_grid(&mut self, size: usize) {
        debug_assert_eq!(size, self.grid.size(), "clear_grid called with a stale dimension");
        self.grid.clear();
        tracing::info!(size, "grid cleared");
    }

    pub fn set_mode(&mut self, mode: PaintMode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "paint mode changed");
        }
        self.mode = mode;
    }

    /// Repaint one cell according to the current mode.
    ///
    /// `active_color` is the color picker's value at the time of the call.
    pub fn paint_cell(&mut self, id: CellId, active_color: Rgba) {
        let color = match self.mode {
            PaintMode::Color => active_color,
            PaintMode::Rainbow => generate_random_color(),
            PaintMode::Eraser => BACKGROUND,
        };

        match self.grid.cell_mut(id) {
            Some(cell) => {
                cell.paint(color);
                tracing::trace!(row = id.row, col = id.col, %color, "cell painted");
            }
            None => debug_assert!(false, "paint_cell on a cell outside the mesh: {id:?}"),
        }
    }

    /// Pointer entered `id`. Runs the registered reaction, if any.
    ///
    /// Returns whether a handler fired.
    pub fn hover(&mut self, id: CellId, active_color: Rgba) -> bool {
        let handled = self
            .handlers
            .as_ref()
            .is_some_and(|handlers| handlers.handles(&self.grid, id));
        if handled {
            self.paint_cell(id, active_color);
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{BOARD_EXTENT, DEFAULT_GRID_SIZE};
    use std::collections::HashSet;

    const PICKED: Rgba = Rgba::rgb(10, 20, 30);

    fn painted(engine: &GridEngine) -> Vec<CellId> {
        engine
            .grid()
            .iter()
            .filter(|(_, c)| c.is_painted())
            .map(|(id, _)| id)
            .collect()
    }

    #[test]
    fn default_startup_has_1600_cells_in_color_mode() {
        let engine = GridEngine::with_grid(DEFAULT_GRID_SIZE, BOARD_EXTENT);
        assert_eq!(engine.grid().len(), 1600);
        assert_eq!(engine.grid().size(), 40);
        assert_eq!(engine.mode(), PaintMode::Color);
        assert!(engine.handlers().is_some_and(|h| h.len() == 1600 && h.handles(engine.grid(), CellId::new(39, 39))));
    }

    #[test]
    fn new_engine_starts_empty() {
        let engine = GridEngine::new(500.0);
        assert!(engine.grid().is_empty());
        assert!(engine.handlers().is_none());
    }

    #[test]
    fn build_grid_sizes_cells_from_extent() {
        let mut engine = GridEngine::new(500.0);
        for n in [1, 7, 25, 64] {
            engine.build_grid(n);
            assert_eq!(engine.grid().len(), n * n);
            let edge = 500.0 / n as f32;
            assert!(engine.grid().iter().all(|(_, c)| c.size == edge));
        }
    }

    #[test]
    fn fresh_mesh_ignores_hover_until_handlers_attached() {
        let mut engine = GridEngine::new(500.0);
        engine.build_grid(4);
        assert!(!engine.hover(CellId::new(1, 1), PICKED));
        assert!(painted(&engine).is_empty());

        engine.attach_hover_handlers();
        assert!(engine.hover(CellId::new(1, 1), PICKED));
        assert_eq!(painted(&engine), vec![CellId::new(1, 1)]);
    }

    #[test]
    fn rebuild_drops_previous_handlers() {
        let mut engine = GridEngine::with_grid(4, 500.0);
        engine.build_grid(6);
        assert!(engine.handlers().is_none());
        assert!(!engine.hover(CellId::new(0, 0), PICKED));
    }

    #[test]
    fn stale_handlers_never_fire_on_new_mesh() {
        let mut engine = GridEngine::with_grid(4, 500.0);
        let old = engine.handlers().cloned().unwrap();
        engine.resize(4);
        assert!(!old.handles(engine.grid(), CellId::new(0, 0)));
        assert!(engine.handlers().unwrap().handles(engine.grid(), CellId::new(0, 0)));
    }

    #[test]
    fn attaching_twice_replaces_rather_than_accumulates() {
        let mut engine = GridEngine::with_grid(3, 300.0);
        engine.attach_hover_handlers();
        assert_eq!(engine.handlers().unwrap().len(), 9);
    }

    #[test]
    fn hover_outside_mesh_is_ignored() {
        let mut engine = GridEngine::with_grid(3, 300.0);
        assert!(!engine.hover(CellId::new(3, 0), PICKED));
        assert!(painted(&engine).is_empty());
    }

    #[test]
    fn color_mode_paints_only_hovered_cell_with_active_color() {
        let mut engine = GridEngine::with_grid(5, 500.0);
        let target = CellId::new(2, 3);
        engine.hover(target, PICKED);

        for (id, cell) in engine.grid().iter() {
            if id == target {
                assert_eq!(cell.color, PICKED);
            } else {
                assert_eq!(cell.color, BACKGROUND);
            }
        }
    }

    #[test]
    fn color_mode_reads_active_color_at_call_time() {
        let mut engine = GridEngine::with_grid(2, 200.0);
        let id = CellId::new(0, 0);
        engine.hover(id, PICKED);
        let next = Rgba::rgb(200, 100, 0);
        engine.hover(id, next);
        assert_eq!(engine.grid().cell(id).unwrap().color, next);
    }

    #[test]
    fn rainbow_mode_repaints_with_new_random_colors() {
        let mut engine = GridEngine::with_grid(2, 200.0);
        engine.set_mode(PaintMode::Rainbow);
        let id = CellId::new(1, 0);

        let mut seen = HashSet::new();
        for _ in 0..64 {
            engine.hover(id, PICKED);
            let color = engine.grid().cell(id).unwrap().color;
            assert_eq!(color.a, 255);
            seen.insert(color);
        }
        // 64 independent draws from 2^24 colors collapsing to one means a frozen rng
        assert!(seen.len() > 1);
        assert_eq!(painted(&engine).iter().filter(|&&c| c != id).count(), 0);
    }

    #[test]
    fn eraser_mode_resets_only_hovered_cell() {
        let mut engine = GridEngine::with_grid(3, 300.0);
        let a = CellId::new(0, 1);
        let b = CellId::new(2, 2);
        engine.hover(a, PICKED);
        engine.hover(b, PICKED);

        engine.set_mode(PaintMode::Eraser);
        engine.hover(a, PICKED);

        for (id, cell) in engine.grid().iter() {
            if id == b {
                assert_eq!(cell.color, PICKED);
            } else {
                assert_eq!(cell.color, BACKGROUND, "{id:?}");
            }
        }
    }

    #[test]
    fn clear_grid_resets_all_cells_and_keeps_dimension() {
        let mut engine = GridEngine::with_grid(6, 600.0);
        engine.set_mode(PaintMode::Rainbow);
        let every_other: Vec<CellId> = engine.grid().ids().step_by(2).collect();
        for id in every_other {
            engine.hover(id, PICKED);
        }
        engine.clear_grid(6);

        assert_eq!(engine.grid().len(), 36);
        assert!(painted(&engine).is_empty());
        // still paintable after a clear
        assert!(engine.hover(CellId::new(0, 0), PICKED));
    }

    #[test]
    fn mode_selection_is_exclusive_and_idempotent() {
        let mut engine = GridEngine::with_grid(1, 100.0);
        for mode in PaintMode::ALL {
            engine.set_mode(mode);
            engine.set_mode(mode);
            let active: Vec<_> = PaintMode::ALL.into_iter().filter(|m| *m == engine.mode()).collect();
            assert_eq!(active, vec![mode]);
        }
    }

    #[test]
    fn three_by_three_rainbow_then_clear_scenario() {
        let mut engine = GridEngine::new(BOARD_EXTENT);
        engine.build_grid(3);
        engine.attach_hover_handlers();
        assert_eq!(engine.grid().len(), 9);
        assert!(engine.grid().iter().all(|(_, c)| c.size == BOARD_EXTENT / 3.0));

        engine.set_mode(PaintMode::Rainbow);
        engine.hover(CellId::new(0, 0), PICKED);
        let others_untouched = engine
            .grid()
            .iter()
            .filter(|(id, _)| *id != CellId::new(0, 0))
            .all(|(_, c)| c.color == BACKGROUND);
        assert!(others_untouched);
        let text = engine.grid().cell(CellId::new(0, 0)).unwrap().color.to_string();
        assert!(text.starts_with("rgb(") && text.ends_with(')'));

        engine.clear_grid(3);
        assert!(engine.grid().iter().all(|(_, c)| c.color == BACKGROUND));
    }
}
