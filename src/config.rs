//! Board configuration parsed from environment variables.

use crate::core::constants::{
    BOARD_EXTENT, BOARD_ORIGIN_X, BOARD_ORIGIN_Y, DEFAULT_GRID_SIZE, GRID_SIZE_CAP, MAX_BOARD_EXTENT,
    MAX_GRID_SIZE, MIN_BOARD_EXTENT, MIN_GRID_SIZE, MIN_WINDOW_WIDTH, PICKER_GAP, STATUS_LINE_HEIGHT,
    WINDOW_MARGIN,
};
use crate::error::ConfigError;
use crate::ui::palette::{PANEL_HEIGHT, PANEL_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EtchConfig {
    /// Grid dimension built at startup
    pub grid_size: usize,
    /// Largest dimension the size slider offers
    pub max_grid_size: usize,
    /// Board edge length in pixels, shared by every grid dimension
    pub board_extent: f32,
}

impl Default for EtchConfig {
    fn default() -> Self {
        EtchConfig {
            grid_size: DEFAULT_GRID_SIZE,
            max_grid_size: MAX_GRID_SIZE,
            board_extent: BOARD_EXTENT,
        }
    }
}

impl EtchConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `ETCH_GRID_SIZE`: default 40
    /// - `ETCH_MAX_GRID_SIZE`: default 100, at most 256
    /// - `ETCH_BOARD_EXTENT`: default 500, between 100 and 1200
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_grid_size = parse_var(&lookup, "ETCH_MAX_GRID_SIZE", "grid size", MAX_GRID_SIZE)?;
        if !(MIN_GRID_SIZE..=GRID_SIZE_CAP).contains(&max_grid_size) {
            return Err(ConfigError::OutOfRange {
                var: "ETCH_MAX_GRID_SIZE",
                value: max_grid_size,
                min: MIN_GRID_SIZE,
                max: GRID_SIZE_CAP,
            });
        }

        let grid_size = parse_var(&lookup, "ETCH_GRID_SIZE", "grid size", DEFAULT_GRID_SIZE)?;
        if !(MIN_GRID_SIZE..=max_grid_size).contains(&grid_size) {
            return Err(ConfigError::OutOfRange {
                var: "ETCH_GRID_SIZE",
                value: grid_size,
                min: MIN_GRID_SIZE,
                max: max_grid_size,
            });
        }

        let board_extent = parse_var(&lookup, "ETCH_BOARD_EXTENT", "pixel extent", BOARD_EXTENT)?;
        if !(MIN_BOARD_EXTENT..=MAX_BOARD_EXTENT).contains(&board_extent) {
            return Err(ConfigError::BadExtent(board_extent));
        }

        Ok(Self {
            grid_size,
            max_grid_size,
            board_extent,
        })
    }

    /// Window size that fits the controls row, the board, the picker panel and the status line
    pub fn window_size(&self) -> (f32, f32) {
        let width = BOARD_ORIGIN_X + self.board_extent + PICKER_GAP + PANEL_WIDTH + WINDOW_MARGIN;
        let height = BOARD_ORIGIN_Y + self.board_extent.max(PANEL_HEIGHT) + STATUS_LINE_HEIGHT;
        (width.max(MIN_WINDOW_WIDTH), height)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Parse {
            var,
            value: raw,
            expected,
        }),
    }
}
