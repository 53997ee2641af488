#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Parse {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{var}={value} is outside {min}..={max}")]
    OutOfRange {
        var: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("ETCH_BOARD_EXTENT must be between 100 and 1200 pixels, got {0}")]
    BadExtent(f32),
}
