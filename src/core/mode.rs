/// How a hovered cell is repainted. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintMode {
    /// Fill with the color picker's current value
    #[default]
    Color,
    /// Fill with a fresh random color on every hover
    Rainbow,
    /// Reset to the background color
    Eraser,
}

impl PaintMode {
    pub const ALL: [PaintMode; 3] = [PaintMode::Color, PaintMode::Rainbow, PaintMode::Eraser];

    pub fn label(self) -> &'static str {
        match self {
            PaintMode::Color => "Color",
            PaintMode::Rainbow => "Rainbow",
            PaintMode::Eraser => "Eraser",
        }
    }
}
