use std::fmt;

use rand::Rng;

/// Number of distinct values per color channel.
pub const CHANNEL_RANGE: u16 = 256;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// CSS-style `rgb(r,g,b)`, alpha is never shown
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Fill of a cell nobody has painted yet
pub const BACKGROUND: Rgba = Rgba::WHITE;

/// Random opaque color, each channel drawn independently and uniformly from [0, 256)
pub fn generate_random_color() -> Rgba {
    random_color_from(&mut rand::rng())
}

pub fn random_color_from<R: Rng>(rng: &mut R) -> Rgba {
    let mut channel = || rng.random_range(0..CHANNEL_RANGE) as u8;
    Rgba::rgb(channel(), channel(), channel())
}

pub const PICKER_ROWS: usize = 2;
pub const PICKER_COLS: usize = 8;

pub const PICKER_SWATCHES: [[Rgba; PICKER_COLS]; PICKER_ROWS] = [
    [
        Rgba::rgb(0, 0, 0),       // black
        Rgba::rgb(96, 96, 96),    // gray
        Rgba::rgb(200, 30, 45),   // red
        Rgba::rgb(240, 120, 20),  // orange
        Rgba::rgb(245, 205, 30),  // yellow
        Rgba::rgb(60, 170, 70),   // green
        Rgba::rgb(30, 150, 160),  // teal
        Rgba::rgb(40, 80, 200),   // blue
    ],
    [
        Rgba::rgb(255, 255, 255), // white
        Rgba::rgb(190, 190, 190), // light gray
        Rgba::rgb(255, 150, 170), // pink
        Rgba::rgb(140, 80, 40),   // brown
        Rgba::rgb(180, 230, 110), // lime
        Rgba::rgb(20, 90, 50),    // forest
        Rgba::rgb(130, 200, 240), // sky
        Rgba::rgb(120, 50, 160),  // purple
    ],
];
