//! Color definitions for occupants and light phases

use serde::{Deserialize, Serialize};

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form, e.g. `#ff00ff`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const MAGENTA: Color = Color::new(255, 0, 255);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const PINK: Color = Color::new(255, 175, 175);

// Traffic light phases
pub const RED: Color = Color::new(255, 0, 0);
pub const YELLOW: Color = Color::new(255, 255, 0);

// Street light phases
pub const DARK_GRAY: Color = Color::new(64, 64, 64); // off
pub const ORANGE: Color = Color::new(255, 200, 0); // on
