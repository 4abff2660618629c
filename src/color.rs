//! 32-bit packed colors
//!
//! The rasterizer never looks inside a color; it only copies the value into
//! the framebuffer. The `0x00RRGGBB` layout only matters to the display,
//! which uploads the buffer as XRGB8888.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    /// Pale green used for the bob
    pub const BOB: Self = Self::from_rgb(0x77, 0xFF, 0x77);

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
}

impl From<u32> for Color {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> Self {
        c.0
    }
}
