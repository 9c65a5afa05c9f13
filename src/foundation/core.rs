use crate::foundation::error::{FramesError, FramesResult};

pub use kurbo::{Point, Rect, Vec2};

/// Straight-alpha RGBA8 color as authored in sprite tables.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build a color from straight RGBA8 channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Logical authoring grid and its integer scale to output pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridSpec {
    /// Logical cells per side (the grid is square).
    pub cells: u32,
    /// Output pixels per logical cell, must be > 0.
    pub scale: u32,
}

impl GridSpec {
    /// Create a validated grid.
    pub fn new(cells: u32, scale: u32) -> FramesResult<Self> {
        if cells == 0 {
            return Err(FramesError::validation("GridSpec cells must be > 0"));
        }
        if scale == 0 {
            return Err(FramesError::validation("GridSpec scale must be > 0"));
        }
        if cells * scale > u32::from(u16::MAX) {
            return Err(FramesError::validation("GridSpec pixel size exceeds u16"));
        }
        Ok(Self { cells, scale })
    }

    /// Output size in pixels per side.
    pub fn pixel_size(self) -> u32 {
        self.cells * self.scale
    }

    /// Return `true` when logical cell `(x, y)` lies inside the grid.
    pub fn contains_cell(self, x: i32, y: i32) -> bool {
        let n = self.cells as i32;
        (0..n).contains(&x) && (0..n).contains(&y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
