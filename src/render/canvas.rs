use crate::foundation::core::Color;
use crate::foundation::error::{FramesError, FramesResult};
use crate::render::composite::over_in_place;

/// Fixed-size RGBA8 raster that stamps are painted onto.
///
/// Pixels are stored as straight-alpha RGBA8, row-major, tightly packed, so a stamped color
/// reaches the encoder byte for byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Build a canvas from straight-alpha RGBA8 bytes (decoder output).
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> FramesResult<Self> {
        if rgba.len() != width as usize * height as usize * 4 {
            return Err(FramesError::validation(format!(
                "rgba8 byte length {} does not match {width}x{height}",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data: rgba.to_vec(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Straight-alpha RGBA8 bytes, row-major.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn rgba8_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Straight-alpha color at `(x, y)`, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[i..i + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Return `true` when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Number of pixels with non-zero alpha.
    pub fn coverage(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

/// Alpha-over of two same-size canvases, `top` painted over `bottom`.
pub fn compose(bottom: &Canvas, top: &Canvas) -> FramesResult<Canvas> {
    if bottom.width != top.width || bottom.height != top.height {
        return Err(FramesError::validation(format!(
            "compose expects equal canvas sizes, got {}x{} and {}x{}",
            bottom.width, bottom.height, top.width, top.height
        )));
    }
    let mut out = bottom.clone();
    over_in_place(&mut out.data, &top.data)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
