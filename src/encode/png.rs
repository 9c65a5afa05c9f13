use image::ImageEncoder as _;

use crate::foundation::error::{FramesError, FramesResult};
use crate::render::canvas::Canvas;

/// Encode a canvas as a lossless straight-alpha RGBA8 PNG.
pub fn encode_png(canvas: &Canvas) -> FramesResult<Vec<u8>> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            canvas.as_rgba8(),
            canvas.width(),
            canvas.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| FramesError::encode(format!("png encode failed: {e}")))?;
    Ok(out)
}

/// Decode PNG bytes back into a canvas. Any PNG color type is widened to RGBA8.
pub fn decode_png(bytes: &[u8]) -> FramesResult<Canvas> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| FramesError::encode(format!("png decode failed: {e}")))?
        .to_rgba8();
    Canvas::from_rgba8(img.width(), img.height(), img.as_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
