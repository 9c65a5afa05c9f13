use crate::foundation::core::Color;
use crate::foundation::error::{FramesError, FramesResult};

/// Straight-alpha RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Source-over for one straight-alpha pixel.
///
/// Blending runs in premultiplied space at full precision and divides back out once, so a
/// source landing on a transparent or fully covered pixel keeps its exact channels.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u32::from(src[3]);
    let da = u32::from(dst[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 || da == 0 {
        return src;
    }

    let inv = 255 - sa;
    // Output alpha scaled by 255.
    let a = sa * 255 + da * inv;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * da * inv;
        out[i] = ((c + a / 2) / a).min(255) as u8;
    }
    out[3] = ((a + 127) / 255) as u8;
    out
}

/// Source-over of two equal-length straight RGBA8 buffers, `src` on top.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> FramesResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(FramesError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Paint `color` over `dst` through a one-byte-per-pixel coverage mask.
///
/// Coverage scales alpha only. Fully covered pixels receive `color` unchanged.
pub fn blend_coverage(dst: &mut [u8], coverage: &[u8], color: Color) -> FramesResult<()> {
    if dst.len() != coverage.len() * 4 {
        return Err(FramesError::validation(format!(
            "coverage mask has {} entries for {} pixels",
            coverage.len(),
            dst.len() / 4
        )));
    }
    for (d, &cov) in dst.chunks_exact_mut(4).zip(coverage) {
        if cov == 0 {
            continue;
        }
        let src = [color.r, color.g, color.b, mul_div255(color.a, cov)];
        let out = over([d[0], d[1], d[2], d[3]], src);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u8, y: u8) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
