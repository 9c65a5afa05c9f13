use kurbo::{PathEl, Shape};

use crate::foundation::core::{Color, GridSpec, Point, Rect};
use crate::foundation::error::{FramesError, FramesResult};
use crate::render::canvas::{Canvas, compose};
use crate::render::composite::blend_coverage;
use crate::scene::frame::FrameSpec;
use crate::scene::primitive::{CellRect, Paint, Primitive, Stamp};

const TOLERANCE: f64 = 0.05;

/// CPU rasterizer that stamps logical-grid primitives onto a [`Canvas`] via `vello_cpu`.
///
/// Each stamp is reduced to a coverage mask and then blended over the canvas in its own
/// color, so paint order is exactly stamp order. Cell primitives fill the mask directly;
/// vector shapes are rendered in opaque white into a scratch pixmap whose alpha is the mask.
pub struct CpuRasterizer {
    grid: GridSpec,
    size: u16,
    ctx: Option<vello_cpu::RenderContext>,
    scratch: vello_cpu::Pixmap,
    mask: Vec<u8>,
}

impl std::fmt::Debug for CpuRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRasterizer")
            .field("grid", &self.grid)
            .finish_non_exhaustive()
    }
}

impl CpuRasterizer {
    pub fn new(grid: GridSpec) -> FramesResult<Self> {
        let size: u16 = grid
            .pixel_size()
            .try_into()
            .map_err(|_| FramesError::validation("canvas size exceeds u16"))?;
        Ok(Self {
            grid,
            size,
            ctx: None,
            scratch: vello_cpu::Pixmap::new(size, size),
            mask: vec![0; usize::from(size) * usize::from(size)],
        })
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Transparent canvas matching this rasterizer's output size.
    pub fn new_canvas(&self) -> Canvas {
        let px = u32::from(self.size);
        Canvas::new(px, px)
    }

    /// Paint one primitive over `canvas`. Geometry outside the canvas is clipped away.
    pub fn stamp(
        &mut self,
        canvas: &mut Canvas,
        primitive: &Primitive,
        color: Color,
    ) -> FramesResult<()> {
        let px = u32::from(self.size);
        if canvas.width() != px || canvas.height() != px {
            return Err(FramesError::validation(format!(
                "canvas is {}x{}, rasterizer expects {px}x{px}",
                canvas.width(),
                canvas.height()
            )));
        }
        if color.a == 0 {
            return Ok(());
        }

        self.mask.fill(0);
        let drew = match primitive {
            Primitive::FillRect(r) => match r.clip_to_grid(self.grid.cells) {
                Some(r) => {
                    self.cover_cells(r);
                    true
                }
                None => false,
            },
            Primitive::Cells(cells) => {
                let mut drew = false;
                for &(x, y) in cells {
                    if self.grid.contains_cell(x, y) {
                        self.cover_cells(CellRect::cell(x, y));
                        drew = true;
                    }
                }
                drew
            }
            _ => self.rasterize_coverage(primitive),
        };

        if drew {
            blend_coverage(canvas.rgba8_mut(), &self.mask, color)?;
        }
        Ok(())
    }

    /// Paint stamps over `canvas` in order.
    pub fn stamp_all<'a>(
        &mut self,
        canvas: &mut Canvas,
        stamps: impl IntoIterator<Item = &'a Stamp>,
    ) -> FramesResult<()> {
        for s in stamps {
            self.stamp(canvas, &s.primitive, s.color)?;
        }
        Ok(())
    }

    /// Rasterize a whole frame: base layer, then the overlay layer composed on top.
    pub fn render_frame(&mut self, frame: &FrameSpec) -> FramesResult<Canvas> {
        let mut base = self.new_canvas();
        self.stamp_all(&mut base, &frame.base)?;
        if frame.overlay.is_empty() {
            return Ok(base);
        }
        let mut overlay = self.new_canvas();
        self.stamp_all(&mut overlay, &frame.overlay)?;
        compose(&base, &overlay)
    }

    /// Mark the exact pixel block of an in-grid cell rect as fully covered. Overlapping cells
    /// stay at full coverage, so a repeated cell is painted once.
    fn cover_cells(&mut self, r: CellRect) {
        let s = self.grid.scale as usize;
        let row = usize::from(self.size);
        let (x0, y0) = (r.x as usize * s, r.y as usize * s);
        let (x1, y1) = (x0 + r.w as usize * s, y0 + r.h as usize * s);
        for y in y0..y1.min(row) {
            self.mask[y * row + x0.min(row)..y * row + x1.min(row)].fill(255);
        }
    }

    /// Render a vector primitive in opaque white and copy its alpha into the mask.
    fn rasterize_coverage(&mut self, primitive: &Primitive) -> bool {
        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(self.size, self.size),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));

        let drew = self.draw(&mut ctx, primitive);
        if drew {
            ctx.flush();
            self.scratch.data_as_u8_slice_mut().fill(0);
            ctx.render_to_pixmap(&mut self.scratch);
            for (m, px) in self
                .mask
                .iter_mut()
                .zip(self.scratch.data_as_u8_slice().chunks_exact(4))
            {
                *m = px[3];
            }
        }
        self.ctx = Some(ctx);
        drew
    }

    /// Issue draw calls for a vector primitive. Returns `false` when there is nothing to draw.
    fn draw(&self, ctx: &mut vello_cpu::RenderContext, primitive: &Primitive) -> bool {
        match primitive {
            Primitive::FillRect(_) | Primitive::Cells(_) => false,
            Primitive::Line { points, width } => {
                let Some((first, rest)) = points.split_first() else {
                    return false;
                };
                let mut path = kurbo::BezPath::new();
                path.move_to(self.device_point(*first));
                for p in rest {
                    path.line_to(self.device_point(*p));
                }
                self.stroke(ctx, &path, *width);
                true
            }
            Primitive::Ellipse { bounds, paint } => {
                let bbox = self.device_box(*bounds);
                match *paint {
                    Paint::Fill => {
                        let path = kurbo::Ellipse::from_rect(bbox).to_path(TOLERANCE);
                        ctx.fill_path(&bezpath_to_cpu(&path));
                    }
                    Paint::Outline(width) => {
                        let half = self.device_len(width) / 2.0;
                        let path = kurbo::Ellipse::from_rect(bbox.inset(-half)).to_path(TOLERANCE);
                        self.stroke(ctx, &path, width);
                    }
                }
                true
            }
            Primitive::Arc {
                bounds,
                start_deg,
                end_deg,
                width,
            } => {
                let half = self.device_len(*width) / 2.0;
                let bbox = self.device_box(*bounds).inset(-half);
                let arc = kurbo::Arc::new(
                    bbox.center(),
                    (bbox.width() / 2.0, bbox.height() / 2.0),
                    start_deg.to_radians(),
                    sweep_degrees(*start_deg, *end_deg).to_radians(),
                    0.0,
                );
                self.stroke(ctx, &arc.to_path(TOLERANCE), *width);
                true
            }
            Primitive::Polygon { points, paint } => {
                let Some((first, rest)) = points.split_first() else {
                    return false;
                };
                let mut path = kurbo::BezPath::new();
                path.move_to(self.device_point(*first));
                for p in rest {
                    path.line_to(self.device_point(*p));
                }
                path.close_path();
                match *paint {
                    Paint::Fill => ctx.fill_path(&bezpath_to_cpu(&path)),
                    Paint::Outline(width) => self.stroke(ctx, &path, width),
                }
                true
            }
        }
    }

    fn stroke(&self, ctx: &mut vello_cpu::RenderContext, path: &kurbo::BezPath, width: f64) {
        let stroke = vello_cpu::kurbo::Stroke::new(self.device_len(width))
            .with_caps(vello_cpu::kurbo::Cap::Square)
            .with_join(vello_cpu::kurbo::Join::Round);
        ctx.set_stroke(stroke);
        ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn scale(&self) -> f64 {
        f64::from(self.grid.scale)
    }

    fn device_len(&self, logical: f64) -> f64 {
        logical * self.scale()
    }

    /// Logical point to the centre of the output pixel it names.
    fn device_point(&self, p: Point) -> Point {
        Point::new(p.x * self.scale() + 0.5, p.y * self.scale() + 0.5)
    }

    /// Logical bounds to the device rect covering the named pixels inclusively.
    fn device_box(&self, r: Rect) -> Rect {
        let s = self.scale();
        Rect::new(r.x0 * s, r.y0 * s, r.x1 * s + 1.0, r.y1 * s + 1.0)
    }
}

/// Clockwise sweep from `start` to `end`, in `(0, 360]`.
fn sweep_degrees(start: f64, end: f64) -> f64 {
    let sweep = (end - start).rem_euclid(360.0);
    if sweep == 0.0 { 360.0 } else { sweep }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
