use crate::foundation::core::{Color, Point, Rect, Vec2};

/// Axis-aligned block of logical grid cells, `w x h` cells starting at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CellRect {
    /// Left cell column.
    pub x: i32,
    /// Top cell row.
    pub y: i32,
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl CellRect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Single cell.
    pub const fn cell(x: i32, y: i32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Intersect with a `cells x cells` grid. `None` when nothing is left.
    pub fn clip_to_grid(self, cells: u32) -> Option<Self> {
        let n = cells as i64;
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.w)).min(n);
        let y1 = (i64::from(self.y) + i64::from(self.h)).min(n);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Self {
            x: x0 as i32,
            y: y0 as i32,
            w: (x1 - x0) as u32,
            h: (y1 - y0) as u32,
        })
    }
}

/// How a closed shape is painted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Paint {
    Fill,
    /// Stroke inside the shape bounds with the given width in logical units.
    Outline(f64),
}

/// One atomic drawing instruction in logical grid units.
///
/// Point coordinates name pixels after scaling, the way a pixel editor does: a bounds rect
/// `[x0, y0, x1, y1]` covers output pixels `x0*s ..= x1*s` inclusive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Primitive {
    /// Filled block of grid cells.
    FillRect(CellRect),
    /// Sparse set of filled grid cells.
    Cells(Vec<(i32, i32)>),
    /// Open polyline.
    Line { points: Vec<Point>, width: f64 },
    Ellipse { bounds: Rect, paint: Paint },
    /// Elliptical arc inside `bounds`, degrees clockwise from 3 o'clock.
    Arc {
        bounds: Rect,
        start_deg: f64,
        end_deg: f64,
        width: f64,
    },
    /// Closed polygon.
    Polygon { points: Vec<Point>, paint: Paint },
}

impl Primitive {
    pub fn line(points: &[(f64, f64)], width: f64) -> Self {
        Self::Line {
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            width,
        }
    }

    pub fn segment(a: (f64, f64), b: (f64, f64), width: f64) -> Self {
        Self::line(&[a, b], width)
    }

    pub fn ellipse(bounds: [f64; 4], paint: Paint) -> Self {
        Self::Ellipse {
            bounds: rect(bounds),
            paint,
        }
    }

    pub fn arc(bounds: [f64; 4], start_deg: f64, end_deg: f64, width: f64) -> Self {
        Self::Arc {
            bounds: rect(bounds),
            start_deg,
            end_deg,
            width,
        }
    }

    pub fn polygon(points: &[(f64, f64)], paint: Paint) -> Self {
        Self::Polygon {
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            paint,
        }
    }

    /// Move the primitive by `d` logical units.
    ///
    /// Cell primitives only move by whole cells; a fractional offset is a table bug.
    pub fn translate(self, d: Vec2) -> Self {
        if d == Vec2::ZERO {
            return self;
        }
        match self {
            Self::FillRect(r) => {
                let (dx, dy) = whole_cells(d);
                Self::FillRect(CellRect { x: r.x + dx, y: r.y + dy, ..r })
            }
            Self::Cells(cells) => {
                let (dx, dy) = whole_cells(d);
                Self::Cells(cells.into_iter().map(|(x, y)| (x + dx, y + dy)).collect())
            }
            Self::Line { points, width } => Self::Line {
                points: points.into_iter().map(|p| p + d).collect(),
                width,
            },
            Self::Ellipse { bounds, paint } => Self::Ellipse {
                bounds: bounds + d,
                paint,
            },
            Self::Arc {
                bounds,
                start_deg,
                end_deg,
                width,
            } => Self::Arc {
                bounds: bounds + d,
                start_deg,
                end_deg,
                width,
            },
            Self::Polygon { points, paint } => Self::Polygon {
                points: points.into_iter().map(|p| p + d).collect(),
                paint,
            },
        }
    }
}

fn rect([x0, y0, x1, y1]: [f64; 4]) -> Rect {
    Rect::new(x0, y0, x1, y1)
}

fn whole_cells(d: Vec2) -> (i32, i32) {
    debug_assert!(
        d.x.fract() == 0.0 && d.y.fract() == 0.0,
        "cell primitives need whole-cell offsets, got {d:?}"
    );
    (d.x as i32, d.y as i32)
}

/// Which part of the cat a stamp draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Part {
    Ear,
    Head,
    Eye,
    Nose,
    Mouth,
    Whisker,
    Body,
    Leg,
    Paw,
    Tail,
    Fur,
    Prop,
    Sparkle,
    Zzz,
    ThoughtDot,
}

impl Part {
    /// Parts that belong to the head/body pose (moved together by tilt or bob).
    pub fn is_pose(self) -> bool {
        matches!(
            self,
            Part::Ear
                | Part::Head
                | Part::Eye
                | Part::Nose
                | Part::Mouth
                | Part::Whisker
                | Part::Body
                | Part::Tail
        )
    }
}

/// A primitive, its color, and the part it belongs to.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stamp {
    pub part: Part,
    pub primitive: Primitive,
    pub color: Color,
}

impl Stamp {
    pub fn new(part: Part, primitive: Primitive, color: Color) -> Self {
        Self {
            part,
            primitive,
            color,
        }
    }

    pub fn translate(self, d: Vec2) -> Self {
        Self {
            primitive: self.primitive.translate(d),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/primitive.rs"]
mod tests;
