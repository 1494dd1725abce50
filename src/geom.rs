use serde::{Deserialize, Serialize};

/// A 2D point or vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pt2 {
    pub x: f64,
    pub y: f64,
}

pub const fn pt2(x: f64, y: f64) -> Pt2 {
    Pt2 { x, y }
}

/// A 3D point or vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pt3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

pub const fn pt3(x: f64, y: f64, z: f64) -> Pt3 {
    Pt3 { x, y, z }
}

/// Axis-aligned rectangle given by two corners.
///
/// Nothing forces `min <= max`; transformed rectangles can come out inverted.
/// Use [`Rect::canon`] when a well-formed rectangle is needed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Pt2,
    pub max: Pt2,
}

impl Rect {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: pt2(x0, y0),
            max: pt2(x1, y1),
        }
    }

    /// Width of the rectangle (negative when inverted).
    pub fn dx(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle (negative when inverted).
    pub fn dy(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the rectangle with `min`/`max` swapped per axis where needed.
    pub fn canon(self) -> Self {
        Self {
            min: pt2(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            max: pt2(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        }
    }
}
