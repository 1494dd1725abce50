use crate::geom::{Pt3, pt3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// General 4x4 homogeneous transform, row-major, for row vectors.
///
/// `(x', y', z', w') = (x, y, z, w) * M`, translation lives in row 3 and
/// `a.multiply(b)` applies `a` first, the same conventions as [`crate::mat3::Mat3`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mat4 {
    m: [[f64; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self::identity();

    pub const fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub const fn from_rows(m: [[f64; 4]; 4]) -> Self {
        Self { m }
    }

    pub const fn rows(&self) -> [[f64; 4]; 4] {
        self.m
    }

    pub const fn from_scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut out = Self::identity();
        out.m[0][0] = sx;
        out.m[1][1] = sy;
        out.m[2][2] = sz;
        out
    }

    pub const fn from_translation(tx: f64, ty: f64, tz: f64) -> Self {
        let mut out = Self::identity();
        out.m[3][0] = tx;
        out.m[3][1] = ty;
        out.m[3][2] = tz;
        out
    }

    /// Euler rotation: `yaw` about x, then `pitch` about y, then `roll` about z.
    ///
    /// Equal to `from_rotation(yaw, 0, 0) * from_rotation(0, pitch, 0) * from_rotation(0, 0, roll)`.
    pub fn from_rotation(yaw: f64, pitch: f64, roll: f64) -> Self {
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let (sr, cr) = roll.sin_cos();
        Self {
            m: [
                [cp * cr, cp * sr, -sp, 0.0],
                [sy * sp * cr - cy * sr, sy * sp * sr + cy * cr, sy * cp, 0.0],
                [cy * sp * cr + sy * sr, cy * sp * sr - sy * cr, cy * cp, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    #[inline]
    pub fn scale(self, sx: f64, sy: f64, sz: f64) -> Self {
        self.multiply(&Self::from_scale(sx, sy, sz))
    }

    #[inline]
    pub fn translate(self, tx: f64, ty: f64, tz: f64) -> Self {
        self.multiply(&Self::from_translation(tx, ty, tz))
    }

    #[inline]
    pub fn rotate(self, yaw: f64, pitch: f64, roll: f64) -> Self {
        self.multiply(&Self::from_rotation(yaw, pitch, roll))
    }

    /// Returns `self * b`, the transform that applies `self` and then `b`.
    pub fn multiply(&self, b: &Self) -> Self {
        let mut c = [[0.0; 4]; 4];
        for (i, row) in c.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (0..4).map(|k| self.m[i][k] * b.m[k][j]).sum();
            }
        }
        Self { m: c }
    }

    pub fn transpose(&self) -> Self {
        let mut t = [[0.0; 4]; 4];
        for (i, row) in self.m.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                t[j][i] = *v;
            }
        }
        Self { m: t }
    }

    /// Multiplies the homogeneous row vector `vec` by this matrix.
    #[inline]
    pub fn apply(&self, vec: [f64; 4]) -> [f64; 4] {
        let mut out = [0.0; 4];
        for (j, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|i| vec[i] * self.m[i][j]).sum();
        }
        out
    }

    /// Transforms `p` with `w = 1` and divides by the resulting `w`.
    ///
    /// Returns `None` when the point lands at infinity (`w == 0`).
    pub fn transform_pt3(&self, p: Pt3) -> Option<Pt3> {
        let [x, y, z, w] = self.apply([p.x, p.y, p.z, 1.0]);
        if w == 0.0 {
            return None;
        }
        Some(pt3(x / w, y / w, z / w))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::write_grid(f, &self.m)
    }
}
