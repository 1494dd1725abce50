use crate::error::{XformError, XformResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

// Relative to the squared magnitude of the linear part.
const SINGULAR_REL_EPS: f64 = 1e-12;

/// 2D affine transform as a homogeneous 3x3 matrix with its constant last
/// column `(0, 0, 1)` elided.
///
/// ```text
/// | m[0][0]  m[0][1]  0 |
/// | m[1][0]  m[1][1]  0 |
/// | m[2][0]  m[2][1]  1 |
/// ```
///
/// Points are row vectors: `(x', y', 1) = (x, y, 1) * M`. Rows 0 and 1 hold
/// the linear part, row 2 the translation.
///
/// Composition reads left to right: `a.multiply(b)` applies `a` first, then
/// `b`. The chaining helpers follow the same rule, so
/// `Mat3::from_scale(2.0, 2.0).translate(1.0, 0.0)` scales, then translates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mat3 {
    m: [[f64; 2]; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self::identity();

    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]],
        }
    }

    pub const fn from_rows(m: [[f64; 2]; 3]) -> Self {
        Self { m }
    }

    pub const fn rows(&self) -> [[f64; 2]; 3] {
        self.m
    }

    /// Six coefficients taken row by row: `(a, b)` is the image of the x
    /// axis, `(c, d)` of the y axis and `(e, f)` the offset, so
    /// `(x, y) -> (a*x + c*y + e, b*x + d*y + f)`.
    pub const fn from_affine6(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            m: [[a, b], [c, d], [e, f]],
        }
    }

    /// Parses a flat affine layout (see [`Mat3::from_affine6`]).
    ///
    /// Extra elements are ignored.
    pub fn from_flat(flat: &[f64]) -> XformResult<Self> {
        match flat {
            [a, b, c, d, e, f, ..] => Ok(Self::from_affine6(*a, *b, *c, *d, *e, *f)),
            _ => Err(XformError::ShortAffine { len: flat.len() }),
        }
    }

    /// The inverse of [`Mat3::from_flat`].
    pub const fn to_flat(&self) -> [f64; 6] {
        let m = &self.m;
        [m[0][0], m[0][1], m[1][0], m[1][1], m[2][0], m[2][1]]
    }

    // Builders
    // -----------------------------------------------------------------------------

    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self {
            m: [[sx, 0.0], [0.0, sy], [0.0, 0.0]],
        }
    }

    pub const fn from_translation(tx: f64, ty: f64) -> Self {
        Self {
            m: [[1.0, 0.0], [0.0, 1.0], [tx, ty]],
        }
    }

    /// Counter-clockwise rotation by `theta` radians about the origin.
    pub fn from_rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            m: [[cos, sin], [-sin, cos], [0.0, 0.0]],
        }
    }

    /// Shear with `x' = x + sx*y` and `y' = sy*x + y`.
    pub const fn from_shear(sx: f64, sy: f64) -> Self {
        Self {
            m: [[1.0, sy], [sx, 1.0], [0.0, 0.0]],
        }
    }

    // Chaining: `self` applies first, the new transform second.
    // -----------------------------------------------------------------------------

    #[inline]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.multiply(&Self::from_scale(sx, sy))
    }

    #[inline]
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        self.multiply(&Self::from_translation(tx, ty))
    }

    #[inline]
    pub fn rotate(self, theta: f64) -> Self {
        self.multiply(&Self::from_rotation(theta))
    }

    #[inline]
    pub fn shear(self, sx: f64, sy: f64) -> Self {
        self.multiply(&Self::from_shear(sx, sy))
    }

    // Algebra
    // -----------------------------------------------------------------------------

    /// Returns `self * b`, the transform that applies `self` and then `b`.
    ///
    /// The elided column is `(0, 0, 1)`, so row 2 of `b` is picked up only by
    /// row 2 of the product. Dropping that term loses `b`'s translation.
    pub fn multiply(&self, b: &Self) -> Self {
        let a = &self.m;
        let b = &b.m;
        let mut c = [[0.0; 2]; 3];
        for i in 0..3 {
            for j in 0..2 {
                c[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j];
            }
        }
        c[2][0] += b[2][0];
        c[2][1] += b[2][1];
        Self { m: c }
    }

    /// Returns the transposed homogeneous matrix, elided column included.
    ///
    /// The result is the same transform written for column vectors. It is not
    /// an affine matrix in this layout, hence the plain array.
    pub fn transpose(&self) -> [[f64; 3]; 3] {
        let m = &self.m;
        [
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [0.0, 0.0, 1.0],
        ]
    }

    /// Determinant of the linear part (equal to that of the full 3x3).
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    /// Multiplies the homogeneous row vector `vec` by this matrix.
    #[inline]
    pub fn apply(&self, vec: [f64; 3]) -> [f64; 3] {
        let m = &self.m;
        [
            vec[0] * m[0][0] + vec[1] * m[1][0] + vec[2] * m[2][0],
            vec[0] * m[0][1] + vec[1] * m[1][1] + vec[2] * m[2][1],
            vec[2],
        ]
    }

    /// Maps `(x, y)` through the row vector `(x, y, 1)`.
    #[inline]
    pub fn transform_point2(&self, x: f64, y: f64) -> (f64, f64) {
        let [x2, y2, _] = self.apply([x, y, 1.0]);
        (x2, y2)
    }

    /// Inverts the matrix by cofactor expansion with the last column fixed at `(0, 0, 1)`.
    pub fn inverse(&self) -> XformResult<Self> {
        let [[a, b], [d, e], [g, h]] = self.m;

        // Cofactors laid out as the adjugate (transposed), last column dropped.
        let cof = [[e, -b], [-d, a], [d * h - e * g, -(a * h - b * g)]];
        let det = a * cof[0][0] + b * cof[1][0];

        let mag = a.abs().max(b.abs()).max(d.abs()).max(e.abs());
        if !det.is_finite() || det.abs() <= SINGULAR_REL_EPS * mag * mag {
            log::debug!("Mat3::inverse: singular linear part, det={det}");
            return Err(XformError::SingularMatrix { det });
        }

        let mut inv = cof;
        for row in inv.iter_mut() {
            for v in row.iter_mut() {
                *v /= det;
            }
        }
        Ok(Self { m: inv })
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.m;
        crate::format::write_grid(
            f,
            &[
                [m[0][0], m[0][1], 0.0],
                [m[1][0], m[1][1], 0.0],
                [m[2][0], m[2][1], 1.0],
            ],
        )
    }
}
