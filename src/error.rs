use thiserror::Error;

/// Failures of the transform algebra.
///
/// Everything except inversion, projection construction, and window setup is
/// total, so these are the only conditions a caller has to handle.
#[derive(Debug, Error)]
pub enum XformError {
    /// The linear part of an affine matrix has a zero or negligible determinant.
    #[error("singular matrix: determinant {det} is not invertible")]
    SingularMatrix { det: f64 },

    /// A projection parameter would put a zero, infinity or NaN in the matrix.
    #[error("degenerate projection: {param} {reason}")]
    DegenerateProjection {
        param: &'static str,
        reason: &'static str,
    },

    /// A window transform was requested for a window with no pixels.
    #[error("zero size window: {w}x{h}")]
    ZeroSizeWindow { w: u32, h: u32 },

    /// A flat affine layout needs six numbers.
    #[error("flat affine matrix needs 6 elements, got {len}")]
    ShortAffine { len: usize },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "desc")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type XformResult<T> = Result<T, XformError>;
