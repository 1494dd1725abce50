use crate::error::{XformError, XformResult};
use crate::mat4::Mat4;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Clip-space depth range produced by the projections.
///
/// View space is right-handed with the camera looking down `-z`; the near
/// plane maps to the low end of the range and the far plane to the high end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthRange {
    /// OpenGL style, `z_ndc` in `[-1, 1]`.
    #[default]
    NegOneToOne,
    /// Direct3D/Vulkan/wgpu style, `z_ndc` in `[0, 1]`.
    ZeroToOne,
}

/// Projection matrix factory for a chosen depth convention.
///
/// All matrices are laid out for row vectors like the rest of the crate, so
/// `(x, y, z, 1) * P` gives clip coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    #[serde(default)]
    pub depth: DepthRange,
}

fn require(ok: bool, param: &'static str, reason: &'static str) -> XformResult<()> {
    if ok {
        return Ok(());
    }
    log::debug!("rejecting projection: {param} {reason}");
    Err(XformError::DegenerateProjection { param, reason })
}

fn require_finite(params: &[(&'static str, f64)]) -> XformResult<()> {
    for &(param, v) in params {
        require(v.is_finite(), param, "must be finite")?;
    }
    Ok(())
}

// Both planes sit in front of the eye, on the `-z` side.
fn require_depth(near: f64, far: f64) -> XformResult<()> {
    require_finite(&[("near", near), ("far", far)])?;
    require(near > 0.0, "near", "must be positive")?;
    require(far > 0.0, "far", "must be positive")?;
    require(near != far, "far", "must differ from near")
}

// Finite inputs can still overflow once divided or multiplied.
fn require_finite_entries(m: Mat4) -> XformResult<Mat4> {
    let finite = m.rows().iter().flatten().all(|v| v.is_finite());
    require(finite, "matrix", "has a non-finite entry")?;
    Ok(m)
}

impl Projection {
    pub const fn new(depth: DepthRange) -> Self {
        Self { depth }
    }

    /// Perspective depth terms `(a, b)`: `z_clip = a*z + b`, `w_clip = -z`.
    fn perspective_depth(&self, near: f64, far: f64) -> (f64, f64) {
        let span = far - near;
        match self.depth {
            DepthRange::NegOneToOne => (-(far + near) / span, -2.0 * far * near / span),
            DepthRange::ZeroToOne => (-far / span, -far * near / span),
        }
    }

    /// Orthographic depth terms `(a, b)`: `z_clip = a*z + b`, `w_clip = 1`.
    fn ortho_depth(&self, near: f64, far: f64) -> (f64, f64) {
        let span = far - near;
        match self.depth {
            DepthRange::NegOneToOne => (-2.0 / span, -(far + near) / span),
            DepthRange::ZeroToOne => (-1.0 / span, -near / span),
        }
    }

    /// Asymmetric perspective frustum from the near-plane extents.
    ///
    /// `left..right` and `bottom..top` on the plane `z = -near` map to `[-1, 1]`.
    pub fn frustum(
        &self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> XformResult<Mat4> {
        require_finite(&[("left", left), ("right", right), ("bottom", bottom), ("top", top)])?;
        require(right != left, "right", "must differ from left")?;
        require(top != bottom, "top", "must differ from bottom")?;
        require_depth(near, far)?;

        let w = right - left;
        let h = top - bottom;
        let (a, b) = self.perspective_depth(near, far);
        require_finite_entries(Mat4::from_rows([
            [2.0 * near / w, 0.0, 0.0, 0.0],
            [0.0, 2.0 * near / h, 0.0, 0.0],
            [(right + left) / w, (top + bottom) / h, a, -1.0],
            [0.0, 0.0, b, 0.0],
        ]))
    }

    /// Symmetric perspective from a vertical field of view (radians) and aspect ratio (w/h).
    pub fn perspective(&self, fov: f64, aspect: f64, near: f64, far: f64) -> XformResult<Mat4> {
        require_finite(&[("fov", fov), ("aspect", aspect)])?;
        require(fov > 0.0 && fov < PI, "fov", "must be in (0, pi)")?;
        require(aspect > 0.0, "aspect", "must be positive")?;
        require_depth(near, far)?;

        let half_tan = (fov / 2.0).tan();
        let (a, b) = self.perspective_depth(near, far);
        require_finite_entries(Mat4::from_rows([
            [1.0 / (aspect * half_tan), 0.0, 0.0, 0.0],
            [0.0, 1.0 / half_tan, 0.0, 0.0],
            [0.0, 0.0, a, -1.0],
            [0.0, 0.0, b, 0.0],
        ]))
    }

    /// Parallel projection of the box `left..right`, `bottom..top`, `-near..-far`.
    pub fn ortho(
        &self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> XformResult<Mat4> {
        require_finite(&[("left", left), ("right", right), ("bottom", bottom), ("top", top)])?;
        require(right != left, "right", "must differ from left")?;
        require(top != bottom, "top", "must differ from bottom")?;
        require_depth(near, far)?;

        let w = right - left;
        let h = top - bottom;
        let (a, b) = self.ortho_depth(near, far);
        require_finite_entries(Mat4::from_rows([
            [2.0 / w, 0.0, 0.0, 0.0],
            [0.0, 2.0 / h, 0.0, 0.0],
            [0.0, 0.0, a, 0.0],
            [-(right + left) / w, -(top + bottom) / h, b, 1.0],
        ]))
    }

    /// Centered parallel projection where `zoom` is the size of one world unit
    /// in output units.
    ///
    /// With `width`/`height` equal to the window size in pixels, one world unit
    /// spans `zoom` pixels. The visible extent is `width/zoom` by `height/zoom`.
    pub fn orthographic(
        &self,
        zoom: f64,
        width: f64,
        height: f64,
        near: f64,
        far: f64,
    ) -> XformResult<Mat4> {
        require_finite(&[("zoom", zoom), ("width", width), ("height", height)])?;
        require(zoom > 0.0, "zoom", "must be positive")?;
        require(width > 0.0, "width", "must be positive")?;
        require(height > 0.0, "height", "must be positive")?;

        let half_w = width / (2.0 * zoom);
        let half_h = height / (2.0 * zoom);
        require(half_w.is_finite() && half_h.is_finite(), "zoom", "is too small for the extent")?;
        self.ortho(-half_w, half_w, -half_h, half_h, near, far)
    }
}

/// [`Projection::frustum`] with the default depth range.
pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> XformResult<Mat4> {
    Projection::default().frustum(left, right, bottom, top, near, far)
}

/// [`Projection::perspective`] with the default depth range.
pub fn perspective(fov: f64, aspect: f64, near: f64, far: f64) -> XformResult<Mat4> {
    Projection::default().perspective(fov, aspect, near, far)
}

/// [`Projection::orthographic`] with the default depth range.
pub fn orthographic(zoom: f64, width: f64, height: f64, near: f64, far: f64) -> XformResult<Mat4> {
    Projection::default().orthographic(zoom, width, height, near, far)
}
