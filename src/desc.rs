use crate::bridge::window_transform;
use crate::error::XformResult;
use crate::mat3::Mat3;
use crate::mat4::Mat4;
use crate::projection::{DepthRange, Projection};
use serde::Deserialize;

/// One 2D step. Steps apply in list order (first step first).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step2Desc {
    Scale { x: f64, y: f64 },
    Translate { x: f64, y: f64 },
    /// Radians, counter-clockwise.
    Rotate { theta: f64 },
    Shear { x: f64, y: f64 },
    /// Flat `[a, b, c, d, tx, ty]`, see [`Mat3::from_affine6`].
    Affine { m: Vec<f64> },
    /// Pixel space of a `w` x `h` window to device space.
    Window { w: u32, h: u32 },
}

/// One 3D step. Steps apply in list order (first step first).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step3Desc {
    Scale { x: f64, y: f64, z: f64 },
    Translate { x: f64, y: f64, z: f64 },
    Rotate {
        #[serde(default)]
        yaw: f64,
        #[serde(default)]
        pitch: f64,
        #[serde(default)]
        roll: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraDesc {
    Frustum {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    },
    Perspective {
        fov: f64,
        aspect: f64,
        near: f64,
        far: f64,
    },
    Orthographic {
        zoom: f64,
        width: f64,
        height: f64,
        near: f64,
        far: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewDesc {
    pub version: u32,
    #[serde(default)]
    pub depth: DepthRange,
    #[serde(default)]
    pub xform2: Vec<Step2Desc>,
    #[serde(default)]
    pub model: Vec<Step3Desc>,
    #[serde(default)]
    pub camera: Option<CameraDesc>,
}

/// The matrices a [`ViewDesc`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub xform2: Mat3,
    pub model: Mat4,
    pub projection: Option<Mat4>,
    /// `xform2` lifted to 3D, then `model`, then `projection`.
    pub mvp: Mat4,
}

pub fn parse_view_json(json_text: &str) -> Result<ViewDesc, serde_json::Error> {
    serde_json::from_str(json_text)
}

/// Parses and builds in one go.
pub fn build_view_json(json_text: &str) -> XformResult<View> {
    parse_view_json(json_text)?.build()
}

impl Step2Desc {
    pub fn to_mat3(&self) -> XformResult<Mat3> {
        Ok(match *self {
            Self::Scale { x, y } => Mat3::from_scale(x, y),
            Self::Translate { x, y } => Mat3::from_translation(x, y),
            Self::Rotate { theta } => Mat3::from_rotation(theta),
            Self::Shear { x, y } => Mat3::from_shear(x, y),
            Self::Affine { ref m } => Mat3::from_flat(m)?,
            Self::Window { w, h } => window_transform(w, h)?,
        })
    }
}

impl Step3Desc {
    pub fn to_mat4(&self) -> Mat4 {
        match *self {
            Self::Scale { x, y, z } => Mat4::from_scale(x, y, z),
            Self::Translate { x, y, z } => Mat4::from_translation(x, y, z),
            Self::Rotate { yaw, pitch, roll } => Mat4::from_rotation(yaw, pitch, roll),
        }
    }
}

impl CameraDesc {
    pub fn to_mat4(&self, projection: &Projection) -> XformResult<Mat4> {
        match *self {
            Self::Frustum { left, right, bottom, top, near, far } => {
                projection.frustum(left, right, bottom, top, near, far)
            }
            Self::Perspective { fov, aspect, near, far } => {
                projection.perspective(fov, aspect, near, far)
            }
            Self::Orthographic { zoom, width, height, near, far } => {
                projection.orthographic(zoom, width, height, near, far)
            }
        }
    }
}

impl ViewDesc {
    pub fn build(&self) -> XformResult<View> {
        let xform2 = self
            .xform2
            .iter()
            .try_fold(Mat3::identity(), |acc, step| step.to_mat3().map(|m| acc * m))?;

        let model = self
            .model
            .iter()
            .fold(Mat4::identity(), |acc, step| acc * step.to_mat4());

        let projection = self
            .camera
            .as_ref()
            .map(|camera| camera.to_mat4(&Projection::new(self.depth)))
            .transpose()?;

        let mut mvp = xform2.to_mat4() * model;
        if let Some(p) = projection {
            mvp = mvp * p;
        }

        log::trace!(
            "built view v{}: {} 2d steps, {} 3d steps, camera={}",
            self.version,
            self.xform2.len(),
            self.model.len(),
            projection.is_some()
        );

        Ok(View {
            xform2,
            model,
            projection,
            mvp,
        })
    }
}
