// Library crate root.
//
// 2D affine and 4x4 homogeneous transforms for row vectors, plus camera
// projections. The crate is also built as a small CLI (src/main.rs) that
// resolves JSON view descriptions.

pub mod error;
pub mod geom;
pub mod format;
pub mod mat3;
pub mod mat4;
pub mod projection;
pub mod bridge;

#[cfg(feature = "desc")]
pub mod desc;

pub use bridge::window_transform;
pub use error::{XformError, XformResult};
pub use geom::{Pt2, Pt3, Rect, pt2, pt3};
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use projection::{DepthRange, Projection, frustum, orthographic, perspective};

#[cfg(test)]
pub mod test_helpers;
