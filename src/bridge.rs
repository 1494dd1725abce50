use crate::error::{XformError, XformResult};
use crate::geom::{Pt2, Rect, pt2};
use crate::mat3::Mat3;
use crate::mat4::Mat4;

impl Mat3 {
    /// Embeds this 2D transform into a 4x4 matrix.
    ///
    /// The linear part stays in the top-left 2x2 block and the translation
    /// moves to row 3, so `(x, y, z, 1)` maps to `(x', y', z, 1)`.
    pub fn to_mat4(&self) -> Mat4 {
        let [[a, b], [c, d], [tx, ty]] = self.rows();
        Mat4::from_rows([
            [a, b, 0.0, 0.0],
            [c, d, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, 0.0, 1.0],
        ])
    }

    pub fn transform_pt2(&self, p: Pt2) -> Pt2 {
        let (x, y) = self.transform_point2(p.x, p.y);
        pt2(x, y)
    }

    /// Transforms both corners independently.
    ///
    /// The result is not canonicalized: rotations and negative scales can
    /// produce `min > max`. Call [`Rect::canon`] if that matters.
    pub fn transform_rect(&self, r: Rect) -> Rect {
        Rect {
            min: self.transform_pt2(r.min),
            max: self.transform_pt2(r.max),
        }
    }
}

/// Maps pixel coordinates (origin top-left, y down) to device coordinates
/// (origin center, y up, `[-1, 1]` on both axes).
pub fn window_transform(pixel_w: u32, pixel_h: u32) -> XformResult<Mat3> {
    if pixel_w == 0 || pixel_h == 0 {
        log::debug!("window_transform: zero size window {pixel_w}x{pixel_h}");
        return Err(XformError::ZeroSizeWindow {
            w: pixel_w,
            h: pixel_h,
        });
    }
    let sx = 2.0 / pixel_w as f64;
    let sy = -2.0 / pixel_h as f64;
    Ok(Mat3::from_scale(sx, sy).translate(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::pt3;
    use crate::test_helpers::{assert_pt2_near, sample_mat3s};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn window_maps_corners_to_device_corners() {
        for (w, h) in [(640, 480), (1, 1), (1920, 1080), (333, 77)] {
            let m = window_transform(w, h).unwrap();
            assert_pt2_near(m.transform_pt2(pt2(0.0, 0.0)), pt2(-1.0, 1.0), 1e-12);
            assert_pt2_near(m.transform_pt2(pt2(w as f64, h as f64)), pt2(1.0, -1.0), 1e-12);
            assert_pt2_near(
                m.transform_pt2(pt2(w as f64 / 2.0, h as f64 / 2.0)),
                pt2(0.0, 0.0),
                1e-12,
            );
        }
    }

    #[test]
    fn window_rejects_empty_window() {
        assert!(matches!(
            window_transform(0, 10),
            Err(XformError::ZeroSizeWindow { w: 0, h: 10 })
        ));
    }

    #[test]
    fn window_round_trips_through_inverse() {
        let m = window_transform(800, 600).unwrap();
        let inv = m.inverse().unwrap();
        assert_pt2_near(inv.transform_pt2(pt2(1.0, -1.0)), pt2(800.0, 600.0), 1e-9);
    }

    #[test]
    fn identity_keeps_rect() {
        let r = Rect::new(-3.0, 2.5, 10.0, 11.0);
        assert_eq!(Mat3::identity().transform_rect(r), r);
    }

    #[test]
    fn rect_corners_are_not_canonicalized() {
        let r = Rect::new(0.0, 0.0, 2.0, 1.0);
        let flipped = Mat3::from_scale(-1.0, 1.0).transform_rect(r);
        assert_eq!(flipped, Rect::new(-0.0, 0.0, -2.0, 1.0));
        assert!(flipped.min.x > flipped.max.x);
        assert_eq!(flipped.canon(), Rect::new(-2.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn rect_under_rotation_moves_each_corner() {
        let r = Rect::new(1.0, 0.0, 2.0, 0.0);
        let out = Mat3::from_rotation(FRAC_PI_2).transform_rect(r);
        assert_pt2_near(out.min, pt2(0.0, 1.0), 1e-12);
        assert_pt2_near(out.max, pt2(0.0, 2.0), 1e-12);
    }

    #[test]
    fn to_mat4_preserves_2d_semantics() {
        for m in sample_mat3s() {
            let m4 = m.to_mat4();
            for p in [pt2(0.0, 0.0), pt2(1.0, -2.0), pt2(-7.5, 3.25)] {
                let want = m.transform_pt2(p);
                let got = m4.transform_pt3(pt3(p.x, p.y, 4.0)).unwrap();
                assert_pt2_near(pt2(got.x, got.y), want, 1e-12);
                assert_eq!(got.z, 4.0);
            }
        }
    }

    #[test]
    fn to_mat4_is_a_homomorphism() {
        let a = Mat3::from_rotation(0.4).translate(1.0, 2.0);
        let b = Mat3::from_shear(0.3, 0.0).scale(2.0, -1.0).translate(-5.0, 0.5);
        let lhs = (a * b).to_mat4();
        let rhs = a.to_mat4() * b.to_mat4();
        for (l, r) in lhs.rows().iter().flatten().zip(rhs.rows().iter().flatten()) {
            assert!((l - r).abs() < 1e-12);
        }
    }

    #[test]
    fn to_mat4_of_identity_is_identity() {
        assert_eq!(Mat3::identity().to_mat4(), Mat4::identity());
    }
}
