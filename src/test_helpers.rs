use crate::geom::{Pt2, Pt3};
use crate::mat3::Mat3;
use crate::mat4::Mat4;

/// A spread of invertible affine matrices covering each builder.
pub fn sample_mat3s() -> Vec<Mat3> {
    vec![
        Mat3::identity(),
        Mat3::from_scale(2.0, 3.0),
        Mat3::from_translation(5.0, -5.0),
        Mat3::from_rotation(0.7),
        Mat3::from_shear(0.5, -0.25),
        Mat3::from_scale(2.0, 3.0).translate(5.0, -5.0),
        Mat3::from_translation(-1.0, 4.0).rotate(2.1).scale(0.5, 8.0),
        Mat3::from_affine6(1.5, -0.5, 0.25, 2.0, 100.0, -40.0),
    ]
}

pub fn assert_mat3_near(got: &Mat3, want: &Mat3, eps: f64) {
    let pairs = got.rows().into_iter().flatten().zip(want.rows().into_iter().flatten());
    for (i, (g, w)) in pairs.enumerate() {
        assert!(
            (g - w).abs() <= eps,
            "entry {i}: got {g}, want {w}\ngot:\n{got}\nwant:\n{want}"
        );
    }
}

pub fn assert_mat4_near(got: &Mat4, want: &Mat4, eps: f64) {
    let pairs = got.rows().into_iter().flatten().zip(want.rows().into_iter().flatten());
    for (i, (g, w)) in pairs.enumerate() {
        assert!(
            (g - w).abs() <= eps,
            "entry {i}: got {g}, want {w}\ngot:\n{got}\nwant:\n{want}"
        );
    }
}

pub fn assert_pt2_near(got: Pt2, want: Pt2, eps: f64) {
    assert!(
        (got.x - want.x).abs() <= eps && (got.y - want.y).abs() <= eps,
        "got {got:?}, want {want:?}"
    );
}

pub fn assert_pt3_near(got: Pt3, want: Pt3, eps: f64) {
    assert!(
        (got.x - want.x).abs() <= eps
            && (got.y - want.y).abs() <= eps
            && (got.z - want.z).abs() <= eps,
        "got {got:?}, want {want:?}"
    );
}
