//! Conversions between rotation matrices and quaternions.
//!
//! Only the upper-left 3x3 block of a matrix takes part, so the same routines
//! serve 3x3 rotation matrices and 4x4 homogeneous transforms. Matrices with
//! fewer than 3 rows or columns are rejected at compile time.

use crate::{matrix::Matrix, quaternion::Quaternion, scalar::Real};

/// Extracts the rotation held in the upper-left 3x3 block of `m`.
///
/// The result is normalized.
pub fn matrix_to_quaternion<T: Real, const R: usize, const C: usize>(
    m: &Matrix<T, R, C>,
) -> Quaternion<T> {
    const {
        assert!(
            R >= 3 && C >= 3,
            "only matrices with at least 3 rows and 3 columns hold a rotation"
        )
    };

    let m = &m.0;
    let one = T::one();
    let two = T::from_int(2);
    let quarter = one / T::from_int(4);
    let trace = m[0][0] + m[1][1] + m[2][2] + one;

    let mut q = if trace > T::zero() {
        let s = two * trace.sqrt();
        Quaternion::new(
            (m[2][1] - m[1][2]) / s,
            (m[0][2] - m[2][0]) / s,
            (m[1][0] - m[0][1]) / s,
            quarter * s,
        )
    } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
        log::trace!("non-positive trace, extracting from the x diagonal");
        let s = two * (one + m[0][0] - m[1][1] - m[2][2]).sqrt();
        Quaternion::new(
            quarter * s,
            (m[0][1] + m[1][0]) / s,
            (m[2][0] + m[0][2]) / s,
            (m[2][1] - m[1][2]) / s,
        )
    } else if m[1][1] > m[2][2] {
        log::trace!("non-positive trace, extracting from the y diagonal");
        let s = two * (one + m[1][1] - m[0][0] - m[2][2]).sqrt();
        Quaternion::new(
            (m[0][1] + m[1][0]) / s,
            quarter * s,
            (m[1][2] + m[2][1]) / s,
            (m[0][2] - m[2][0]) / s,
        )
    } else {
        log::trace!("non-positive trace, extracting from the z diagonal");
        let s = two * (one + m[2][2] - m[0][0] - m[1][1]).sqrt();
        Quaternion::new(
            (m[0][2] + m[2][0]) / s,
            (m[1][2] + m[2][1]) / s,
            quarter * s,
            (m[1][0] - m[0][1]) / s,
        )
    };

    q.normalize();
    q
}

/// Rotation matrix entries of `q`, row-major.
fn rotation_entries<T: Real>(q: &Quaternion<T>) -> [[T; 3]; 3] {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);
    let one = T::one();
    let two = T::from_int(2);
    [
        [
            one - two * y * y - two * z * z,
            two * x * y - two * z * w,
            two * x * z + two * y * w,
        ],
        [
            two * x * y + two * z * w,
            one - two * x * x - two * z * z,
            two * z * y - two * x * w,
        ],
        [
            two * x * z - two * y * w,
            two * z * y + two * x * w,
            one - two * x * x - two * y * y,
        ],
    ]
}

/// Writes the rotation matrix of `q` into the upper-left 3x3 block of `out`.
///
/// Every other element of `out` is left untouched.
pub fn quaternion_to_matrix<T: Real, const R: usize, const C: usize>(
    out: &mut Matrix<T, R, C>,
    q: &Quaternion<T>,
) {
    const {
        assert!(
            R >= 3 && C >= 3,
            "only matrices with at least 3 rows and 3 columns hold a rotation"
        )
    };

    for (r, row) in rotation_entries(q).iter().enumerate() {
        out.0[r][..3].copy_from_slice(row);
    }
}

/// Writes the transpose of the rotation matrix of `q`, which rotates by the
/// inverse of `q`, into the upper-left 3x3 block of `out`.
pub fn quaternion_to_matrix_transposed<T: Real, const R: usize, const C: usize>(
    out: &mut Matrix<T, R, C>,
    q: &Quaternion<T>,
) {
    const {
        assert!(
            R >= 3 && C >= 3,
            "only matrices with at least 3 rows and 3 columns hold a rotation"
        )
    };

    for (r, row) in rotation_entries(q).iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            out.0[c][r] = *value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        matrix::{Mat3d, Mat4d},
        quaternion::Quatd,
        vector::{named::vec3, Vector},
    };
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    /// Quaternions `q` and `-q` describe the same rotation.
    fn same_rotation(a: &Quatd, b: &Quatd) -> bool {
        approx::relative_eq!(*a, *b, epsilon = 1.0e-9)
            || approx::relative_eq!(*a, -*b, epsilon = 1.0e-9)
    }

    #[test]
    fn identity_matrix_gives_identity_quaternion() {
        assert_eq!(matrix_to_quaternion(&Mat3d::identity()), Quatd::identity());
        assert_eq!(matrix_to_quaternion(&Mat4d::identity()), Quatd::identity());
    }

    #[test]
    fn quarter_turn_about_z() {
        let m = Mat3d::new([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let q = matrix_to_quaternion(&m);
        let expected = Quatd::from_angle_axis(vec3(0.0, 0.0, 1.0), FRAC_PI_2);
        assert_relative_eq!(q, expected, epsilon = 1.0e-12);
        assert_relative_eq!(q.to_matrix3(), m, epsilon = 1.0e-12);
    }

    #[test]
    fn half_turns_use_largest_diagonal() {
        let axes = [vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0)];
        for axis in axes {
            let q = Quatd::from_angle_axis(axis, PI);
            let back = matrix_to_quaternion(&q.to_matrix3());
            assert!(same_rotation(&back, &q), "{} vs {}", back, q);
        }
    }

    #[test]
    fn rotation_block_of_larger_matrix() {
        let q = Quatd::from_angle_axis(vec3(0.0, 1.0, 0.0), 0.5);
        let mut m = Mat4d::splat(7.0);
        quaternion_to_matrix(&mut m, &q);
        assert_eq!(m[(3, 3)], 7.0);
        assert_eq!(m[(0, 3)], 7.0);
        assert_eq!(m[(3, 0)], 7.0);
        assert!(same_rotation(&matrix_to_quaternion(&m), &q));

        let m4 = q.to_matrix4();
        assert_eq!(m4.row(3), Vector::new([0.0, 0.0, 0.0, 1.0]));
        assert_relative_eq!(Quatd::from(m4), q, epsilon = 1.0e-12);
    }

    #[test]
    fn transposed_output_is_transpose() {
        let q = Quatd::from_angle_axis(vec3(1.0, -2.0, 0.5).normalized(), 2.0);
        let mut m = Mat3d::zeros();
        quaternion_to_matrix_transposed(&mut m, &q);
        assert_relative_eq!(m, q.to_matrix3().transposed(), epsilon = 1.0e-15);
        assert_relative_eq!(m, q.inverse().to_matrix3(), epsilon = 1.0e-12);
    }

    #[test]
    fn result_is_normalized() {
        let m = Mat3d::new([[0.0, -2.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_relative_eq!(matrix_to_quaternion(&m).length(), 1.0, epsilon = 1.0e-12);
    }

    proptest! {
        #[test]
        fn quaternion_matrix_round_trip(
            x in -1.0f64..1.0, y in -1.0f64..1.0, z in -1.0f64..1.0, w in -1.0f64..1.0
        ) {
            let q = Quatd::new(x, y, z, w);
            prop_assume!(q.length_squared() > 1.0e-3);
            let q = q.normalized();
            let back = matrix_to_quaternion(&q.to_matrix3());
            prop_assert!(same_rotation(&back, &q), "{} vs {}", back, q);
        }
    }
}
