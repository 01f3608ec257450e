use approx::{assert_abs_diff_eq, assert_relative_eq};
use slime_math::{
    algebra, conversion, vec3, vec4, Mat3d, Mat4, Mat4f, MathError, Matrix, Quatd, Vec3f, Vector,
};

#[test]
fn dot_of_integer_vectors() {
    let a = Vector::new([10, 0, 0]);
    let b = Vector::new([92, 19, 19]);
    assert_eq!(a.dot(&b), 920);
    assert_eq!(algebra::dot(&a, &b), 920);
}

#[test]
fn cross_of_integer_vectors() {
    let a = vec3(12, 4, 3);
    let b = vec3(91, 3, 24);
    assert_eq!(a.cross(&b), vec3(87, -15, -328));
}

#[test]
fn identity_plus_zero_matrix() {
    let mut identity = Mat4f::identity();
    identity[(0, 0)] = 12.0;
    let mut zero = Mat4f::zeros();
    zero[(0, 0)] = 3.0;

    let sum = identity + zero;
    assert_eq!(sum[(0, 0)], 15.0);
    for r in 0..4 {
        for c in 0..4 {
            if (r, c) != (0, 0) {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_eq!(sum[(r, c)], expected);
            }
        }
    }
}

#[test]
fn normalized_vec4_keeps_ratios() {
    let v = vec4(10.0f64, 20.0, 30.0, 40.0);
    let n = v.normalized();
    assert_relative_eq!(n.length(), 1.0, epsilon = 1.0e-12);
    for i in 1..4 {
        assert_relative_eq!(n[i] / n[0], v[i] / v[0], epsilon = 1.0e-12);
    }
}

#[test]
fn trace_of_identity() {
    assert_eq!(Mat4::identity().trace(), 4.0);
    assert_eq!(Matrix::<i32, 7, 7>::identity().trace(), 7);
}

#[test]
fn matrix_shape_errors() {
    let values = [1.0f32, 2.0, 3.0];
    assert_eq!(
        Mat4f::try_from(&values[..]),
        Err(MathError::DimensionMismatch {
            expected: 16,
            actual: 3
        })
    );
    assert_eq!(
        Vec3f::try_from(&values[..]),
        Ok(Vec3f::new([1.0, 2.0, 3.0]))
    );
    assert!(Mat4f::identity().try_get(4, 0).is_err());
}

#[test]
fn rotation_through_every_representation() {
    let axis = vec3(1.0, 2.0, 2.0) / 3.0;
    let q = Quatd::from_angle_axis(axis, 0.8);
    let v = vec3(-1.5, 0.25, 4.0);

    let m: Mat3d = q.to_matrix3();
    assert_relative_eq!(q * v, m * v, epsilon = 1.0e-12);

    let back = conversion::matrix_to_quaternion(&m);
    assert_relative_eq!(back, q, epsilon = 1.0e-12);

    let (a, angle) = back.angle_axis();
    assert_relative_eq!(a, axis, epsilon = 1.0e-12);
    assert_abs_diff_eq!(angle, 0.8, epsilon = 1.0e-12);

    let euler = q.euler_angles();
    assert_relative_eq!(Quatd::from_euler_angles(euler), q, epsilon = 1.0e-12);
}

#[test]
fn interpolation_helpers() {
    let a = vec3(0.0f32, 0.0, 0.0);
    let b = vec3(2.0f32, 4.0, 6.0);
    assert_eq!(algebra::lerp(&a, &b, 0.5f32), vec3(1.0, 2.0, 3.0));
    assert_eq!(algebra::saturate(1.5f32), 1.0);
    assert_eq!(algebra::rescale(5.0f32, 0.0, 10.0, 100.0, 200.0), 150.0);
}
