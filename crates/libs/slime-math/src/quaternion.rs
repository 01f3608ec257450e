//! Rotation quaternions.

use crate::{
    algebra::{self, VectorLike},
    conversion,
    matrix::Matrix,
    scalar::{Fp, NumericCast, Real},
    vector::{named::vec3, Vector},
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::{
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Quaternion `(x, y, z, w)` with `w` the scalar part.
///
/// Only unit quaternions represent rotations, but the component-wise
/// arithmetic is free to leave that set; call [`Quaternion::normalize`] when
/// a rotation is needed. The default value is the identity rotation
/// `(0, 0, 0, 1)`.
///
/// Components are also reachable by index: 0 = x, 1 = y, 2 = z, 3 = w.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    /// First component of the vector part.
    pub x: T,
    /// Second component of the vector part.
    pub y: T,
    /// Third component of the vector part.
    pub z: T,
    /// Scalar part.
    pub w: T,
}

/// Quaternion of the default floating point type.
pub type Quat = Quaternion<Fp>;
/// Quaternion of `f32`.
pub type Quatf = Quaternion<f32>;
/// Quaternion of `f64`.
pub type Quatd = Quaternion<f64>;

impl<T: Real> Quaternion<T> {
    /// Number of components.
    pub const COMPONENTS: usize = 4;

    /// Creates a quaternion from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self { Self { x, y, z, w } }

    /// The identity rotation `(0, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self { Self::new(T::zero(), T::zero(), T::zero(), T::one()) }

    /// Resets to the identity rotation.
    pub fn load_identity(&mut self) { *self = Self::identity(); }

    /// Creates a quaternion from a `(x, y, z, w)` vector.
    #[inline]
    pub fn from_vector(v: Vector<T, 4>) -> Self { Self::new(v[0], v[1], v[2], v[3]) }

    /// Returns the components as a `(x, y, z, w)` vector.
    #[inline]
    pub fn as_vector(&self) -> Vector<T, 4> { Vector::new([self.x, self.y, self.z, self.w]) }

    /// Returns the vector part `(x, y, z)`.
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3> { vec3(self.x, self.y, self.z) }

    /// Creates a quaternion from the rotation held in the upper-left 3x3
    /// block of `matrix`.
    pub fn from_matrix<const R: usize, const C: usize>(matrix: &Matrix<T, R, C>) -> Self {
        conversion::matrix_to_quaternion(matrix)
    }

    /// Creates a rotation from roll (`x`), pitch (`y`) and yaw (`z`) angles in
    /// radians.
    pub fn from_euler_angles(angles: Vector<T, 3>) -> Self {
        let mut q = Self::identity();
        q.set_euler_angles(angles);
        q
    }

    /// Creates a rotation of `angle` radians about `axis`.
    pub fn from_angle_axis(axis: Vector<T, 3>, angle: T) -> Self {
        let mut q = Self::identity();
        q.set_angle_axis(axis, angle);
        q
    }

    /// Dot product treating both quaternions as 4-component vectors.
    #[inline]
    pub fn dot(&self, other: &Self) -> T { algebra::dot(self, other) }

    /// Squared length.
    #[inline]
    pub fn length_squared(&self) -> T { algebra::length_squared(self) }

    /// Length.
    #[inline]
    pub fn length(&self) -> T { algebra::length(self) }

    /// Normalizes in place; a zero quaternion is left unchanged.
    #[inline]
    pub fn normalize(&mut self) { algebra::normalize(self) }

    /// Returns a normalized copy.
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Inverts in place by negating the vector part.
    ///
    /// Only the true inverse when the quaternion is normalized.
    pub fn make_inverse(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Returns the inverse, `(-x, -y, -z, w)`.
    ///
    /// Only the true inverse when the quaternion is normalized.
    pub fn inverse(&self) -> Self { Self::new(-self.x, -self.y, -self.z, self.w) }

    /// Spherical linear interpolation from `from` to `to`.
    pub fn slerp(from: &Self, to: &Self, t: T) -> Self { algebra::slerp(from, to, t) }

    /// Sets the rotation from roll (`x`), pitch (`y`) and yaw (`z`) angles in
    /// radians. The result is normalized.
    pub fn set_euler_angles(&mut self, angles: Vector<T, 3>) {
        let two = T::from_int(2);
        let (sr, cr) = (angles.x() / two).sin_cos();
        let (sp, cp) = (angles.y() / two).sin_cos();
        let (sy, cy) = (angles.z() / two).sin_cos();

        let cpcy = cp * cy;
        let spsy = sp * sy;
        let cpsy = cp * sy;
        let spcy = sp * cy;

        self.x = sr * cpcy - cr * spsy;
        self.y = cr * spcy + sr * cpsy;
        self.z = cr * cpsy - sr * spcy;
        self.w = cr * cpcy + sr * spsy;

        self.normalize();
    }

    /// Returns the roll (`x`), pitch (`y`) and yaw (`z`) angles in radians.
    ///
    /// The argument of the pitch `asin` is clamped to `[-1, 1]`.
    pub fn euler_angles(&self) -> Vector<T, 3> {
        let two = T::from_int(2);
        let xx = self.x * self.x;
        let yy = self.y * self.y;
        let zz = self.z * self.z;
        let ww = self.w * self.w;

        let roll = (two * (self.y * self.z + self.x * self.w)).atan2(-xx - yy + zz + ww);
        let pitch = algebra::clamp(
            two * (self.y * self.w - self.x * self.z),
            -T::one(),
            T::one(),
        )
        .asin();
        let yaw = (two * (self.x * self.y + self.z * self.w)).atan2(xx - yy - zz + ww);
        vec3(roll, pitch, yaw)
    }

    /// Sets a rotation of `angle` radians about `axis`:
    /// `(axis * sin(angle / 2), cos(angle / 2))`.
    ///
    /// `axis` is expected to be normalized.
    pub fn set_angle_axis(&mut self, axis: Vector<T, 3>, angle: T) {
        let (sine, cosine) = (angle / T::from_int(2)).sin_cos();
        self.x = sine * axis.x();
        self.y = sine * axis.y();
        self.z = sine * axis.z();
        self.w = cosine;
    }

    /// Returns the rotation axis and angle in radians.
    ///
    /// Falls back to the axis `(0, 1, 0)` with angle zero when the vector part
    /// vanishes or `w` lies outside `[-1, 1]`.
    pub fn angle_axis(&self) -> (Vector<T, 3>, T) {
        let scale = self.xyz().length();
        if scale.abs() <= T::epsilon() || self.w > T::one() || self.w < -T::one() {
            log::trace!("degenerate quaternion {}, using the default angle-axis", self);
            (vec3(T::zero(), T::one(), T::zero()), T::zero())
        } else {
            let inv_scale = scale.recip();
            (
                self.xyz() * inv_scale,
                T::from_int(2) * self.w.acos(),
            )
        }
    }

    /// Converts to a 3x3 rotation matrix.
    pub fn to_matrix3(&self) -> Matrix<T, 3, 3> {
        let mut m = Matrix::identity();
        conversion::quaternion_to_matrix(&mut m, self);
        m
    }

    /// Converts to the transpose of the 3x3 rotation matrix, which is the
    /// matrix of the inverse rotation.
    pub fn to_matrix3_transposed(&self) -> Matrix<T, 3, 3> {
        let mut m = Matrix::identity();
        conversion::quaternion_to_matrix_transposed(&mut m, self);
        m
    }

    /// Converts to a 4x4 homogeneous rotation matrix.
    pub fn to_matrix4(&self) -> Matrix<T, 4, 4> {
        let mut m = Matrix::identity();
        conversion::quaternion_to_matrix(&mut m, self);
        m
    }

    /// Rotates a 3-component vector.
    ///
    /// Uses the double cross product form `v + 2w (q x v) + 2 q x (q x v)`
    /// where `q` is the vector part.
    pub fn rotate(&self, v: Vector<T, 3>) -> Vector<T, 3> {
        let two = T::from_int(2);
        let qvec = self.xyz();
        let mut uv = qvec.cross(&v);
        let mut uuv = qvec.cross(&uv);
        uv *= two * self.w;
        uuv *= two;
        uv += uuv;
        uv += v;
        uv
    }

    /// Converts every component to another floating point type.
    pub fn cast<C: Real>(&self) -> Quaternion<C>
    where
        T: NumericCast<C>,
    {
        Quaternion::new(self.x.cast(), self.y.cast(), self.z.cast(), self.w.cast())
    }
}

impl<T: Real> Default for Quaternion<T> {
    fn default() -> Self { Self::identity() }
}

impl<T: Real, const R: usize, const C: usize> From<Matrix<T, R, C>> for Quaternion<T> {
    fn from(m: Matrix<T, R, C>) -> Self { Self::from_matrix(&m) }
}

impl<T: Real> From<Vector<T, 4>> for Quaternion<T> {
    fn from(v: Vector<T, 4>) -> Self { Self::from_vector(v) }
}

impl<T: Real> From<Quaternion<T>> for Vector<T, 4> {
    fn from(q: Quaternion<T>) -> Self { q.as_vector() }
}

impl<T> Index<usize> for Quaternion<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("quaternion component index {} out of range", index),
        }
    }
}

impl<T> IndexMut<usize> for Quaternion<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("quaternion component index {} out of range", index),
        }
    }
}

impl<T: Real> VectorLike for Quaternion<T> {
    type Scalar = T;

    const COMPONENTS: usize = 4;

    #[inline(always)]
    fn component(&self, index: usize) -> T { self[index] }

    #[inline(always)]
    fn component_mut(&mut self, index: usize) -> &mut T { &mut self[index] }

    #[inline(always)]
    fn splat(value: T) -> Self { Self::new(value, value, value, value) }
}

impl<T: Real> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl<T: Real> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

/// Composes rotations: `self = self * rhs`.
impl<T: Real> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
}

impl<T: Real> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
    }
}

impl<T: Real> Add for Quaternion<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Real> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

/// Quaternion product. Rotating by the result applies `self` first, then
/// `rhs`.
impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (l, r) = (self, rhs);
        Self::new(
            l.x * r.w + l.w * r.x + l.z * r.y - l.y * r.z,
            l.y * r.w - l.z * r.x + l.w * r.y + l.x * r.z,
            l.z * r.w + l.y * r.x - l.x * r.y + l.w * r.z,
            l.w * r.w - l.x * r.x - l.y * r.y - l.z * r.z,
        )
    }
}

impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Real> Mul<Vector<T, 3>> for Quaternion<T> {
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Vector<T, 3>) -> Self::Output { self.rotate(rhs) }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self::Output { Self::new(-self.x, -self.y, -self.z, -self.w) }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;

                #[inline]
                fn mul(self, rhs: Quaternion<$t>) -> Self::Output { rhs * self }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

/// Prints the components as `[x] [y] [z] [w] `.
impl<T: Display> Display for Quaternion<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] [{}] [{}] [{}] ", self.x, self.y, self.z, self.w)
    }
}

impl<T> AbsDiffEq for Quaternion<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl<T> RelativeEq for Quaternion<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quaternion<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
            && self.w.ulps_eq(&other.w, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn quaternion_default_is_identity() {
        let q = Quatd::default();
        assert_eq!(q, Quatd::new(0.0, 0.0, 0.0, 1.0));

        let mut p = Quatd::new(1.0, 2.0, 3.0, 4.0);
        p.load_identity();
        assert_eq!(p, q);
    }

    #[test]
    fn quaternion_indexing() {
        let mut q = Quatf::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q[0], q[1], q[2], q[3]), (1.0, 2.0, 3.0, 4.0));
        q[3] = 0.5;
        assert_eq!(q.w, 0.5);
    }

    #[test]
    #[should_panic]
    fn quaternion_index_out_of_range() {
        let q = Quatf::identity();
        let _value = q[Quatf::COMPONENTS];
    }

    #[test]
    fn quaternion_vector_view() {
        let q = Quatf::new(1.0, 2.0, 3.0, 4.0);
        let v = q.as_vector();
        assert_eq!(v, Vector::new([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(Quatf::from_vector(v), q);
        assert_eq!(Quatf::from(v), q);
        assert_eq!(q.xyz(), vec3(1.0, 2.0, 3.0));
        assert_eq!(q.dot(&Quatf::identity()), 4.0);
    }

    #[test]
    fn quaternion_componentwise_ops() {
        let a = Quatf::new(1.0, 2.0, 3.0, 4.0);
        let b = Quatf::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quatf::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quatf::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a * 2.0, Quatf::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Quatf::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn hamilton_product_composes_rotations() {
        let z = vec3(0.0, 0.0, 1.0);
        let q45 = Quatd::from_angle_axis(z, FRAC_PI_4);
        let q90 = Quatd::from_angle_axis(z, FRAC_PI_2);
        assert_relative_eq!(q45 * q45, q90, epsilon = 1.0e-12);

        let mut q = q45;
        q *= q45;
        assert_relative_eq!(q, q90, epsilon = 1.0e-12);

        let i = Quatd::new(1.0, 0.0, 0.0, 0.0);
        let j = Quatd::new(0.0, 1.0, 0.0, 0.0);
        let k = Quatd::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, -k);
        assert_eq!(j * i, k);
        assert_eq!(i * i, Quatd::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn product_applies_left_rotation_first() {
        let a = Quatd::from_angle_axis(vec3(0.0, 0.0, 1.0), FRAC_PI_2);
        let b = Quatd::from_angle_axis(vec3(1.0, 0.0, 0.0), FRAC_PI_2);
        let v = vec3(1.0, 0.0, 0.0);
        // a takes x to y, b then takes y to z.
        assert_relative_eq!((a * b) * v, vec3(0.0, 0.0, 1.0), epsilon = 1.0e-12);
        assert_relative_eq!((a * b) * v, b * (a * v), epsilon = 1.0e-12);
    }

    #[test]
    fn inverse_undoes_rotation() {
        let q = Quatd::from_angle_axis(vec3(1.0, 2.0, 3.0).normalized(), 0.7);
        assert_relative_eq!(q * q.inverse(), Quatd::identity(), epsilon = 1.0e-12);

        let mut p = q;
        p.make_inverse();
        assert_eq!(p, q.inverse());
    }

    #[test]
    fn rotate_vector() {
        let q = Quatd::from_angle_axis(vec3(0.0, 0.0, 1.0), FRAC_PI_2);
        assert_relative_eq!(q * vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), epsilon = 1.0e-12);
        assert_relative_eq!(q * vec3(0.0, 1.0, 0.0), vec3(-1.0, 0.0, 0.0), epsilon = 1.0e-12);
        assert_relative_eq!(q * vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 5.0), epsilon = 1.0e-12);
    }

    #[test]
    fn rotate_agrees_with_matrix() {
        let q = Quatd::from_angle_axis(vec3(2.0, -1.0, 0.5).normalized(), 1.3);
        let v = vec3(0.3, -4.0, 2.2);
        assert_relative_eq!(q * v, q.to_matrix3() * v, epsilon = 1.0e-12);
        assert_relative_eq!(v * q.to_matrix3_transposed(), q.to_matrix3() * v, epsilon = 1.0e-12);
    }

    #[test]
    fn angle_axis_round_trip() {
        let axis = vec3(1.0, 1.0, 0.0).normalized();
        let q = Quatd::from_angle_axis(axis, 1.2);
        let (a, angle) = q.angle_axis();
        assert_relative_eq!(a, axis, epsilon = 1.0e-12);
        assert_relative_eq!(angle, 1.2, epsilon = 1.0e-12);
    }

    #[test]
    fn angle_axis_degenerate_fallback() {
        let (axis, angle) = Quatd::identity().angle_axis();
        assert_eq!(axis, vec3(0.0, 1.0, 0.0));
        assert_eq!(angle, 0.0);

        let (axis, angle) = Quatd::new(0.1, 0.0, 0.0, 1.5).angle_axis();
        assert_eq!(axis, vec3(0.0, 1.0, 0.0));
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn euler_angles_round_trip() {
        let angles = vec3(0.3, -0.4, 1.1);
        let q = Quatd::from_euler_angles(angles);
        assert_relative_eq!(q.length(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(q.euler_angles(), angles, epsilon = 1.0e-12);
    }

    #[test]
    fn euler_angles_single_axis() {
        let roll = Quatd::from_euler_angles(vec3(FRAC_PI_2, 0.0, 0.0));
        assert_relative_eq!(
            roll,
            Quatd::from_angle_axis(vec3(1.0, 0.0, 0.0), FRAC_PI_2),
            epsilon = 1.0e-12
        );
        let yaw = Quatd::from_euler_angles(vec3(0.0, 0.0, PI / 3.0));
        assert_relative_eq!(
            yaw,
            Quatd::from_angle_axis(vec3(0.0, 0.0, 1.0), PI / 3.0),
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn euler_pitch_is_clamped() {
        // Slightly denormalized gimbal-lock quaternion, asin argument > 1.
        let q = Quatd::new(0.0, FRAC_PI_4.sin() * 1.001, 0.0, FRAC_PI_4.cos() * 1.001);
        let angles = q.euler_angles();
        assert!(!angles.y().is_nan());
        assert_relative_eq!(angles.y(), FRAC_PI_2);
    }

    #[test]
    fn quaternion_slerp() {
        let from = Quatd::identity();
        let to = Quatd::from_angle_axis(vec3(0.0, 1.0, 0.0), FRAC_PI_2);
        let mid = Quatd::slerp(&from, &to, 0.5);
        assert_relative_eq!(
            mid,
            Quatd::from_angle_axis(vec3(0.0, 1.0, 0.0), FRAC_PI_4),
            epsilon = 1.0e-12
        );
        assert_relative_eq!(Quatd::slerp(&from, &to, 0.0), from, epsilon = 1.0e-12);
        assert_relative_eq!(Quatd::slerp(&from, &to, 1.0), to, epsilon = 1.0e-12);
    }

    #[test]
    fn quaternion_normalize_and_cast() {
        let q = Quatf::new(0.0, 0.0, 3.0, 4.0).normalized();
        assert_abs_diff_eq!(q, Quatf::new(0.0, 0.0, 0.6, 0.8), epsilon = 1.0e-6);
        let d: Quatd = q.cast();
        assert_abs_diff_eq!(d.length(), 1.0, epsilon = 1.0e-6);

        let mut zero = Quatf::new(0.0, 0.0, 0.0, 0.0);
        zero.normalize();
        assert_eq!(zero, Quatf::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn quaternion_display() {
        assert_eq!(format!("{}", Quatf::identity()), "[0] [0] [0] [1] ");
    }

    proptest! {
        #[test]
        fn slerp_fixed_point(
            x in -1.0f64..1.0, y in -1.0f64..1.0, z in -1.0f64..1.0, w in -1.0f64..1.0,
            t in 0.0f64..=1.0
        ) {
            let q = Quatd::new(x, y, z, w);
            prop_assume!(q.length_squared() > 1.0e-6);
            let q = q.normalized();
            let r = Quatd::slerp(&q, &q, t);
            prop_assert!(approx::abs_diff_eq!(r, q, epsilon = 1.0e-12));
        }

        #[test]
        fn rotation_preserves_length(
            angle in -PI..PI,
            ax in -1.0f64..1.0, ay in -1.0f64..1.0, az in -1.0f64..1.0,
            vx in -10.0f64..10.0, vy in -10.0f64..10.0, vz in -10.0f64..10.0
        ) {
            let axis = vec3(ax, ay, az);
            prop_assume!(axis.length_squared() > 1.0e-6);
            let q = Quatd::from_angle_axis(axis.normalized(), angle);
            let v = vec3(vx, vy, vz);
            prop_assert!(approx::relative_eq!((q * v).length(), v.length(), epsilon = 1.0e-9));
        }
    }
}
