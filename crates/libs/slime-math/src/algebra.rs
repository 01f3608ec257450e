//! Free functions shared by every vector-like type.
//!
//! The functions are generic over [`VectorLike`], which only asks for a
//! component count, indexed component access and a scalar type, so vectors of
//! any arity and quaternions share one implementation of dot products,
//! lengths, normalization and interpolation.

use crate::{
    matrix::Matrix,
    scalar::{Real, Scalar},
    vector::Vector,
};
use num_traits::{Float, One, Zero};
use std::ops::{Add, AddAssign, Mul, MulAssign, SubAssign};

/// Fixed-arity container of scalars that the algebra functions operate on.
pub trait VectorLike: Copy {
    /// Scalar type of the components.
    type Scalar: Scalar;

    /// Number of components.
    const COMPONENTS: usize;

    /// Returns the component at `index`.
    fn component(&self, index: usize) -> Self::Scalar;

    /// Returns a mutable reference to the component at `index`.
    fn component_mut(&mut self, index: usize) -> &mut Self::Scalar;

    /// Creates a value with every component set to `value`.
    fn splat(value: Self::Scalar) -> Self;
}

impl<T: Scalar, const N: usize> VectorLike for Vector<T, N> {
    type Scalar = T;

    const COMPONENTS: usize = N;

    #[inline(always)]
    fn component(&self, index: usize) -> T { self.0[index] }

    #[inline(always)]
    fn component_mut(&mut self, index: usize) -> &mut T { &mut self.0[index] }

    #[inline(always)]
    fn splat(value: T) -> Self { Vector::splat(value) }
}

#[inline(always)]
fn scale<V: VectorLike>(v: &mut V, s: V::Scalar) {
    for i in 0..V::COMPONENTS {
        *v.component_mut(i) *= s;
    }
}

/// Dot product: the sum of `lhs[i] * rhs[i]`.
pub fn dot<V: VectorLike>(lhs: &V, rhs: &V) -> V::Scalar {
    let mut result = V::Scalar::zero();
    for i in 0..V::COMPONENTS {
        result += lhs.component(i) * rhs.component(i);
    }
    result
}

/// Cross product of two 3-component values.
///
/// Using it with any other arity fails to build.
pub fn cross<V: VectorLike>(lhs: &V, rhs: &V) -> V {
    const {
        assert!(
            V::COMPONENTS == 3,
            "vector type must have exactly three components"
        )
    };
    let (lx, ly, lz) = (lhs.component(0), lhs.component(1), lhs.component(2));
    let (rx, ry, rz) = (rhs.component(0), rhs.component(1), rhs.component(2));
    let mut result = *lhs;
    *result.component_mut(0) = ly * rz - ry * lz;
    *result.component_mut(1) = rx * lz - lx * rz;
    *result.component_mut(2) = lx * ry - rx * ly;
    result
}

/// Squared Euclidean length.
#[inline]
pub fn length_squared<V: VectorLike>(v: &V) -> V::Scalar { dot(v, v) }

/// Euclidean length.
#[inline]
pub fn length<V>(v: &V) -> V::Scalar
where
    V: VectorLike,
    V::Scalar: Real,
{
    length_squared(v).sqrt()
}

/// Clamps a cosine into `[-1, 1]` before taking its `acos`, so rounding on
/// (anti)parallel inputs can't produce NaN.
#[inline]
fn acos_clamped<T: Real>(cosine: T) -> T { clamp(cosine, -T::one(), T::one()).acos() }

/// Angle in radians between two vectors of any length.
///
/// The cosine is clamped to `[-1, 1]`, so parallel vectors give `0` rather
/// than NaN.
pub fn angle<V>(lhs: &V, rhs: &V) -> V::Scalar
where
    V: VectorLike,
    V::Scalar: Real,
{
    acos_clamped(dot(lhs, rhs) / (length(lhs) * length(rhs)))
}

/// Angle in radians between two vectors that are already normalized.
///
/// No normalization happens here; passing non-unit vectors gives a
/// meaningless result.
pub fn angle_normalized<V>(lhs: &V, rhs: &V) -> V::Scalar
where
    V: VectorLike,
    V::Scalar: Real,
{
    acos_clamped(dot(lhs, rhs))
}

fn difference<V: VectorLike>(from: &V, to: &V) -> V {
    let mut result = *to;
    for i in 0..V::COMPONENTS {
        *result.component_mut(i) -= from.component(i);
    }
    result
}

/// Squared distance, `length_squared(rhs - lhs)`.
pub fn distance_squared<V: VectorLike>(lhs: &V, rhs: &V) -> V::Scalar {
    length_squared(&difference(lhs, rhs))
}

/// Distance, `length(rhs - lhs)`.
pub fn distance<V>(lhs: &V, rhs: &V) -> V::Scalar
where
    V: VectorLike,
    V::Scalar: Real,
{
    length(&difference(lhs, rhs))
}

/// Reflects `incident` about the plane with the given `normal`:
/// `incident - 2 * dot(normal, incident) * normal`.
pub fn reflect<V: VectorLike>(incident: &V, normal: &V) -> V {
    let d = dot(normal, incident) * V::Scalar::from_int(2);
    let mut result = *incident;
    for i in 0..V::COMPONENTS {
        *result.component_mut(i) -= d * normal.component(i);
    }
    result
}

/// Normalizes `v` in place.
///
/// Zero vectors are left unchanged, as are vectors whose squared length is
/// exactly one.
pub fn normalize<V>(v: &mut V)
where
    V: VectorLike,
    V::Scalar: Real,
{
    let len_sq = length_squared(v);
    if len_sq != V::Scalar::zero() && len_sq != V::Scalar::one() {
        scale(v, len_sq.sqrt().recip());
    }
}

/// Rescales `v` in place so that its length becomes `length`.
///
/// Zero vectors are left unchanged.
pub fn resize<V>(v: &mut V, length: V::Scalar)
where
    V: VectorLike,
    V::Scalar: Real,
{
    let len_sq = length_squared(v);
    if len_sq != V::Scalar::zero() {
        scale(v, length / len_sq.sqrt());
    }
}

/// Linear interpolation `(b - a) * t + a`, written into `out`.
pub fn lerp_into<T, I>(out: &mut T, a: &T, b: &T, t: I)
where
    T: Copy + SubAssign + MulAssign<I> + AddAssign,
{
    *out = *b;
    *out -= *a;
    *out *= t;
    *out += *a;
}

/// Linear interpolation `(b - a) * t + a`.
pub fn lerp<T, I>(a: &T, b: &T, t: I) -> T
where
    T: Copy + SubAssign + MulAssign<I> + AddAssign,
{
    let mut x = *a;
    lerp_into(&mut x, a, b, t);
    x
}

/// Weighted sum `a * scale0 + b * scale1`.
#[inline]
pub fn mix<T, I>(a: T, b: T, scale0: I, scale1: I) -> T
where
    T: Mul<I, Output = T> + Add<Output = T>,
{
    a * scale0 + b * scale1
}

/// Spherical linear interpolation between two unit 4-tuples (quaternions).
///
/// Takes the shortest path: when the endpoints point into opposite
/// hemispheres the weight of `to` is negated. When `from` and `to` are closer
/// than the machine epsilon the weights fall back to the linear `1 - t` and
/// `t`, as `sin(omega)` would vanish.
pub fn slerp<V>(from: &V, to: &V, t: V::Scalar) -> V
where
    V: VectorLike + Mul<V::Scalar, Output = V> + Add<Output = V>,
    V::Scalar: Real,
{
    let one = V::Scalar::one();
    let mut cosom = dot(from, to);
    let mut scale1 = one;
    if cosom < V::Scalar::zero() {
        cosom = -cosom;
        scale1 = -one;
    }

    let scale0 = if one - cosom > V::Scalar::epsilon() {
        let omega = cosom.acos();
        let sinom = omega.sin();
        scale1 = scale1 * ((t * omega).sin() / sinom);
        ((one - t) * omega).sin() / sinom
    } else {
        log::trace!("slerp endpoints nearly parallel, falling back to linear weights");
        scale1 = scale1 * t;
        one - t
    };

    mix(*from, *to, scale0, scale1)
}

/// Clamps `x` into `[lower, upper]`, both bounds inclusive.
#[inline]
pub fn clamp<T: PartialOrd>(x: T, lower: T, upper: T) -> T {
    if x <= lower {
        lower
    } else if x >= upper {
        upper
    } else {
        x
    }
}

/// Clamps `x` into `[0, 1]`.
#[inline]
pub fn saturate<T: Scalar>(x: T) -> T { clamp(x, T::zero(), T::one()) }

/// Hermite easing `x^2 (3 - 2x)`. Expects `x` in `[0, 1]`, no clamping.
#[inline]
pub fn smooth_step<T: Scalar>(x: T) -> T { x * x * (T::from_int(3) - x * T::from_int(2)) }

/// Quintic easing `x^3 (6x^2 - 15x + 10)`. Expects `x` in `[0, 1]`, no
/// clamping.
#[inline]
pub fn smoother_step<T: Scalar>(x: T) -> T {
    x * x * x * (x * (x * T::from_int(6) - T::from_int(15)) + T::from_int(10))
}

/// Linearly remaps `t` from `[lower0, upper0]` to `[lower1, upper1]`.
pub fn rescale<T: Scalar>(t: T, lower0: T, upper0: T, lower1: T, upper1: T) -> T {
    let mut x = t;
    x -= lower0;
    x /= upper0 - lower0;
    x *= upper1 - lower1;
    x += lower1;
    x
}

/// Element-wise reciprocal `1 / x`.
pub trait Reciprocal {
    /// Returns `1 / self`, element-wise for containers.
    fn reciprocal(&self) -> Self;
}

macro_rules! impl_reciprocal_float {
    ($($t:ty),*) => {
        $(
            impl Reciprocal for $t {
                #[inline(always)]
                fn reciprocal(&self) -> Self { 1.0 / *self }
            }
        )*
    };
}

impl_reciprocal_float!(f32, f64);

impl<T: Scalar, const N: usize> Reciprocal for Vector<T, N> {
    fn reciprocal(&self) -> Self { self.map(|x| T::one() / x) }
}

impl<T: Scalar, const R: usize, const C: usize> Reciprocal for Matrix<T, R, C> {
    fn reciprocal(&self) -> Self { self.map(|x| T::one() / x) }
}

/// Returns `1 / x`, element-wise for vectors and matrices.
#[inline]
pub fn reciprocal<T: Reciprocal>(x: &T) -> T { x.reciprocal() }

/// Row vector times matrix: `result[c]` is the sum over `r` of
/// `rhs(r, c) * lhs[r]`.
impl<T: Scalar, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        let mut result = Vector::<T, C>::zeros();
        for c in 0..C {
            for r in 0..R {
                result.0[c] += rhs.0[r][c] * self.0[r];
            }
        }
        result
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<&Matrix<T, R, C>> for &Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: &Matrix<T, R, C>) -> Self::Output { *self * *rhs }
}

/// Matrix times column vector: `result[r]` is the sum over `c` of
/// `lhs(r, c) * rhs[c]`.
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        let mut result = Vector::<T, R>::zeros();
        for r in 0..R {
            for c in 0..C {
                result.0[r] += self.0[r][c] * rhs.0[c];
            }
        }
        result
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<&Vector<T, C>> for &Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: &Vector<T, C>) -> Self::Output { *self * *rhs }
}
