//! Fixed-length numeric vectors.
//!
//! [`Vector<T, N>`] is a single array of `N` scalars; every operation is
//! written once for any `N`. The arity-specific conveniences (named
//! components, construction from lower arities, length and normalization) live
//! in [`named`] and are plain inherent methods on `Vector<T, 2>`,
//! `Vector<T, 3>` and `Vector<T, 4>`.

use crate::{
    error::MathError,
    scalar::{NumericCast, Scalar},
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

pub mod named;

/// Ordered sequence of exactly `N` scalars.
///
/// Value type: copying a vector copies its components. `N` must be at least
/// one, which is checked when a vector is first constructed for a given `N`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const COMPONENTS: usize = {
        assert!(N > 0, "vectors must have at least one component");
        N
    };

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        let _ = Self::COMPONENTS;
        Self(data)
    }

    /// Returns the number of components.
    #[inline(always)]
    pub const fn len(&self) -> usize { N }

    /// Always `false`, a vector has at least one component.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool { false }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Returns a raw pointer to the first component.
    #[inline]
    pub fn as_ptr(&self) -> *const T { self.0.as_ptr() }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Returns a mutable iterator over the components.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.0.iter_mut() }

    /// Returns the component at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> { self.0.get(index) }

    /// Returns the mutable component at `index`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.0.get_mut(index) }

    /// Returns the component at `index`.
    pub fn try_get(&self, index: usize) -> Result<&T, MathError> {
        self.0
            .get(index)
            .ok_or(MathError::IndexOutOfBounds { index, len: N })
    }

    /// Consumes the vector and returns its components.
    #[inline]
    pub fn into_array(self) -> [T; N] { self.0 }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a vector with every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self { Self::new([value; N]) }

    /// Creates a vector with all components set to zero.
    #[inline]
    pub fn zeros() -> Self { Self::splat(T::zero()) }

    /// Creates a vector with all components set to one.
    #[inline]
    pub fn ones() -> Self { Self::splat(T::one()) }

    /// Converts every component to another scalar type, as a primitive `as`
    /// cast would.
    pub fn cast<C>(&self) -> Vector<C, N>
    where
        T: NumericCast<C>,
    {
        Vector::new(self.0.map(|x| x.cast()))
    }

    /// Applies `f` to every component.
    pub fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector::new(self.0.map(f))
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::zeros() }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self { Self::new(data) }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self { v.0 }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = MathError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let data = <[T; N]>::try_from(slice).map_err(|_| MathError::DimensionMismatch {
            expected: N,
            actual: slice.len(),
        })?;
        Ok(Self::new(data))
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

macro_rules! impl_vector_assign_ops {
    ($($trait:ident, $op:ident);*) => {
        $(
            impl<T: Scalar, const N: usize> $trait for Vector<T, N> {
                #[inline]
                fn $op(&mut self, rhs: Self) {
                    for (a, b) in self.0.iter_mut().zip(rhs.0) {
                        a.$op(b);
                    }
                }
            }

            impl<T: Scalar, const N: usize> $trait<&Vector<T, N>> for Vector<T, N> {
                #[inline]
                fn $op(&mut self, rhs: &Vector<T, N>) { self.$op(*rhs) }
            }
        )*
    };
}

impl_vector_assign_ops! {
    AddAssign, add_assign;
    SubAssign, sub_assign;
    MulAssign, mul_assign;
    DivAssign, div_assign
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for a in self.0.iter_mut() {
            *a *= rhs;
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for a in self.0.iter_mut() {
            *a /= rhs;
        }
    }
}

// Binary operators are expressed through the compound forms on a copy of the
// left operand.
macro_rules! impl_vector_binary_ops {
    ($($trait:ident, $op:ident, $op_assign:ident);*) => {
        $(
            impl<T: Scalar, const N: usize> $trait for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(mut self, rhs: Vector<T, N>) -> Self::Output {
                    self.$op_assign(rhs);
                    self
                }
            }

            impl<T: Scalar, const N: usize> $trait<&Vector<T, N>> for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(mut self, rhs: &Vector<T, N>) -> Self::Output {
                    self.$op_assign(*rhs);
                    self
                }
            }

            impl<T: Scalar, const N: usize> $trait<Vector<T, N>> for &Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: Vector<T, N>) -> Self::Output {
                    let mut result = *self;
                    result.$op_assign(rhs);
                    result
                }
            }

            impl<T: Scalar, const N: usize> $trait<&Vector<T, N>> for &Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: &Vector<T, N>) -> Self::Output {
                    let mut result = *self;
                    result.$op_assign(*rhs);
                    result
                }
            }
        )*
    };
}

impl_vector_binary_ops! {
    Add, add, add_assign;
    Sub, sub, sub_assign;
    Mul, mul, mul_assign;
    Div, div, div_assign
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Mul<T> for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output { *self * rhs }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> Div<T> for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output { *self / rhs }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Self::Output { self.map(|x| -x) }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Self::Output { -*self }
}

// Scalar on the left-hand side. `s * v` scales, `s / v` broadcasts `s` and
// divides component-wise.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Self::Output { rhs * self }
            }

            impl<const N: usize> Mul<&Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: &Vector<$t, N>) -> Self::Output { *rhs * self }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn div(self, rhs: Vector<$t, N>) -> Self::Output { Vector::splat(self) / rhs }
            }
        )*
    };
}

impl_scalar_lhs_ops!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl<T: Debug, const N: usize> Debug for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Vector").field(&self.0).finish()
    }
}

/// Prints every component in brackets followed by a space, e.g. `[1] [2] [3] `.
///
/// Debugging aid only, not meant to be parsed back.
impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for x in &self.0 {
            write!(f, "[{}] ", x)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
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
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_construction() {
        let v = Vector::<f32, 5>::splat(2.5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|&x| x == 2.5));

        let z = Vector::<i32, 3>::default();
        assert_eq!(z, Vector::new([0, 0, 0]));

        let a: Vector<u8, 4> = [1, 2, 3, 4].into();
        assert_eq!(a.into_array(), [1, 2, 3, 4]);
    }

    #[test]
    fn vector_try_from_slice() {
        let data = [1.0f64, 2.0, 3.0];
        let v = Vector::<f64, 3>::try_from(&data[..]).unwrap();
        assert_eq!(v[2], 3.0);

        let err = Vector::<f64, 4>::try_from(&data[..]).unwrap_err();
        assert_eq!(
            err,
            MathError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn vector_indexing() {
        let mut v = Vector::new([1, 2, 3, 4, 5, 6]);
        v[3] = 40;
        assert_eq!(v[3], 40);
        assert_eq!(v.get(6), None);
        assert_eq!(
            v.try_get(7),
            Err(MathError::IndexOutOfBounds { index: 7, len: 6 })
        );
        if let Some(x) = v.get_mut(0) {
            *x = 10;
        }
        assert_eq!(v.as_slice(), &[10, 2, 3, 40, 5, 6]);
    }

    #[test]
    #[should_panic]
    fn vector_index_out_of_bounds() {
        let v = Vector::<f32, 2>::zeros();
        let i = v.len();
        let _value = v[i];
    }

    #[test]
    fn vector_compound_ops() {
        let mut v = Vector::new([1.0f32, 2.0, 3.0]);
        v += Vector::splat(1.0);
        assert_eq!(v, Vector::new([2.0, 3.0, 4.0]));
        v -= Vector::new([1.0, 1.0, 1.0]);
        assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
        v *= Vector::new([2.0, 3.0, 4.0]);
        assert_eq!(v, Vector::new([2.0, 6.0, 12.0]));
        v /= Vector::new([2.0, 3.0, 4.0]);
        assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
        v *= 3.0;
        assert_eq!(v, Vector::new([3.0, 6.0, 9.0]));
        v /= 3.0;
        assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
    }

    #[test]
    fn vector_binary_ops_leave_operands_untouched() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([4, 5, 6]);
        assert_eq!(&a + &b, Vector::new([5, 7, 9]));
        assert_eq!(b - a, Vector::new([3, 3, 3]));
        assert_eq!(a * b, Vector::new([4, 10, 18]));
        assert_eq!(b / a, Vector::new([4, 2, 2]));
        assert_eq!(a * 2, Vector::new([2, 4, 6]));
        assert_eq!(2 * a, Vector::new([2, 4, 6]));
        assert_eq!(b / 2, Vector::new([2, 2, 3]));
        assert_eq!(12 / a, Vector::new([12, 6, 4]));
        assert_eq!(a, Vector::new([1, 2, 3]));
        assert_eq!(b, Vector::new([4, 5, 6]));
        assert_eq!(-a, Vector::new([-1, -2, -3]));
    }

    #[test]
    fn vector_cast() {
        let v = Vector::new([1.7f32, -2.2, 300.0]);
        let i: Vector<i32, 3> = v.cast();
        assert_eq!(i, Vector::new([1, -2, 300]));
        let u: Vector<u8, 3> = i.cast();
        assert_eq!(u, Vector::new([1, 254, 44]));
        let d: Vector<f64, 3> = i.cast();
        assert_eq!(d, Vector::new([1.0, -2.0, 300.0]));
    }

    #[test]
    fn vector_display() {
        let v = Vector::new([10, 0, 0]);
        assert_eq!(format!("{}", v), "[10] [0] [0] ");
        assert_eq!(format!("{:?}", v), "Vector([10, 0, 0])");
    }

    #[test]
    fn vector_approx() {
        let a = Vector::new([1.0f64, 2.0]);
        let b = Vector::new([1.0 + 1e-12, 2.0 - 1e-12]);
        approx::assert_relative_eq!(a, b, epsilon = 1e-10);
        approx::assert_abs_diff_ne!(a, Vector::new([1.0, 2.1]), epsilon = 1e-3);
    }
}
