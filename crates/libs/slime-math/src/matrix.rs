//! Fixed-size matrices.
//!
//! A [`Matrix<T, R, C>`] is a grid of `R` rows and `C` columns addressed by
//! `(row, col)`. Elements are stored row-major, so the linear index of
//! `(row, col)` is `row * C + col`.

use crate::{
    error::MathError,
    scalar::{Fp, NumericCast, Scalar},
    vector::Vector,
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use paste::paste;
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Row-major `R` x `C` matrix.
///
/// The default value is the identity pattern: ones where `row == col`, zeros
/// elsewhere, also for non-square shapes.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [[T; C]; R]);

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;

    /// Number of columns.
    pub const COLS: usize = C;

    /// Total number of elements.
    pub const ELEMS: usize = {
        assert!(R * C > 0, "matrices must consist of at least 1x1 elements");
        R * C
    };

    /// Creates a matrix from its rows.
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        let _ = Self::ELEMS;
        Self(rows)
    }

    /// Returns the elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] { self.0.as_flattened() }

    /// Returns the elements in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.0.as_flattened_mut() }

    /// Returns a raw pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T { self.as_slice().as_ptr() }

    /// Returns the element at `(row, col)`, or `None` if out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Returns the mutable element at `(row, col)`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Returns the element at `(row, col)`.
    pub fn try_get(&self, row: usize, col: usize) -> Result<&T, MathError> {
        self.get(row, col).ok_or(MathError::CoordOutOfBounds {
            row,
            col,
            rows: R,
            cols: C,
        })
    }

    /// Returns the mutable element at `(row, col)`.
    pub fn try_get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MathError> {
        self.get_mut(row, col).ok_or(MathError::CoordOutOfBounds {
            row,
            col,
            rows: R,
            cols: C,
        })
    }

    /// Consumes the matrix and returns its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] { self.0 }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from row vectors.
    pub fn from_rows(rows: [Vector<T, C>; R]) -> Self { Self::new(rows.map(|r| r.0)) }

    /// Creates a matrix from column vectors.
    pub fn from_cols(cols: [Vector<T, R>; C]) -> Self {
        Self::new(std::array::from_fn(|r| std::array::from_fn(|c| cols[c][r])))
    }

    /// Returns the identity pattern: ones on the diagonal, zeros elsewhere.
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        m.load_identity();
        m
    }

    /// Returns a matrix with all elements set to zero.
    pub fn zeros() -> Self { Self::new([[T::zero(); C]; R]) }

    /// Returns a matrix with all elements set to `value`.
    pub fn splat(value: T) -> Self { Self::new([[value; C]; R]) }

    /// Resets every element to the identity pattern, regardless of the
    /// previous contents.
    pub fn load_identity(&mut self) {
        for (r, row) in self.0.iter_mut().enumerate() {
            for (c, elem) in row.iter_mut().enumerate() {
                *elem = if r == c { T::one() } else { T::zero() };
            }
        }
    }

    /// Sets every element to zero.
    pub fn reset(&mut self) {
        for elem in self.as_mut_slice() {
            *elem = T::zero();
        }
    }

    /// Returns the `r`-th row.
    pub fn row(&self, r: usize) -> Vector<T, C> { Vector::new(self.0[r]) }

    /// Returns the `c`-th column.
    pub fn col(&self, c: usize) -> Vector<T, R> { Vector::new(std::array::from_fn(|r| self.0[r][c])) }

    /// Returns the transposed matrix. Valid for any shape.
    pub fn transposed(&self) -> Matrix<T, C, R> {
        Matrix::new(std::array::from_fn(|c| std::array::from_fn(|r| self.0[r][c])))
    }

    /// Sums the elements where `row == col`.
    ///
    /// Defined for any shape; only the square case is the trace in the
    /// linear-algebra sense, for a non-square matrix this is the sum over the
    /// leading `min(R, C)` diagonal.
    pub fn trace(&self) -> T {
        let mut trace = T::zero();
        for i in 0..R.min(C) {
            trace += self.0[i][i];
        }
        trace
    }

    /// Converts every element to another scalar type, as a primitive `as`
    /// cast would.
    pub fn cast<U>(&self) -> Matrix<U, R, C>
    where
        T: NumericCast<U>,
    {
        Matrix::new(self.0.map(|row| row.map(|x| x.cast())))
    }

    /// Applies `f` to every element.
    pub fn map<U, F>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix::new(self.0.map(|row| row.map(&mut f)))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Transposes the matrix in place.
    ///
    /// Only available for square matrices, use [`Matrix::transposed`] for
    /// other shapes.
    pub fn transpose(&mut self) {
        for i in 0..N {
            for j in (i + 1)..N {
                let tmp = self.0[i][j];
                self.0[i][j] = self.0[j][i];
                self.0[j][i] = tmp;
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self { Self::identity() }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self { Self::new(rows) }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = MathError;

    /// Builds a matrix from a row-major slice of exactly `R * C` elements.
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        if slice.len() != R * C {
            return Err(MathError::DimensionMismatch {
                expected: R * C,
                actual: slice.len(),
            });
        }
        Ok(Self::new(std::array::from_fn(|r| {
            std::array::from_fn(|c| slice[r * C + c])
        })))
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output { &self.0[row][col] }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

/// Linear access in row-major order, `0..R * C`.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output { &self.as_slice()[index] }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.as_mut_slice()[index] }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += *b;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a -= *b;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for a in self.as_mut_slice() {
            *a *= rhs;
        }
    }
}

/// `self = self * rhs`, square matrices only.
impl<T: Scalar, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) { *self = *self * rhs; }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Scalar + Neg<Output = T>, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self::Output { self.map(|x| -x) }
}

/// Matrix product.
///
/// `result(r, c)` is the sum over `i` in `0..K` of `lhs(r, i) * rhs(i, c)`,
/// accumulated in increasing `i` starting from zero.
impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        let mut result = Matrix::<T, R, C>::zeros();
        for r in 0..R {
            for c in 0..C {
                let mut sum = T::zero();
                for i in 0..K {
                    sum += self.0[r][i] * rhs.0[i][c];
                }
                result.0[r][c] = sum;
            }
        }
        result
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<&Matrix<T, K, C>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: &Matrix<T, K, C>) -> Self::Output { *self * *rhs }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                #[inline]
                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output { rhs * self }
            }
        )*
    };
}

impl_scalar_lhs_mul!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl<T: Debug, const R: usize, const C: usize> Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Matrix").field(&self.0).finish()
    }
}

/// Prints the grid row by row, each element in brackets followed by a tab.
///
/// Debugging aid only, not meant to be parsed back.
impl<T: Display, const R: usize, const C: usize> Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.0 {
            for elem in row {
                write!(f, "[{}]\t", elem)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
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
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

macro_rules! matrix_aliases {
    ($($n:literal),*) => {
        paste! {
            $(
                #[doc = concat!(stringify!($n), "x", stringify!($n), " matrix of the default floating point type.")]
                pub type [<Mat $n>] = Matrix<Fp, $n, $n>;
                #[doc = concat!(stringify!($n), "x", stringify!($n), " matrix of `f32`.")]
                pub type [<Mat $n f>] = Matrix<f32, $n, $n>;
                #[doc = concat!(stringify!($n), "x", stringify!($n), " matrix of `f64`.")]
                pub type [<Mat $n d>] = Matrix<f64, $n, $n>;
                #[doc = concat!(stringify!($n), "x", stringify!($n), " matrix of `i32`.")]
                pub type [<Mat $n i>] = Matrix<i32, $n, $n>;
            )*
        }
    };
}

matrix_aliases!(2, 3, 4);
