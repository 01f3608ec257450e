//! Scalar element traits shared by vectors, matrices and quaternions.

use cfg_if::cfg_if;
use num_traits::{Float, Num};
use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

cfg_if! {
    if #[cfg(feature = "use_f64")] {
        /// Default floating point type used by the unsuffixed aliases
        /// (`Vec3`, `Mat4`, `Quat`, ...).
        pub type Fp = f64;
    } else {
        /// Default floating point type used by the unsuffixed aliases
        /// (`Vec3`, `Mat4`, `Quat`, ...).
        pub type Fp = f32;
    }
}

// TODO: #[const_trait] once const trait impls are stable, so that `cast` can
// be used inside const constructors.
/// Trait for converting from one primitive numeric type to another.
///
/// Behaves exactly like a primitive `as` cast: narrowing conversions truncate
/// or saturate, widening conversions are exact, and the conversion never
/// fails.
pub trait NumericCast<T> {
    /// Casts `self` to `T`.
    fn cast(&self) -> T;
}

macro_rules! impl_numeric_cast {
    ($($t0:ty),*) => {
        $(
            impl_numeric_cast!(@from $t0 => u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
        )*
    };
    (@from $t0:ty => $($t1:ty),*) => {
        $(
            impl NumericCast<$t1> for $t0 {
                #[inline(always)]
                fn cast(&self) -> $t1 { *self as $t1 }
            }
        )*
    };
}

impl_numeric_cast!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Element type of every container in this crate.
///
/// Implemented for all primitive integers and floating point numbers.
pub trait Scalar:
    Num
    + Copy
    + PartialOrd
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Debug
    + Display
    + 'static
{
    /// Converts a small integer literal into the scalar type.
    ///
    /// Used for the constants appearing inside generic formulas
    /// (`2`, `3`, `15`, ...).
    fn from_int(v: i32) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn from_int(v: i32) -> Self { v as $t }
            }
        )*
    };
}

impl_scalar!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Floating point scalar.
///
/// Required by every operation involving a square root or a trigonometric
/// function. The machine epsilon is [`Float::epsilon`].
pub trait Real: Scalar + Float {}

impl<T: Scalar + Float> Real for T {}
