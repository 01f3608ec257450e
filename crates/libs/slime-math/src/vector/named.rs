//! Named components and arity-specific helpers for 2, 3 and 4 component
//! vectors.
//!
//! The components `x`, `y`, `z` and `w` are accessors mapped onto the indices
//! 0, 1, 2 and 3 of the same backing array, so writing through a name is
//! immediately visible through indexing and vice versa. The geometric helpers
//! forward to [`crate::algebra`] so that every arity shares one definition of
//! length and normalization.

use crate::{
    algebra,
    scalar::{Fp, Real, Scalar},
    vector::Vector,
};
use paste::paste;

macro_rules! impl_named_vector {
    ($n:literal => $($name:ident: $idx:literal),+) => {
        impl<T> Vector<T, $n> {
            paste! {
                $(
                    #[doc = concat!("Returns the `", stringify!($name), "` component (index ", stringify!($idx), ").")]
                    #[inline(always)]
                    pub fn $name(&self) -> T
                    where
                        T: Copy,
                    {
                        self.0[$idx]
                    }

                    #[doc = concat!("Returns a mutable reference to the `", stringify!($name), "` component.")]
                    #[inline(always)]
                    pub fn [<$name _mut>](&mut self) -> &mut T { &mut self.0[$idx] }

                    #[doc = concat!("Sets the `", stringify!($name), "` component.")]
                    #[inline(always)]
                    pub fn [<set_ $name>](&mut self, value: T) { self.0[$idx] = value; }
                )+
            }
        }

        impl<T: Scalar> Vector<T, $n> {
            /// Dot product with another vector.
            #[inline]
            pub fn dot(&self, other: &Self) -> T { algebra::dot(self, other) }

            /// Squared Euclidean length.
            #[inline]
            pub fn length_squared(&self) -> T { algebra::length_squared(self) }

            /// Squared distance to another vector.
            #[inline]
            pub fn distance_squared(&self, other: &Self) -> T {
                algebra::distance_squared(self, other)
            }
        }

        impl<T: Real> Vector<T, $n> {
            /// Euclidean length.
            #[inline]
            pub fn length(&self) -> T { algebra::length(self) }

            /// Distance to another vector.
            #[inline]
            pub fn distance(&self, other: &Self) -> T { algebra::distance(self, other) }

            /// Angle in radians between this vector and `other`.
            #[inline]
            pub fn angle(&self, other: &Self) -> T { algebra::angle(self, other) }

            /// Normalizes the vector in place; a zero vector is left unchanged.
            #[inline]
            pub fn normalize(&mut self) { algebra::normalize(self) }

            /// Returns a normalized copy of the vector.
            #[inline]
            pub fn normalized(&self) -> Self {
                let mut v = *self;
                v.normalize();
                v
            }

            /// Rescales the vector to the given length; a zero vector is left
            /// unchanged.
            #[inline]
            pub fn resize(&mut self, length: T) { algebra::resize(self, length) }
        }

        paste! {
            #[doc = concat!(stringify!($n), "-component vector of any scalar type.")]
            pub type [<Vector $n>]<T> = Vector<T, $n>;
            #[doc = concat!(stringify!($n), "-component vector of the default floating point type.")]
            pub type [<Vec $n>] = Vector<Fp, $n>;
            #[doc = concat!(stringify!($n), "-component vector of `f32`.")]
            pub type [<Vec $n f>] = Vector<f32, $n>;
            #[doc = concat!(stringify!($n), "-component vector of `f64`.")]
            pub type [<Vec $n d>] = Vector<f64, $n>;
            #[doc = concat!(stringify!($n), "-component vector of `i32`.")]
            pub type [<Vec $n i>] = Vector<i32, $n>;
            #[doc = concat!(stringify!($n), "-component vector of `u32`.")]
            pub type [<Vec $n u>] = Vector<u32, $n>;
        }
    };
}

impl_named_vector!(2 => x: 0, y: 1);
impl_named_vector!(3 => x: 0, y: 1, z: 2);
impl_named_vector!(4 => x: 0, y: 1, z: 2, w: 3);

/// Creates a 2-component vector.
#[inline(always)]
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> { Vector::new([x, y]) }

/// Creates a 3-component vector.
#[inline(always)]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> { Vector::new([x, y, z]) }

/// Creates a 4-component vector.
#[inline(always)]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> { Vector::new([x, y, z, w]) }

impl<T: Copy> Vector<T, 3> {
    /// Extends a 2-component vector with a `z` component.
    #[inline]
    pub fn from_xy(xy: Vector<T, 2>, z: T) -> Self { vec3(xy.0[0], xy.0[1], z) }

    /// Returns the `x` and `y` components.
    #[inline]
    pub fn xy(&self) -> Vector<T, 2> { vec2(self.0[0], self.0[1]) }
}

impl<T: Scalar> Vector<T, 3> {
    /// Cross product with another vector.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self { algebra::cross(self, other) }
}

impl<T: Copy> Vector<T, 4> {
    /// Extends a 3-component vector with a `w` component.
    #[inline]
    pub fn from_xyz(xyz: Vector<T, 3>, w: T) -> Self {
        vec4(xyz.0[0], xyz.0[1], xyz.0[2], w)
    }

    /// Extends a 2-component vector with `z` and `w` components.
    #[inline]
    pub fn from_xy(xy: Vector<T, 2>, z: T, w: T) -> Self { vec4(xy.0[0], xy.0[1], z, w) }

    /// Concatenates two 2-component vectors.
    #[inline]
    pub fn from_xy_zw(xy: Vector<T, 2>, zw: Vector<T, 2>) -> Self {
        vec4(xy.0[0], xy.0[1], zw.0[0], zw.0[1])
    }

    /// Returns the `x` and `y` components.
    #[inline]
    pub fn xy(&self) -> Vector<T, 2> { vec2(self.0[0], self.0[1]) }

    /// Returns the `x`, `y` and `z` components.
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3> { vec3(self.0[0], self.0[1], self.0[2]) }
}

impl<T: Copy> From<Vector<T, 3>> for Vector<T, 2> {
    fn from(v: Vector<T, 3>) -> Self { v.xy() }
}

impl<T: Copy> From<Vector<T, 4>> for Vector<T, 2> {
    fn from(v: Vector<T, 4>) -> Self { v.xy() }
}

impl<T: Copy> From<Vector<T, 4>> for Vector<T, 3> {
    fn from(v: Vector<T, 4>) -> Self { v.xyz() }
}
