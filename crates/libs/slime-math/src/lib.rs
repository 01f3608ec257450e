//! # slime-math
//! Fixed-size linear algebra for real-time graphics.
//!
//! Vectors and matrices are generic over their scalar type and dimensions,
//! which are fixed at compile time. Quaternions cover rotations, and the
//! [`algebra`] module holds the free functions that vectors and quaternions
//! share.

#![warn(missing_docs)]

pub mod algebra;
pub mod conversion;
pub mod error;
pub mod matrix;
pub mod prelude;
pub mod quaternion;
pub mod scalar;
pub mod vector;

pub use algebra::{Reciprocal, VectorLike};
pub use error::MathError;
pub use matrix::{
    Mat2, Mat2d, Mat2f, Mat2i, Mat3, Mat3d, Mat3f, Mat3i, Mat4, Mat4d, Mat4f, Mat4i, Matrix,
};
pub use quaternion::{Quat, Quatd, Quatf, Quaternion};
pub use scalar::{Fp, NumericCast, Real, Scalar};
pub use vector::{
    named::{
        vec2, vec3, vec4, Vec2, Vec2d, Vec2f, Vec2i, Vec2u, Vec3, Vec3d, Vec3f, Vec3i, Vec3u, Vec4,
        Vec4d, Vec4f, Vec4i, Vec4u, Vector2, Vector3, Vector4,
    },
    Vector,
};

// Storage is exactly the scalars, with no padding or header.
static_assertions::assert_eq_size!(Vector<f32, 3>, [f32; 3]);
static_assertions::assert_eq_size!(Matrix<f32, 4, 4>, [f32; 16]);
static_assertions::assert_eq_size!(Matrix<f64, 2, 3>, [f64; 6]);
static_assertions::assert_eq_size!(Quaternion<f64>, [f64; 4]);
static_assertions::assert_eq_align!(Quaternion<f32>, f32);
