//! Commonly used types, traits and constructors.

pub use crate::{
    algebra::{Reciprocal, VectorLike},
    matrix::{Mat2, Mat3, Mat4, Matrix},
    quaternion::{Quat, Quaternion},
    scalar::{Fp, NumericCast, Real, Scalar},
    vector::{
        named::{vec2, vec3, vec4, Vec2, Vec3, Vec4},
        Vector,
    },
};
