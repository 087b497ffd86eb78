//! Conversions to and from [`glam`] types.
//!
//! A row-major matrix used with row vectors has exactly the memory layout of
//! a column-major matrix used with column vectors that performs the same
//! transform. The conversions are therefore plain copies: the glam matrix
//! applied with `Mat4 * v` produces the same point as [`Matrix4x4::transform`].

use crate::matrix3::Matrix3x3;
use crate::matrix4::Matrix4x4;
use crate::vector::{Vector2, Vector3, Vector4};

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<glam::Vec2> for Vector2 {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector4> for glam::Vec4 {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<glam::Vec4> for Vector4 {
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Matrix3x3> for glam::Mat3 {
    fn from(m: Matrix3x3) -> Self {
        Self::from_cols_array(m.values())
    }
}

impl From<glam::Mat3> for Matrix3x3 {
    fn from(m: glam::Mat3) -> Self {
        Self::from_values(m.to_cols_array())
    }
}

impl From<Matrix4x4> for glam::Mat4 {
    fn from(m: Matrix4x4) -> Self {
        Self::from_cols_array(m.values())
    }
}

impl From<glam::Mat4> for Matrix4x4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_values(m.to_cols_array())
    }
}
