//! # rc_math
//!
//! Small 3D math library for rendering code: `f32` vectors, 3x3 rotation
//! matrices and 4x4 affine/projective matrices, plus projection, normal
//! packing and mip-chain helpers.
//!
//! Matrices are stored row-major and used with row vectors (`v * M`), so
//! translation sits in the last row and products compose left to right.
//! Conversions to [`glam`] types are provided for interop.
//!
//! The types trust their caller: normalizing a zero vector or inverting a
//! singular matrix produces NaN/Inf rather than an error. The `try_*`
//! variants report those cases as `None`.

pub mod angle;
pub mod interop;
pub mod matrix3;
pub mod matrix4;
pub mod projection;
pub mod vector;

pub use angle::{to_degrees, to_radians};
pub use matrix3::Matrix3x3;
pub use matrix4::Matrix4x4;
pub use projection::{calculate_projection_matrix, num_mips, pack_normal_to_u32};
pub use vector::{Vector2, Vector3, Vector4};
