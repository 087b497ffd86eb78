//! Camera projection and GPU packing helpers.

use crate::matrix4::Matrix4x4;
use crate::vector::Vector3;

/// Perspective projection for the row-vector convention.
///
/// The camera looks down -Z. A view-space point at `z = -near` lands on clip
/// depth 0 and one at `z = -far` on depth 1, after the divide by `w = -z`.
#[must_use]
pub fn calculate_projection_matrix(fov_radians: f32, aspect: f32, near: f32, far: f32) -> Matrix4x4 {
    let half_tan_fov = (fov_radians / 2.0).tan();
    let mut m = Matrix4x4::ZERO;
    m.set(0, 0, 1.0 / (aspect * half_tan_fov));
    m.set(1, 1, 1.0 / half_tan_fov);
    m.set(2, 3, -1.0);
    m.set(2, 2, far / (near - far));
    m.set(3, 2, -(far * near) / (far - near));
    m
}

/// Pack a unit normal into the low three bytes of a `u32` (x, y, z from the
/// least significant byte up). Each component maps `[-1, 1]` onto `[0, 255]`.
#[must_use]
pub fn pack_normal_to_u32(v: Vector3) -> u32 {
    let pack = |c: f32| ((c + 1.0) * 127.5) as u32 & 0xff;
    pack(v.x) | pack(v.y) << 8 | pack(v.z) << 16
}

/// Number of levels in a full mip chain for a `width` x `height` image,
/// including the base level.
#[must_use]
pub fn num_mips(width: u32, height: u32) -> u32 {
    let (mut width, mut height) = (width.max(1), height.max(1));
    let mut count = 1;
    while width > 1 || height > 1 {
        width = (width / 2).max(1);
        height = (height / 2).max(1);
        count += 1;
    }
    count
}
