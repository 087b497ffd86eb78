//! 3x3 rotation matrices.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// A row-major 3x3 matrix, used for pure rotations.
///
/// Element `(row, col)` lives at `values()[row * 3 + col]`, which is the same
/// storage as `rows[row][col]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Matrix3x3 {
    pub rows: [Vector3; 3],
}

impl Matrix3x3 {
    pub const ZERO: Self = Self {
        rows: [Vector3::ZERO; 3],
    };

    pub const IDENTITY: Self = Self {
        rows: [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ],
    };

    #[must_use]
    pub const fn from_rows(r0: Vector3, r1: Vector3, r2: Vector3) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Build from nine row-major values.
    #[must_use]
    pub fn from_values(values: [f32; 9]) -> Self {
        bytemuck::cast(values)
    }

    /// Rotation about the X axis by `angle` radians.
    #[must_use]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, cos, -sin),
            Vector3::new(0.0, sin, cos),
        )
    }

    /// Rotation about the Y axis by `angle` radians.
    #[must_use]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows(
            Vector3::new(cos, 0.0, sin),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(-sin, 0.0, cos),
        )
    }

    /// Rotation about the Z axis by `angle` radians.
    #[must_use]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows(
            Vector3::new(cos, -sin, 0.0),
            Vector3::new(sin, cos, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }

    /// Flat row-major view of the nine elements.
    #[must_use]
    pub fn values(&self) -> &[f32; 9] {
        bytemuck::cast_ref(&self.rows)
    }

    pub fn values_mut(&mut self) -> &mut [f32; 9] {
        bytemuck::cast_mut(&mut self.rows)
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values()[row * 3 + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.values_mut()[row * 3 + col] = value;
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        let values = self.values();
        let out_values = out.values_mut();
        for i in 0..3 {
            for j in 0..3 {
                out_values[i * 3 + j] = values[j * 3 + i];
            }
        }
        out
    }
}
