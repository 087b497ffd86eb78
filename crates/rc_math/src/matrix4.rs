//! 4x4 affine/projective matrices.
//!
//! [`Matrix4x4`] is stored row-major and follows the row-vector convention:
//! a point `p` is transformed as `p * M`, so translation lives in row 3 and
//! `a * b` applies `a` first, then `b`.
//!
//! ```
//! use rc_math::{Matrix4x4, Vector3, Vector4};
//!
//! let m = Matrix4x4::from_scale(Vector3::splat(2.0))
//!     * Matrix4x4::from_translation(Vector3::new(1.0, 0.0, 0.0));
//! let p = m.transform(Vector4::new(1.0, 1.0, 1.0, 1.0));
//! assert_eq!(p, Vector4::new(3.0, 2.0, 2.0, 1.0));
//! ```

use std::ops::{Mul, MulAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::matrix3::Matrix3x3;
use crate::vector::{Vector3, Vector4};

/// A row-major 4x4 matrix.
///
/// Element `(row, col)` lives at `values()[row * 4 + col]`, which is the same
/// storage as `rows[row][col]`. The 16 floats are contiguous and can be
/// handed to a graphics API with [`bytemuck::bytes_of`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Matrix4x4 {
    pub rows: [Vector4; 4],
}

impl Matrix4x4 {
    pub const ZERO: Self = Self {
        rows: [Vector4::ZERO; 4],
    };

    pub const IDENTITY: Self = Self {
        rows: [
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
            Vector4::new(0.0, 0.0, 1.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    #[must_use]
    pub const fn from_rows(r0: Vector4, r1: Vector4, r2: Vector4, r3: Vector4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Build a matrix whose columns are the given vectors.
    #[must_use]
    pub fn from_cols(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        Self::from_rows(c0, c1, c2, c3).transpose()
    }

    /// Build from sixteen row-major values.
    #[must_use]
    pub fn from_values(values: [f32; 16]) -> Self {
        bytemuck::cast(values)
    }

    /// Embed a 3x3 block in the top-left corner; the rest is identity.
    #[must_use]
    pub fn from_matrix3(m: &Matrix3x3) -> Self {
        Self::from_rows(
            m.rows[0].extend(0.0),
            m.rows[1].extend(0.0),
            m.rows[2].extend(0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Diagonal scale with homogeneous 1.
    #[must_use]
    pub fn from_scale(scale: Vector3) -> Self {
        Self::from_rows(
            Vector4::new(scale.x, 0.0, 0.0, 0.0),
            Vector4::new(0.0, scale.y, 0.0, 0.0),
            Vector4::new(0.0, 0.0, scale.z, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    #[must_use]
    pub fn from_rotation_x(angle: f32) -> Self {
        Self::from_matrix3(&Matrix3x3::from_rotation_x(angle))
    }

    #[must_use]
    pub fn from_rotation_y(angle: f32) -> Self {
        Self::from_matrix3(&Matrix3x3::from_rotation_y(angle))
    }

    #[must_use]
    pub fn from_rotation_z(angle: f32) -> Self {
        Self::from_matrix3(&Matrix3x3::from_rotation_z(angle))
    }

    /// Translation by `offset`, stored in row 3.
    #[must_use]
    pub fn from_translation(offset: Vector3) -> Self {
        let mut m = Self::IDENTITY;
        m.rows[3] = offset.extend(1.0);
        m
    }

    /// Flat row-major view of the sixteen elements.
    #[must_use]
    pub fn values(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.rows)
    }

    pub fn values_mut(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(&mut self.rows)
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values()[row * 4 + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.values_mut()[row * 4 + col] = value;
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Vector4 {
        self.rows[index]
    }

    /// Gather column `index` from the four rows.
    #[must_use]
    pub fn col(&self, index: usize) -> Vector4 {
        Vector4::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
            self.rows[3][index],
        )
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2), self.col(3))
    }

    /// Matrix product `m0 * m1`.
    #[must_use]
    pub fn multiply(m0: &Self, m1: &Self) -> Self {
        let cols = [m1.col(0), m1.col(1), m1.col(2), m1.col(3)];
        let mut out = Self::ZERO;
        for (out_row, row) in out.rows.iter_mut().zip(&m0.rows) {
            for (col_index, col) in cols.iter().enumerate() {
                out_row[col_index] = row.dot(*col);
            }
        }
        out
    }

    /// Apply the matrix to the row vector `v`, computing `v * self`.
    #[must_use]
    pub fn transform(&self, v: Vector4) -> Vector4 {
        Vector4::new(
            v.dot(self.col(0)),
            v.dot(self.col(1)),
            v.dot(self.col(2)),
            v.dot(self.col(3)),
        )
    }

    /// Transform a point (`w = 1`). No perspective divide is applied.
    #[must_use]
    pub fn transform_point3(&self, p: Vector3) -> Vector3 {
        self.transform(p.extend(1.0)).truncate()
    }

    /// Transform a direction (`w = 0`), ignoring translation.
    #[must_use]
    pub fn transform_vector3(&self, v: Vector3) -> Vector3 {
        self.transform(v.extend(0.0)).truncate()
    }

    /// The cross-product terms shared by [`Self::determinant`] and the
    /// inverse.
    ///
    /// The rows' `xyz` parts play the role of `a`, `b`, `c`, `d` and column 3
    /// supplies the scalars `x`, `y`, `z`, `w`.
    fn inverse_terms(&self) -> InverseTerms {
        let [a, b, c, d] = self.rows.map(Vector4::truncate);
        let [x, y, z, w] = self.rows.map(|r| r.w);
        let s = a.cross(b);
        let t = c.cross(d);
        let u = a * y - b * x;
        let v = c * w - d * z;
        InverseTerms {
            a,
            b,
            c,
            d,
            x,
            y,
            z,
            w,
            s,
            t,
            u,
            v,
        }
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        let terms = self.inverse_terms();
        terms.s.dot(terms.v) + terms.t.dot(terms.u)
    }

    /// Closed-form inverse.
    ///
    /// The caller must ensure the matrix is invertible. A singular matrix
    /// divides by zero and yields non-finite elements; use
    /// [`Self::try_inverse`] to detect that instead.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let InverseTerms {
            a,
            b,
            c,
            d,
            x,
            y,
            z,
            w,
            s,
            t,
            u,
            v,
        } = self.inverse_terms();

        let inv_det = 1.0 / (s.dot(v) + t.dot(u));
        let (s, t, u, v) = (s * inv_det, t * inv_det, u * inv_det, v * inv_det);

        let r0 = (b.cross(v) + t * y).extend(-b.dot(t));
        let r1 = (v.cross(a) - t * x).extend(a.dot(t));
        let r2 = (d.cross(u) + s * w).extend(-d.dot(s));
        let r3 = (u.cross(c) - s * z).extend(c.dot(s));

        Self::from_cols(r0, r1, r2, r3)
    }

    /// Returns the inverse, or `None` when the determinant is zero or not
    /// finite.
    #[must_use]
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(self.inverse())
    }
}

struct InverseTerms {
    a: Vector3,
    b: Vector3,
    c: Vector3,
    d: Vector3,
    x: f32,
    y: f32,
    z: f32,
    w: f32,
    s: Vector3,
    t: Vector3,
    u: Vector3,
    v: Vector3,
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::multiply(&self, &rhs)
    }
}

/// `a *= b` sets `a` to `a * b`.
impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Self::multiply(self, &rhs);
    }
}

impl Mul<Matrix4x4> for Vector4 {
    type Output = Vector4;

    fn mul(self, rhs: Matrix4x4) -> Vector4 {
        rhs.transform(self)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn assert_matrix_eq(a: &Matrix4x4, b: &Matrix4x4, epsilon: f32) {
        for (i, (x, y)) in a.values().iter().zip(b.values()).enumerate() {
            assert!(
                (x - y).abs() <= epsilon,
                "element {i}: {x} != {y}\nleft: {a:?}\nright: {b:?}"
            );
        }
    }

    fn sample_matrices() -> Vec<Matrix4x4> {
        vec![
            Matrix4x4::from_translation(Vector3::new(3.0, -2.0, 7.5)),
            Matrix4x4::from_rotation_x(0.3)
                * Matrix4x4::from_rotation_y(-1.2)
                * Matrix4x4::from_translation(Vector3::new(1.0, 2.0, 3.0)),
            Matrix4x4::from_scale(Vector3::new(2.0, 0.5, 4.0)) * Matrix4x4::from_rotation_z(2.0),
            crate::projection::calculate_projection_matrix(1.0, 16.0 / 9.0, 0.1, 100.0),
            Matrix4x4::from_values([
                2.0, 1.0, 0.0, 0.5, //
                -1.0, 3.0, 2.0, 0.0, //
                0.0, 1.0, 4.0, -1.0, //
                1.0, 0.0, 2.0, 3.0,
            ]),
        ]
    }

    #[test]
    fn test_identity_layout() {
        let values = Matrix4x4::IDENTITY.values();
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(values[row * 4 + col], expected);
            }
        }
    }

    #[test]
    fn test_set_and_rows_alias() {
        let mut m = Matrix4x4::ZERO;
        m.set(2, 3, -1.0);
        assert_eq!(m.rows[2].w, -1.0);
        assert_eq!(m.values()[11], -1.0);
        m.rows[0][1] = 9.0;
        assert_eq!(m.get(0, 1), 9.0);
    }

    #[test]
    fn test_col_gathers_rows() {
        let m = Matrix4x4::from_values(std::array::from_fn(|i| i as f32));
        assert_eq!(m.col(1), Vector4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(m.row(1), Vector4::new(4.0, 5.0, 6.0, 7.0));
    }

    #[test]
    fn test_transpose_twice_is_exact() {
        for m in sample_matrices() {
            assert_eq!(m.transpose().transpose(), m);
        }
    }

    #[test]
    fn test_multiply_identity() {
        for m in sample_matrices() {
            assert_matrix_eq(&(m * Matrix4x4::IDENTITY), &m, 1e-5);
            assert_matrix_eq(&(Matrix4x4::IDENTITY * m), &m, 1e-5);
        }
    }

    #[test]
    fn test_multiply_is_associative() {
        let samples = sample_matrices();
        let (a, b, c) = (samples[0], samples[1], samples[2]);
        assert_matrix_eq(&((a * b) * c), &(a * (b * c)), 1e-3);
    }

    #[test]
    fn test_multiply_assign_uses_original_rows() {
        let a = Matrix4x4::from_values([
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ]);
        let b = a.transpose();
        let mut c = a;
        c *= b;
        assert_eq!(c, Matrix4x4::multiply(&a, &b));
        assert_eq!(c.get(0, 0), 30.0);
        assert_eq!(c.get(3, 3), 13.0 * 13.0 + 14.0 * 14.0 + 15.0 * 15.0 + 16.0 * 16.0);
    }

    #[test]
    fn test_multiply_order() {
        // Scale first, then translate: the translation is not scaled.
        let s = Matrix4x4::from_scale(Vector3::splat(2.0));
        let t = Matrix4x4::from_translation(Vector3::new(1.0, 0.0, 0.0));
        let p = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!((s * t).transform_point3(p), Vector3::new(3.0, 2.0, 2.0));
        assert_eq!((t * s).transform_point3(p), Vector3::new(4.0, 2.0, 2.0));
    }

    #[test]
    fn test_translation_in_row_three() {
        let m = Matrix4x4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.row(3), Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(
            m.transform_point3(Vector3::new(1.0, 1.0, 1.0)),
            Vector3::new(2.0, 3.0, 4.0)
        );
        assert_eq!(
            m.transform_vector3(Vector3::new(1.0, 1.0, 1.0)),
            Vector3::new(1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_scale() {
        let m = Matrix4x4::from_scale(Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(
            m.transform(Vector4::new(1.0, 1.0, 1.0, 1.0)),
            Vector4::new(2.0, 3.0, 4.0, 1.0)
        );
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        assert_eq!(Matrix4x4::from_rotation_x(0.0), Matrix4x4::IDENTITY);
        assert_eq!(Matrix4x4::from_rotation_y(0.0), Matrix4x4::IDENTITY);
        assert_eq!(Matrix4x4::from_rotation_z(0.0), Matrix4x4::IDENTITY);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let m = Matrix4x4::from_rotation_z(FRAC_PI_2);

        // Read as a column-vector matrix, the x axis goes to the y axis.
        let x_image = m.col(0);
        assert_abs_diff_eq!(x_image.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(x_image.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(x_image.z, 0.0, epsilon = 1e-6);

        // Under the row-vector transform the same matrix turns the other way.
        let p = m.transform_point3(Vector3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, -1.0, epsilon = 1e-6);

        let p = m.transpose().transform_point3(Vector3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_half_turn_y() {
        let p = Matrix4x4::from_rotation_y(PI).transform_point3(Vector3::new(1.0, 0.0, 1.0));
        assert_abs_diff_eq!(p.x, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse_of_translation() {
        let m = Matrix4x4::from_translation(Vector3::new(4.0, -5.0, 6.0));
        let inv = m.inverse();
        assert_matrix_eq(
            &inv,
            &Matrix4x4::from_translation(Vector3::new(-4.0, 5.0, -6.0)),
            1e-6,
        );
    }

    #[test]
    fn test_inverse_round_trip() {
        for m in sample_matrices() {
            let inv = m.inverse();
            assert_matrix_eq(&(m * inv), &Matrix4x4::IDENTITY, 1e-4);
            assert_matrix_eq(&(inv * m), &Matrix4x4::IDENTITY, 1e-4);
        }
    }

    #[test]
    fn test_inverse_matches_glam() {
        for m in sample_matrices() {
            let reference: Matrix4x4 = glam::Mat4::from(m).inverse().into();
            assert_matrix_eq(&m.inverse(), &reference, 1e-4);
        }
    }

    #[test]
    fn test_determinant_matches_glam() {
        for m in sample_matrices() {
            let expected = glam::Mat4::from(m).determinant();
            assert_abs_diff_eq!(m.determinant(), expected, epsilon = 1e-3 * expected.abs().max(1.0));
        }
    }

    #[test]
    fn test_singular_inverse() {
        let m = Matrix4x4::from_scale(Vector3::new(1.0, 0.0, 1.0));
        assert_eq!(m.determinant(), 0.0);
        assert!(m.try_inverse().is_none());
        assert!(m.inverse().values().iter().any(|v| !v.is_finite()));
        assert!(Matrix4x4::IDENTITY.try_inverse().is_some());
    }

    #[test]
    fn test_vector_times_matrix() {
        let m = Matrix4x4::from_translation(Vector3::new(0.0, 1.0, 0.0));
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v * m, m.transform(v));
    }

    #[test]
    fn test_bytes_are_row_major_floats() {
        let m = Matrix4x4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&m));
        assert_eq!(floats.len(), 16);
        assert_eq!(&floats[12..], &[1.0, 2.0, 3.0, 1.0]);
    }
}
