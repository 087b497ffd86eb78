//! Fixed-size `f32` vectors.
//!
//! [`Vector2`], [`Vector3`] and [`Vector4`] are plain `#[repr(C)]` value
//! types. Each can be read through its named fields or as an `[f32; N]`
//! array; both views share the same storage, so a write through one is
//! visible through the other.
//!
//! Nothing here guards against degenerate input. [`Vector3::normalize`] on a
//! zero vector yields NaN components; use [`Vector3::try_normalize`] when the
//! input is not known to be non-zero.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 2D vector. Also used for texture coordinates (`u`, `v`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// A 3D vector. The `u`, `v`, `w` accessors alias `x`, `y`, `z`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A homogeneous 4D vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Componentwise operators, indexing and array views shared by all vector
/// sizes.
macro_rules! impl_vector {
    ($ty:ident, $n:literal, $($field:ident),+) => {
        impl $ty {
            /// All components zero.
            pub const ZERO: Self = Self { $($field: 0.0),+ };

            /// All components one.
            pub const ONE: Self = Self { $($field: 1.0),+ };

            /// Create a vector with every component set to `value`.
            #[must_use]
            pub const fn splat(value: f32) -> Self {
                Self { $($field: value),+ }
            }

            /// Dot product over every component.
            #[must_use]
            pub fn dot(self, rhs: Self) -> f32 {
                0.0 $(+ self.$field * rhs.$field)+
            }

            /// Squared Euclidean length.
            #[must_use]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Euclidean length.
            #[must_use]
            pub fn length(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// Returns this vector divided by its length.
            ///
            /// The result is NaN when the length is zero.
            #[must_use]
            pub fn normalize(self) -> Self {
                let length = self.length();
                Self { $($field: self.$field / length),+ }
            }

            /// Like [`Self::normalize`], but returns `None` when the length is
            /// zero or not finite.
            #[must_use]
            pub fn try_normalize(self) -> Option<Self> {
                let length = self.length();
                if length > 0.0 && length.is_finite() {
                    Some(Self { $($field: self.$field / length),+ })
                } else {
                    None
                }
            }

            /// View the components as an array.
            #[must_use]
            pub fn as_array(&self) -> &[f32; $n] {
                bytemuck::cast_ref(self)
            }

            /// Mutable array view of the components.
            pub fn as_array_mut(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut(self)
            }

            /// Copy the components out as an array.
            #[must_use]
            pub fn to_array(self) -> [f32; $n] {
                bytemuck::cast(self)
            }
        }

        impl From<[f32; $n]> for $ty {
            fn from(values: [f32; $n]) -> Self {
                bytemuck::cast(values)
            }
        }

        impl From<$ty> for [f32; $n] {
            fn from(v: $ty) -> Self {
                v.to_array()
            }
        }

        impl Index<usize> for $ty {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                &self.as_array()[index]
            }
        }

        impl IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.as_array_mut()[index]
            }
        }

        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Mul for $ty {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl Mul<$ty> for f32 {
            type Output = $ty;

            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl MulAssign<f32> for $ty {
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$field *= rhs;)+
            }
        }
    };
}

impl_vector!(Vector2, 2, x, y);
impl_vector!(Vector3, 3, x, y, z);
impl_vector!(Vector4, 4, x, y, z, w);

impl Vector2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Texture-space alias for `x`.
    #[must_use]
    pub const fn u(self) -> f32 {
        self.x
    }

    /// Texture-space alias for `y`.
    #[must_use]
    pub const fn v(self) -> f32 {
        self.y
    }
}

impl Vector3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    #[must_use]
    pub const fn u(self) -> f32 {
        self.x
    }

    #[must_use]
    pub const fn v(self) -> f32 {
        self.y
    }

    #[must_use]
    pub const fn w(self) -> f32 {
        self.z
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        let (u1, u2, u3) = (self.x, self.y, self.z);
        let (v1, v2, v3) = (rhs.x, rhs.y, rhs.z);
        Self::new(u2 * v3 - u3 * v2, u3 * v1 - u1 * v3, u1 * v2 - u2 * v1)
    }

    /// Componentwise minimum.
    #[must_use]
    pub fn min(a: Self, b: Self) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
    }

    /// Componentwise maximum.
    #[must_use]
    pub fn max(a: Self, b: Self) -> Self {
        Self::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
    }

    /// Extend to a homogeneous vector with the given `w`.
    #[must_use]
    pub const fn extend(self, w: f32) -> Vector4 {
        Vector4::from_vector3(self, w)
    }
}

impl Vector4 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[must_use]
    pub const fn from_vector3(v: Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        *self = Self::new(x, y, z, w);
    }

    /// Drop `w`.
    #[must_use]
    pub const fn truncate(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Offset `x`, `y`, `z` by `v`, leaving `w` as is.
    #[must_use]
    pub fn add_vector3(self, v: Vector3) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z, self.w)
    }
}

/// Translates the `x`, `y`, `z` part; `w` is untouched.
impl AddAssign<Vector3> for Vector4 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

/// Translates the `x`, `y`, `z` part; `w` is untouched.
impl SubAssign<Vector3> for Vector4 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}
