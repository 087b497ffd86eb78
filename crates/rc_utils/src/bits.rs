//! Power-of-two and alignment helpers.

use crate::error::{Result, UtilError};

/// Returns `true` if `n` is a non-zero power of two.
#[must_use]
pub const fn is_power_of_two(n: u64) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Unsigned integers that can be rounded up to a power-of-two alignment.
pub trait Alignable: Copy {
    fn to_u64(self) -> u64;

    /// `(self + alignment - 1) & !(alignment - 1)`, or `None` on overflow.
    fn checked_align(self, alignment: Self) -> Option<Self>;
}

macro_rules! impl_alignable {
    ($($ty:ty),+) => {
        $(
            impl Alignable for $ty {
                fn to_u64(self) -> u64 {
                    self as u64
                }

                fn checked_align(self, alignment: Self) -> Option<Self> {
                    let mask = alignment.wrapping_sub(1);
                    self.checked_add(mask).map(|v| v & !mask)
                }
            }
        )+
    };
}

impl_alignable!(u8, u16, u32, u64, usize);

/// Round `value` up to the next multiple of `alignment`.
///
/// # Panics
///
/// Panics if `alignment` is not a power of two or the result overflows.
/// Use [`try_align`] to get an error instead.
#[must_use]
pub fn align<T: Alignable>(value: T, alignment: T) -> T {
    assert!(
        is_power_of_two(alignment.to_u64()),
        "alignment {} is not a power of two",
        alignment.to_u64()
    );
    match value.checked_align(alignment) {
        Some(aligned) => aligned,
        None => panic!(
            "aligning {} to {} overflows",
            value.to_u64(),
            alignment.to_u64()
        ),
    }
}

/// Round `value` up to the next multiple of `alignment`.
///
/// # Errors
///
/// Returns [`UtilError::NotPowerOfTwo`] for a bad alignment and
/// [`UtilError::AlignOverflow`] if the result does not fit in `T`.
pub fn try_align<T: Alignable>(value: T, alignment: T) -> Result<T> {
    if !is_power_of_two(alignment.to_u64()) {
        return Err(UtilError::NotPowerOfTwo(alignment.to_u64()));
    }
    value
        .checked_align(alignment)
        .ok_or_else(|| UtilError::AlignOverflow {
            value: value.to_u64(),
            alignment: alignment.to_u64(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_power_of_two() {
        assert!(!is_power_of_two(0));
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(2));
        assert!(!is_power_of_two(3));
        assert!(is_power_of_two(1 << 63));
        assert!(!is_power_of_two(u64::MAX));
    }

    #[test]
    fn test_align() {
        assert_eq!(align(13u32, 8), 16);
        assert_eq!(align(16u32, 8), 16);
        assert_eq!(align(0u64, 256), 0);
        assert_eq!(align(1usize, 4096), 4096);
        assert_eq!(align(3u8, 1), 3);
    }

    #[test]
    #[should_panic(expected = "not a power of two")]
    fn test_align_rejects_bad_alignment() {
        let _ = align(10u32, 6);
    }

    #[test]
    fn test_try_align_errors() {
        assert!(matches!(try_align(10u32, 0), Err(UtilError::NotPowerOfTwo(0))));
        assert!(matches!(
            try_align(250u8, 16),
            Err(UtilError::AlignOverflow { value: 250, alignment: 16 })
        ));
        assert_eq!(try_align(250u16, 16).unwrap(), 256);
    }
}
