//! Element types storable in a [`BoundedVector`](crate::BoundedVector).
//!
//! Only the arithmetic the vector actually performs is required: addition,
//! subtraction and multiplication, plus an additive identity used to
//! default-initialize storage. Division and floating-point operations are
//! deliberately absent so integer vectors are first-class citizens.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub};

/// Base trait for every numeric element type.
pub trait Scalar:
    Copy
    + fmt::Debug
    + PartialEq
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + 'static
{
    /// The additive identity (`0`). Fresh storage is filled with this.
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;
}

macro_rules! impl_scalar {
    ($zero:literal, $one:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn zero() -> Self {
                    $zero
                }
                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )+
    };
}

impl_scalar!(0.0, 1.0 => f32, f64);
impl_scalar!(0, 1 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f32::one(), 1.0);
        assert_eq!(i32::zero(), 0);
        assert_eq!(u8::one(), 1);
    }

    #[test]
    fn test_zero_matches_default() {
        assert_eq!(i64::zero(), i64::default());
        assert_eq!(f64::zero(), f64::default());
        assert_eq!(usize::zero(), usize::default());
    }
}
