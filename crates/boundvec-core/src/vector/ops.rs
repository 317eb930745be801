//! Arithmetic for [`BoundedVector`].
//!
//! Implements:
//! - `BoundedVector<T> op T` for `+ - *` (scalar applied to every element)
//! - `BoundedVector<T> op BoundedVector<T>` for `+ -` (element-wise)
//! - `BoundedVector<T> * BoundedVector<T>` as the inner product, yielding `T`
//!
//! Vector-vector operators panic on a size mismatch; the `*_checked` methods
//! and [`BoundedVector::dot`] return
//! [`CoreError::DimensionMismatch`](crate::CoreError::DimensionMismatch) instead.

use core::ops::{Add, Mul, Sub};

use crate::Scalar;
use crate::error::Result;

use super::BoundedVector;

fn unwrap_or_panic<R>(result: Result<R>) -> R {
    match result {
        Ok(r) => r,
        Err(e) => panic!("{e}"),
    }
}

// ======================================================================
// Vector op scalar
// ======================================================================

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait<T> for BoundedVector<T> {
            type Output = BoundedVector<T>;

            fn $method(mut self, rhs: T) -> BoundedVector<T> {
                for x in &mut self.data {
                    *x = *x $op rhs;
                }
                self
            }
        }

        impl<T: Scalar> $trait<T> for &BoundedVector<T> {
            type Output = BoundedVector<T>;

            fn $method(self, rhs: T) -> BoundedVector<T> {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, +);
impl_scalar_binop!(Sub, sub, -);
impl_scalar_binop!(Mul, mul, *);

// ======================================================================
// Vector op vector  (element-wise, same size, panics on mismatch)
// ======================================================================

macro_rules! impl_vector_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $trait for &BoundedVector<T> {
            type Output = BoundedVector<T>;

            /// # Panics
            ///
            /// Panics if the operands differ in size.
            fn $method(self, rhs: &BoundedVector<T>) -> BoundedVector<T> {
                unwrap_or_panic(self.$checked(rhs))
            }
        }

        impl<T: Scalar> $trait for BoundedVector<T> {
            type Output = BoundedVector<T>;

            /// # Panics
            ///
            /// Panics if the operands differ in size.
            fn $method(self, rhs: BoundedVector<T>) -> BoundedVector<T> {
                unwrap_or_panic(self.$checked(&rhs))
            }
        }
    };
}

impl_vector_binop!(Add, add, add_checked);
impl_vector_binop!(Sub, sub, sub_checked);

impl<T: Scalar> Mul for &BoundedVector<T> {
    type Output = T;

    /// Inner product.
    ///
    /// # Panics
    ///
    /// Panics if the operands differ in size.
    fn mul(self, rhs: &BoundedVector<T>) -> T {
        unwrap_or_panic(self.dot(rhs))
    }
}

impl<T: Scalar> Mul for BoundedVector<T> {
    type Output = T;

    /// Inner product.
    ///
    /// # Panics
    ///
    /// Panics if the operands differ in size.
    fn mul(self, rhs: BoundedVector<T>) -> T {
        unwrap_or_panic(self.dot(&rhs))
    }
}

// ======================================================================
// Fallible (Result-returning) arithmetic for non-panicking callers
// ======================================================================

impl<T: Scalar> BoundedVector<T> {
    /// Element-wise addition, returning `Err` on size mismatch.
    ///
    /// ```
    /// # use boundvec_core::BoundedVector;
    /// let a = BoundedVector::from_vec(vec![1, 2, 3], 0).unwrap();
    /// let b = BoundedVector::from_vec(vec![10, 20, 30], 0).unwrap();
    /// assert_eq!(a.add_checked(&b).unwrap().as_slice(), &[11, 22, 33]);
    /// ```
    pub fn add_checked(&self, other: &BoundedVector<T>) -> Result<BoundedVector<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on size mismatch.
    pub fn sub_checked(&self, other: &BoundedVector<T>) -> Result<BoundedVector<T>> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Inner product `sum(self[k] * other[k])` over relative positions.
    ///
    /// ```
    /// # use boundvec_core::BoundedVector;
    /// let x = BoundedVector::from_vec(vec![1, 2, 3], 0).unwrap();
    /// let y = BoundedVector::from_vec(vec![4, 5, 6], 0).unwrap();
    /// assert_eq!(x.dot(&y).unwrap(), 32);
    /// ```
    pub fn dot(&self, other: &BoundedVector<T>) -> Result<T> {
        self.check_same_size(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::CoreError;

    fn filled(value: i32) -> BoundedVector<i32> {
        BoundedVector::filled(4, 0, value).unwrap()
    }

    #[test]
    fn test_add_scalar() {
        let v2 = BoundedVector::<i32>::new(4).unwrap();
        assert_eq!(&v2 + 1, filled(1));
        assert_eq!(v2.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_sub_scalar() {
        assert_eq!(filled(5) - 1, filled(4));
        assert_eq!(filled(4) - 1, filled(3));
    }

    #[test]
    fn test_mul_scalar() {
        assert_eq!(&filled(4) * 4, filled(16));
    }

    #[test]
    fn test_scalar_ops_keep_start_index() {
        let v = BoundedVector::from_vec(vec![1.0, 2.0], 3).unwrap();
        let w = &v * 2.5;
        assert_eq!(w.as_slice(), &[2.5, 5.0]);
        assert_eq!(w.start_index(), 3);
        assert_eq!((v + 1.0).start_index(), 3);
    }

    #[test]
    fn test_add_vectors() {
        let a = BoundedVector::from_vec(vec![1, 2, 3, 4], 0).unwrap();
        let b = BoundedVector::from_vec(vec![10, 20, 30, 40], 0).unwrap();
        assert_eq!((&a + &b).as_slice(), &[11, 22, 33, 44]);
        assert_eq!((a + b).as_slice(), &[11, 22, 33, 44]);
    }

    #[test]
    fn test_sub_vectors() {
        let a = BoundedVector::from_vec(vec![10, 20], 2).unwrap();
        let b = BoundedVector::from_vec(vec![1, 2], 0).unwrap();
        let c = &a - &b;
        assert_eq!(c.as_slice(), &[9, 18]);
        assert_eq!(c.start_index(), 2);
    }

    #[test]
    fn test_dot() {
        let a = BoundedVector::from_vec(vec![1, 2, 3, 4], 0).unwrap();
        let b = BoundedVector::from_vec(vec![2, 2, 2, 2], 5).unwrap();
        assert_eq!(&a * &b, 20);
        assert_eq!(a.dot(&b).unwrap(), 20);
        assert_eq!(a * b, 20);
    }

    #[test]
    fn test_dot_of_zeros() {
        let a = BoundedVector::<f64>::new(4).unwrap();
        let b = BoundedVector::<f64>::new(4).unwrap();
        assert_eq!(a.dot(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_checked_ops_mismatch() {
        let a = BoundedVector::<i32>::new(4).unwrap();
        let b = BoundedVector::<i32>::new(5).unwrap();
        let expected = CoreError::DimensionMismatch {
            expected: 4,
            got: 5,
        };
        assert_eq!(a.add_checked(&b).unwrap_err(), expected);
        assert_eq!(a.sub_checked(&b).unwrap_err(), expected);
        assert_eq!(a.dot(&b).unwrap_err(), expected);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_add_panics_on_mismatch() {
        let a = BoundedVector::<i32>::new(4).unwrap();
        let b = BoundedVector::<i32>::new(5).unwrap();
        let _ = &a + &b;
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_sub_panics_on_mismatch() {
        let a = BoundedVector::<i32>::new(4).unwrap();
        let b = BoundedVector::<i32>::new(5).unwrap();
        let _ = a - b;
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn test_mul_panics_on_mismatch() {
        let a = BoundedVector::<i32>::new(4).unwrap();
        let b = BoundedVector::<i32>::new(5).unwrap();
        let _ = &a * &b;
    }
}
