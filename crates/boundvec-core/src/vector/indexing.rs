//! Range-checked logical indexing for [`BoundedVector`].
//!
//! `get` / `get_mut` / `set` return [`CoreError::IndexOutOfRange`] for an
//! index outside `[start_index, start_index + size - 1]`. The `v[i]` operator
//! forms panic with the same message.

use core::ops::{Index, IndexMut};

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::BoundedVector;

impl<T: Scalar> BoundedVector<T> {
    /// Translate a logical index into a buffer offset.
    fn offset(&self, index: usize) -> Result<usize> {
        if self.contains_index(index) {
            return Ok(index - self.start_index);
        }
        tracing::debug!(
            index,
            start_index = self.start_index,
            size = self.size(),
            "rejected out-of-range index"
        );
        Err(CoreError::IndexOutOfRange {
            index,
            start_index: self.start_index,
            size: self.size(),
        })
    }

    /// Get a reference to the element at logical `index`.
    ///
    /// ```
    /// # use boundvec_core::{BoundedVector, CoreError};
    /// let v = BoundedVector::from_vec(vec![10, 20, 30], 1).unwrap();
    /// assert_eq!(*v.get(1).unwrap(), 10);
    /// assert_eq!(*v.get(3).unwrap(), 30);
    /// assert!(matches!(v.get(0), Err(CoreError::IndexOutOfRange { .. })));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Get a mutable reference to the element at logical `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let offset = self.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Set the element at logical `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}

impl<T: Scalar> Index<usize> for BoundedVector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is outside `[start_index, end_index]`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for BoundedVector<T> {
    /// # Panics
    ///
    /// Panics if `index` is outside `[start_index, end_index]`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}
