//! Fixed-size vector with a logical base index and contiguous storage.
//!
//! A [`BoundedVector`] addresses its elements through *logical* indices in
//! `[start_index, start_index + size - 1]`. Storage is a single owned buffer;
//! logical index `i` lives at buffer offset `i - start_index`.

mod indexing;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::limits::MAX_VECTOR_SIZE;

/// A bounds-validated numeric vector with value semantics.
///
/// The vector owns its data and cloning performs a deep copy, so two
/// instances never share storage. Size and start index are fixed at
/// construction and only change through whole-object assignment
/// ([`Clone::clone_from`]).
///
/// # Type Parameters
///
/// - `T`: The element type, which must implement [`Scalar`].
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: ::serde::Serialize")))]
pub struct BoundedVector<T: Scalar> {
    data: Vec<T>,
    start_index: usize,
}

impl<T: Scalar> BoundedVector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a zero-filled vector of `size` elements starting at index 0.
    ///
    /// ```
    /// # use boundvec_core::BoundedVector;
    /// let v = BoundedVector::<i32>::new(5).unwrap();
    /// assert_eq!(v.size(), 5);
    /// assert_eq!(v.start_index(), 0);
    /// assert!(v.iter().all(|&x| x == 0));
    /// ```
    pub fn new(size: isize) -> Result<Self> {
        Self::with_start_index(size, 0)
    }

    /// Create a zero-filled vector of `size` elements whose first valid
    /// logical index is `start_index`.
    ///
    /// Returns [`CoreError::InvalidSize`] unless `0 < size <= MAX_VECTOR_SIZE`
    /// and [`CoreError::InvalidStartIndex`] if `start_index` is negative. Size
    /// is checked first.
    ///
    /// ```
    /// # use boundvec_core::{BoundedVector, CoreError};
    /// let v = BoundedVector::<i32>::with_start_index(4, 2).unwrap();
    /// assert_eq!(v.end_index(), 5);
    ///
    /// let err = BoundedVector::<i32>::with_start_index(5, -2).unwrap_err();
    /// assert_eq!(err, CoreError::InvalidStartIndex { start_index: -2 });
    /// ```
    pub fn with_start_index(size: isize, start_index: isize) -> Result<Self> {
        Self::filled(size, start_index, T::zero())
    }

    /// Create a vector with every element set to `value`.
    pub fn filled(size: isize, start_index: isize, value: T) -> Result<Self> {
        let size = validate_size(size)?;
        let start_index = validate_start_index(start_index)?;
        Ok(Self {
            data: vec![value; size],
            start_index,
        })
    }

    /// Create a vector that takes ownership of `data`.
    ///
    /// The same size and start-index rules as [`with_start_index`] apply, with
    /// `data.len()` as the size.
    ///
    /// [`with_start_index`]: Self::with_start_index
    pub fn from_vec(data: Vec<T>, start_index: isize) -> Result<Self> {
        validate_size(isize::try_from(data.len()).unwrap_or(isize::MAX))?;
        let start_index = validate_start_index(start_index)?;
        Ok(Self { data, start_index })
    }

    /// Create a vector from a slice (copies the data).
    pub fn from_slice(data: &[T], start_index: isize) -> Result<Self> {
        Self::from_vec(data.to_vec(), start_index)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The first valid logical index.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// The last valid logical index, `start_index + size - 1`.
    #[inline]
    pub fn end_index(&self) -> usize {
        self.start_index + self.data.len() - 1
    }

    /// Whether `index` is a valid logical index for this vector.
    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        index >= self.start_index && index - self.start_index < self.data.len()
    }

    /// All elements in logical order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the vector and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in logical order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in logical order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Map
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new vector with the
    /// same size and start index.
    pub fn map<F>(&self, f: F) -> BoundedVector<T>
    where
        F: Fn(T) -> T,
    {
        BoundedVector {
            data: self.data.iter().map(|&x| f(x)).collect(),
            start_index: self.start_index,
        }
    }

    /// Apply a function element-wise to two vectors of the same size.
    ///
    /// Elements are paired by relative position; the result takes `self`'s
    /// start index.
    pub fn zip_map<F>(&self, other: &BoundedVector<T>, f: F) -> Result<BoundedVector<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(BoundedVector {
            data,
            start_index: self.start_index,
        })
    }

    pub(crate) fn check_same_size(&self, other: &BoundedVector<T>) -> Result<()> {
        if self.size() == other.size() {
            return Ok(());
        }
        tracing::debug!(
            expected = self.size(),
            got = other.size(),
            "rejected binary operation on vectors of unequal size"
        );
        Err(CoreError::DimensionMismatch {
            expected: self.size(),
            got: other.size(),
        })
    }
}

impl<T: Scalar> Clone for BoundedVector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            start_index: self.start_index,
        }
    }

    /// Whole-object assignment: size, start index and elements all come from
    /// `source`. The existing allocation is reused when large enough.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.start_index = source.start_index;
    }
}

/// Equal sizes and equal elements at each relative position. The start index
/// does not take part in the comparison.
impl<T: Scalar> PartialEq for BoundedVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.data == other.data
    }
}

// ======================================================================
// Validation
// ======================================================================

fn validate_size(size: isize) -> Result<usize> {
    match usize::try_from(size) {
        Ok(n) if n > 0 && n <= MAX_VECTOR_SIZE => Ok(n),
        _ => {
            tracing::debug!(size, max = MAX_VECTOR_SIZE, "rejected vector size");
            Err(CoreError::InvalidSize {
                size,
                max: MAX_VECTOR_SIZE,
            })
        }
    }
}

fn validate_start_index(start_index: isize) -> Result<usize> {
    usize::try_from(start_index).map_err(|_| {
        tracing::debug!(start_index, "rejected negative start index");
        CoreError::InvalidStartIndex { start_index }
    })
}
