use thiserror::Error;

/// All errors returned by `boundvec-core`.
///
/// Every variant is a precondition violation detected before any state
/// change, so a failed call leaves its operands exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Requested size is non-positive or above [`MAX_VECTOR_SIZE`](crate::MAX_VECTOR_SIZE).
    #[error("invalid vector size {size}: must be in 1..={max}")]
    InvalidSize { size: isize, max: usize },

    /// Requested start index is negative.
    #[error("invalid start index {start_index}: must be non-negative")]
    InvalidStartIndex { start_index: isize },

    /// Logical index falls outside `[start_index, start_index + size - 1]`.
    #[error(
        "index {index} out of range for vector with start index {start_index} and size {size}"
    )]
    IndexOutOfRange {
        index: usize,
        start_index: usize,
        size: usize,
    },

    /// Binary vector operation between operands of unequal size.
    #[error("dimension mismatch: expected size {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Convenience alias used throughout `boundvec-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
