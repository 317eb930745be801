//! Process-wide bounds shared by every vector.

/// Largest size a [`BoundedVector`](crate::BoundedVector) may be constructed with.
///
/// Large enough for realistic dense work, small enough that a garbage size
/// (an uninitialized or overflowed value) is rejected instead of triggering a
/// multi-gigabyte allocation.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
