//! `boundvec-core`: foundation crate for bounded vectors.
//!
//! Provides [`BoundedVector`], a fixed-size numeric vector with value
//! semantics, an optional non-zero base index and range-checked access, plus
//! the [`Scalar`] element trait and the [`CoreError`] taxonomy.
//!
//! # Design
//!
//! - Every vector exclusively owns its storage; cloning is a deep copy.
//! - Fallible operations return [`Result`]. Operator forms (`v[i]`, `&a + &b`)
//!   panic with the corresponding [`CoreError`] message instead.
//! - Sizes are capped by [`MAX_VECTOR_SIZE`].

pub mod dtype;
pub mod error;
pub mod limits;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use dtype::Scalar;
pub use error::{CoreError, Result};
pub use limits::MAX_VECTOR_SIZE;
pub use vector::BoundedVector;

/// Items intended for glob-import: `use boundvec_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::Scalar;
    pub use crate::error::{CoreError, Result};
    pub use crate::limits::MAX_VECTOR_SIZE;
    pub use crate::vector::BoundedVector;
}
