//! # boundvec
//!
//! Fixed-size numeric vectors with value semantics, a configurable base index
//! and range-checked access.
//!
//! One `use boundvec::prelude::*;` gives you [`BoundedVector`](prelude::BoundedVector),
//! the [`Scalar`](prelude::Scalar) element trait and the error taxonomy.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | The bounded vector type and its arithmetic |
//! | `serde` | `Serialize` / validating `Deserialize` for vectors (implies `core`) |
//!
//! With `--no-default-features` the crate exports nothing.

#[cfg(feature = "core")]
pub use boundvec_core as core;

/// Glob-import convenience: `use boundvec::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use boundvec_core::prelude::*;
}
