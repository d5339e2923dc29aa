//! # adjugate
//!
//! A small dense-matrix library: element-wise arithmetic, matrix multiply,
//! transpose, and determinant / cofactor / inverse by Laplace expansion.
//!
//! One `use adjugate::prelude::*;` gives you [`Matrix`](prelude::Matrix),
//! the error type, and the grid collaborator.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | `Matrix`, `linalg`, `Grid` |

#[cfg(feature = "core")]
pub use adjugate_core as core;

/// Glob-import convenience: `use adjugate::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use adjugate_core::prelude::*;
}
