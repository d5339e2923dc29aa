//! `adjugate-core`: dense matrices with cofactor-expansion linear algebra.
//!
//! Provides the [`Matrix`] type, element-wise arithmetic, matrix multiply,
//! transpose, and determinant / cofactor / inverse computed by Laplace
//! expansion, plus a small integer [`Grid`](grid::Grid) for maze
//! front-ends.
//!
//! # Design
//!
//! - Contiguous row-major storage; every operation returns a freshly
//!   allocated matrix and never aliases its inputs.
//! - Generic over element types via the [`Scalar`] / [`Float`] traits,
//!   with `f64` as the default.
//! - Every fallible operation returns [`Result`]; diagnostics go through the
//!   `log` facade and the crate never installs a logger.
//!
//! ```
//! use adjugate_core::prelude::*;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(a.det().unwrap(), -2.0);
//! let expected = Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]).unwrap();
//! assert!(a.inv().unwrap().approx_eq(&expected));
//! ```

pub mod dtype;
pub mod error;
pub mod grid;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use matrix::{EQ_TOLERANCE, Matrix};

/// Items intended for glob-import: `use adjugate_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::grid::Grid;
    pub use crate::matrix::{EQ_TOLERANCE, Matrix};
}
