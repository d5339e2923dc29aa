//! Linear algebra on dense matrices.
//!
//! All routines are implemented from scratch, with no external BLAS/LAPACK
//! bindings.
//!
//! | Routine | Method | Complexity |
//! |---------|--------|------------|
//! | [`gemm`], [`Matrix::matmul`] | ijk triple loop | O(n^3) |
//! | [`det`] | Laplace expansion along row 0 | O(n!) |
//! | [`cofactors`], [`adjugate`] | one determinant per cell | O(n^2 (n-1)!) |
//! | [`inv`] | `adj(A) / det(A)` | O(n^2 (n-1)!) |

pub mod blas;
mod laplace;

pub use blas::gemm;

use crate::Float;
use crate::error::Result;
use crate::matrix::Matrix;

/// Compute the determinant of a square matrix.
///
/// Fails with `InvalidShape` on a malformed matrix and `ShapeMismatch` on a
/// non-square one.
///
/// ```
/// # use adjugate_core::Matrix;
/// # use adjugate_core::linalg;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(linalg::det(&a).unwrap(), -2.0);
/// ```
pub fn det<T: Float>(a: &Matrix<T>) -> Result<T> {
    laplace::determinant(a)
}

/// Compute the cofactor matrix `C[i][j] = (-1)^(i+j) * det(minor(i, j))`.
///
/// A 1x1 matrix maps to itself.
///
/// ```
/// # use adjugate_core::Matrix;
/// # use adjugate_core::linalg;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let c = linalg::cofactors(&a).unwrap();
/// assert_eq!(c.as_slice(), &[4.0, -3.0, -2.0, 1.0]);
/// ```
pub fn cofactors<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    laplace::cofactor_matrix(a)
}

/// Compute the adjugate (transposed cofactor matrix).
///
/// The adjugate of a 1x1 matrix is `[[1]]`.
///
/// ```
/// # use adjugate_core::Matrix;
/// # use adjugate_core::linalg;
/// let a = Matrix::from_rows(&[[5.0]]).unwrap();
/// assert_eq!(linalg::adjugate(&a).unwrap().as_slice(), &[1.0]);
/// ```
pub fn adjugate<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    laplace::adjugate(a)
}

/// Compute the inverse of a square matrix as `adj(A) / det(A)`.
///
/// Returns [`CoreError::Singular`](crate::CoreError::Singular) if the
/// determinant is exactly zero.
///
/// ```
/// # use adjugate_core::Matrix;
/// # use adjugate_core::linalg;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let inv = linalg::inv(&a).unwrap();
/// // A * A^-1 ≈ I
/// let eye = a.matmul(&inv).unwrap();
/// assert!(eye.approx_eq(&Matrix::identity(2).unwrap()));
/// ```
pub fn inv<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    laplace::inverse(a)
}

// ======================================================================
// Convenience methods on Matrix
// ======================================================================

impl<T: Float> Matrix<T> {
    /// Determinant by cofactor expansion. See [`det`].
    pub fn det(&self) -> Result<T> {
        det(self)
    }

    /// Cofactor matrix. See [`cofactors`].
    pub fn cofactors(&self) -> Result<Matrix<T>> {
        cofactors(self)
    }

    /// Adjugate matrix. See [`adjugate`].
    pub fn adjugate(&self) -> Result<Matrix<T>> {
        adjugate(self)
    }

    /// Inverse matrix. See [`inv`].
    pub fn inv(&self) -> Result<Matrix<T>> {
        inv(self)
    }
}
