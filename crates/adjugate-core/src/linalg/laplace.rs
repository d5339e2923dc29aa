//! Determinant, cofactor matrix and inverse by Laplace (cofactor) expansion.
//!
//! The determinant of an `n x n` matrix is expanded along row 0:
//!
//! ```text
//! det(A) = sum_i (-1)^i * A[0][i] * det(minor(A, 0, i))
//! ```
//!
//! with direct formulas for `n = 1` and `n = 2`. Every level of the
//! recursion builds one temporary minor and drops it before returning, so
//! the cost is factorial in `n`. These routines are meant for small
//! matrices.
//!
//! The inverse is the adjugate (transposed cofactor matrix) scaled by
//! `1 / det(A)`.

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Determinant of a square matrix.
pub(crate) fn determinant<T: Float>(a: &Matrix<T>) -> Result<T> {
    a.ensure_square("det")?;
    log::trace!("det: expanding order {}", a.rows());
    Ok(expand(a))
}

/// Cofactor matrix: `C[i][j] = (-1)^(i+j) * det(minor(A, i, j))`.
///
/// A 1x1 matrix is its own cofactor matrix.
pub(crate) fn cofactor_matrix<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    a.ensure_square("cofactors")?;
    let n = a.rows();
    log::trace!("cofactors: {} minors of order {}", n * n, n.saturating_sub(1));
    if n == 1 {
        return Ok(a.clone());
    }

    let mut out = Matrix::new(n, n)?;
    for i in 0..n {
        for j in 0..n {
            let d = expand(&a.minor_unchecked(i, j));
            out[(i, j)] = signed(i + j, d);
        }
    }
    Ok(out)
}

/// Adjugate: the transpose of the cofactor matrix.
///
/// The adjugate of any 1x1 matrix is `[[1]]`, which keeps
/// `A * adj(A) = det(A) * I` true for order 1 even though
/// [`cofactor_matrix`] maps a 1x1 input to itself.
pub(crate) fn adjugate<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    a.ensure_square("adjugate")?;
    if a.rows() == 1 {
        return Matrix::identity(1);
    }
    cofactor_matrix(a)?.transpose()
}

/// Inverse via `adj(A) / det(A)`.
///
/// Fails with [`CoreError::Singular`] only when the determinant is exactly
/// zero; nearly singular inputs produce large but finite entries.
pub(crate) fn inverse<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    let det = determinant(a)?;
    if det == T::zero() {
        log::debug!("inv: {}x{} matrix is singular", a.rows(), a.cols());
        return Err(CoreError::Singular);
    }
    adjugate(a)?.scale(det.recip())
}

/// Recursive expansion along row 0. `a` must be well-formed and square.
fn expand<T: Float>(a: &Matrix<T>) -> T {
    match a.rows() {
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(1, 0)] * a[(0, 1)],
        n => {
            let mut det = T::zero();
            for i in 0..n {
                let minor = a.minor_unchecked(0, i);
                det += signed(i, a[(0, i)]) * expand(&minor);
            }
            det
        }
    }
}

/// `(-1)^k * v`.
#[inline]
fn signed<T: Float>(k: usize, v: T) -> T {
    if k % 2 == 0 { v } else { -v }
}
