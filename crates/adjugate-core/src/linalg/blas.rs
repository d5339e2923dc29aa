//! Matrix-matrix multiply (BLAS level 3).

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// General matrix-matrix multiply: `C = alpha * A * B + beta * C`.
///
/// - `a` must be `[m, k]`.
/// - `b` must be `[k, n]`.
/// - `c` must be `[m, n]`.
///
/// Each dot product is accumulated from zero with `k` ascending. If `beta`
/// is zero, `c` is overwritten (not read).
///
/// ```
/// # use adjugate_core::Matrix;
/// # use adjugate_core::linalg::gemm;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// let mut c = Matrix::<f64>::new(2, 2).unwrap();
/// gemm(1.0, &a, &b, 0.0, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn gemm<T: Scalar>(
    alpha: T,
    a: &Matrix<T>,
    b: &Matrix<T>,
    beta: T,
    c: &mut Matrix<T>,
) -> Result<()> {
    a.ensure_well_formed("gemm")?;
    b.ensure_well_formed("gemm")?;
    c.ensure_well_formed("gemm")?;

    let (m, k) = a.shape();
    let n = b.cols();

    if b.rows() != k {
        log::debug!(
            "gemm: inner dimensions differ, {:?} x {:?}",
            a.shape(),
            b.shape()
        );
        return Err(CoreError::ShapeMismatch {
            op: "gemm",
            expected: (k, n),
            got: b.shape(),
        });
    }
    if c.shape() != (m, n) {
        return Err(CoreError::ShapeMismatch {
            op: "gemm",
            expected: (m, n),
            got: c.shape(),
        });
    }

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let overwrite = beta == T::zero();
    let c_data = c.as_mut_slice();

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            let a_row = i * k;
            for p in 0..k {
                sum += a_data[a_row + p] * b_data[p * n + j];
            }
            let c_idx = i * n + j;
            c_data[c_idx] = if overwrite {
                alpha * sum
            } else {
                alpha * sum + beta * c_data[c_idx]
            };
        }
    }

    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// Matrix-matrix multiply: returns `self @ other`.
    ///
    /// Fails with `InvalidShape` on a malformed operand and with
    /// `ShapeMismatch` unless `self.cols() == other.rows()`.
    ///
    /// ```
    /// # use adjugate_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[1.0], [1.0], [1.0]]).unwrap();
    /// assert_eq!(a.matmul(&b).unwrap().as_slice(), &[6.0]);
    /// assert!(b.matmul(&b).is_err());
    /// ```
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.ensure_well_formed("matmul")?;
        other.ensure_well_formed("matmul")?;
        if self.cols() != other.rows() {
            log::debug!(
                "matmul: inner dimensions differ, {:?} x {:?}",
                self.shape(),
                other.shape()
            );
            return Err(CoreError::ShapeMismatch {
                op: "matmul",
                expected: (self.cols(), other.cols()),
                got: other.shape(),
            });
        }
        let mut c = Matrix::new(self.rows(), other.cols())?;
        gemm(T::one(), self, other, T::zero(), &mut c)?;
        Ok(c)
    }
}
