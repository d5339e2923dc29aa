//! Element-wise arithmetic for [`Matrix`].
//!
//! The named methods (`add`, `sub`, `scale`) validate their operands and
//! return [`Result`]. The operator impls are shorthand for callers who have
//! already checked shapes:
//! - `&Matrix<T> + &Matrix<T>`, `&Matrix<T> - &Matrix<T>` (panic on mismatch)
//! - `&Matrix<T> * T` (scalar multiply)
//! - `-Matrix<T>` for `Float` matrices

use core::ops::{Add, Mul, Neg, Sub};

use crate::error::Result;
use crate::{Float, Scalar};

use super::Matrix;

// ======================================================================
// Fallible arithmetic
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// Element-wise sum of two same-shape matrices.
    ///
    /// Fails with `InvalidShape` if either operand is malformed and with
    /// `ShapeMismatch` if the shapes differ.
    ///
    /// ```
    /// # use adjugate_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[6.0, 8.0, 10.0, 12.0]);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.elementwise(other, "add", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.elementwise(other, "sub", |a, b| a - b)
    }

    /// Multiply every element by `k`.
    pub fn scale(&self, k: T) -> Result<Matrix<T>> {
        self.ensure_well_formed("scale")?;
        Ok(Matrix {
            data: self.data.iter().map(|&a| a * k).collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }
}

// ======================================================================
// Operators
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait for &Matrix<T> {
            type Output = Matrix<T>;

            /// # Panics
            ///
            /// Panics if the shapes differ.
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                assert_eq!(
                    self.shape(), rhs.shape(),
                    "shape mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.shape(), rhs.shape(),
                );
                let data = self.data.iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect();
                Matrix {
                    data,
                    rows: self.rows,
                    cols: self.cols,
                }
            }
        }
    };
}

impl_matrix_binop!(Add, add, +);
impl_matrix_binop!(Sub, sub, -);

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        Matrix {
            data: self.data.iter().map(|&a| a * k).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Float> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        for x in &mut self.data {
            *x = -*x;
        }
        self
    }
}
