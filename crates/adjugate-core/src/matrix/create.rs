//! Matrix creation functions.

use crate::Scalar;
use crate::error::Result;

use super::{Matrix, check_dims};

impl<T: Scalar> Matrix<T> {
    /// Allocate a zero-filled `rows x cols` matrix.
    ///
    /// Fails with [`CoreError::InvalidShape`](crate::CoreError::InvalidShape)
    /// if either dimension is zero or the element count overflows `usize`.
    ///
    /// ```
    /// # use adjugate_core::Matrix;
    /// let m = Matrix::<f64>::new(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.as_slice().iter().all(|&x| x == 0.0));
    /// assert!(Matrix::<f64>::new(0, 3).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::full(rows, cols, T::zero())
    }

    /// Create a matrix filled with a constant value.
    pub fn full(rows: usize, cols: usize, value: T) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }

    /// Create a matrix whose element `(r, c)` is `f(r, c)`.
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> T,
    {
        let len = check_dims(rows, cols)?;
        let mut data = Vec::with_capacity(len);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Ok(Self { data, rows, cols })
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use adjugate_core::Matrix;
    /// let eye = Matrix::<f64>::identity(3).unwrap();
    /// assert_eq!(eye[(0, 0)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }
}
