//! Structural transforms: transpose and minor extraction.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Transpose: a `cols x rows` matrix with `result[c][r] = self[r][c]`.
    ///
    /// ```
    /// # use adjugate_core::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let t = m.transpose().unwrap();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn transpose(&self) -> Result<Self> {
        self.ensure_well_formed("transpose")?;
        let (rows, cols) = self.shape();
        let mut data = vec![T::zero(); rows * cols];

        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }

        Ok(Matrix {
            data,
            rows: cols,
            cols: rows,
        })
    }

    /// The matrix with row `row` and column `col` removed.
    ///
    /// Requires at least two rows and two columns.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        self.ensure_well_formed("minor")?;
        if self.rows < 2 || self.cols < 2 {
            return Err(CoreError::InvalidShape {
                rows: self.rows,
                cols: self.cols,
                reason: "a minor needs at least two rows and two columns",
            });
        }
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                index: (row, col),
                shape: self.shape(),
            });
        }
        Ok(self.minor_unchecked(row, col))
    }

    /// [`minor`](Self::minor) without validation; the caller guarantees a
    /// well-formed matrix of at least 2x2 and in-range indices.
    pub(crate) fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for (r, line) in self.iter_rows().enumerate() {
            if r == row {
                continue;
            }
            data.extend(
                line.iter()
                    .enumerate()
                    .filter(|&(c, _)| c != col)
                    .map(|(_, &v)| v),
            );
        }
        Matrix {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }
}
