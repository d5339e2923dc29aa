//! Dense two-dimensional matrix with contiguous row-major storage.
//!
//! A [`Matrix`] owns exactly `rows * cols` elements. The only way to obtain
//! a matrix with a zero dimension is [`Matrix::release`]; such a matrix is
//! *malformed* and every operation rejects it with
//! [`CoreError::InvalidShape`] before touching its data.

mod compare;
mod create;
mod display;
mod ops;
mod structure;

pub use compare::EQ_TOLERANCE;

use core::ops::{Index, IndexMut};

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A dense `rows x cols` matrix.
///
/// Element `(r, c)` lives at `data[r * cols + c]`. Cloning performs a deep
/// copy; dropping frees the storage.
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from a flat row-major vector.
    ///
    /// Returns [`CoreError::InvalidShape`] if either dimension is zero, if
    /// `rows * cols` overflows `usize`, or if it does not equal `data.len()`.
    ///
    /// ```
    /// # use adjugate_core::Matrix;
    /// let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if check_dims(rows, cols)? != data.len() {
            return Err(CoreError::InvalidShape {
                rows,
                cols,
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a flat row-major slice (copies the data).
    pub fn from_slice(data: &[T], rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(data.to_vec(), rows, cols)
    }

    /// Create a matrix from a slice of rows.
    ///
    /// ```
    /// # use adjugate_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.row(1).unwrap(), &[3.0, 4.0]);
    /// ```
    pub fn from_rows<const C: usize>(rows: &[[T; C]]) -> Result<Self> {
        Self::from_vec(rows.iter().flatten().copied().collect(), rows.len(), C)
    }

    // ------------------------------------------------------------------
    // Release
    // ------------------------------------------------------------------

    /// Free the storage and reset both dimensions to zero.
    ///
    /// The matrix is malformed afterwards. Releasing twice is a no-op.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether the matrix holds storage for a non-empty shape.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.rows > 0
            && self.cols > 0
            && self.rows.checked_mul(self.cols) == Some(self.data.len())
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat slice of all elements in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return the underlying row-major `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrow row `r` as a slice.
    pub fn row(&self, r: usize) -> Result<&[T]> {
        if r >= self.rows {
            return Err(CoreError::IndexOutOfBounds {
                index: (r, 0),
                shape: self.shape(),
            });
        }
        Ok(&self.data[r * self.cols..(r + 1) * self.cols])
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on zero, and a released matrix has no data anyway.
        self.data.chunks(self.cols.max(1))
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn flat_index(&self, r: usize, c: usize) -> Result<usize> {
        if r >= self.rows || c >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                index: (r, c),
                shape: self.shape(),
            });
        }
        Ok(r * self.cols + c)
    }

    /// The element at `(r, c)`.
    pub fn get(&self, r: usize, c: usize) -> Result<T> {
        let flat = self.flat_index(r, c)?;
        Ok(self.data[flat])
    }

    /// Overwrite the element at `(r, c)`.
    pub fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        let flat = self.flat_index(r, c)?;
        self.data[flat] = value;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Map / apply
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    pub fn map<F>(&self, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T) -> T,
    {
        self.ensure_well_formed("map")?;
        Ok(Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Apply a function element-wise to two matrices of the same shape.
    pub fn zip_map<F>(&self, other: &Matrix<T>, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.elementwise(other, "zip_map", f)
    }

    pub(crate) fn elementwise<F>(
        &self,
        other: &Matrix<T>,
        op: &'static str,
        f: F,
    ) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.ensure_well_formed(op)?;
        other.ensure_well_formed(op)?;
        if self.shape() != other.shape() {
            log::debug!(
                "{op}: shape mismatch {:?} vs {:?}",
                self.shape(),
                other.shape()
            );
            return Err(CoreError::ShapeMismatch {
                op,
                expected: self.shape(),
                got: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Reject released or otherwise malformed matrices.
    pub(crate) fn ensure_well_formed(&self, op: &'static str) -> Result<()> {
        if self.is_well_formed() {
            return Ok(());
        }
        log::debug!(
            "{op}: rejected malformed {}x{} matrix",
            self.rows,
            self.cols
        );
        Err(CoreError::InvalidShape {
            rows: self.rows,
            cols: self.cols,
            reason: "matrix is released or has a zero dimension",
        })
    }

    /// Reject malformed and non-square matrices.
    pub(crate) fn ensure_square(&self, op: &'static str) -> Result<()> {
        self.ensure_well_formed(op)?;
        if !self.is_square() {
            log::debug!(
                "{op}: rejected non-square {}x{} matrix",
                self.rows,
                self.cols
            );
            return Err(CoreError::ShapeMismatch {
                op,
                expected: (self.rows, self.rows),
                got: self.shape(),
            });
        }
        Ok(())
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    /// Exact element-wise equality. See [`Matrix::approx_eq`] for the
    /// tolerance-based comparison.
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(r, c)` is outside the shape.
    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for shape {:?}",
            self.shape()
        );
        &self.data[r * self.cols + c]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of bounds for shape {:?}",
            self.shape()
        );
        &mut self.data[r * self.cols + c]
    }
}

// ======================================================================
// Utility functions
// ======================================================================

/// Validate a requested shape and return its element count.
pub(crate) fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        log::debug!("rejected {rows}x{cols} shape");
        return Err(CoreError::InvalidShape {
            rows,
            cols,
            reason: "both dimensions must be positive",
        });
    }
    rows.checked_mul(cols).ok_or_else(|| {
        log::debug!("rejected {rows}x{cols} shape: element count overflows");
        CoreError::InvalidShape {
            rows,
            cols,
            reason: "shape overflows usize",
        }
    })
}
