//! Tolerance-based equality.

use crate::Float;

use super::Matrix;

/// Two cells are equal when they differ by strictly less than this.
pub const EQ_TOLERANCE: f64 = 1e-7;

impl<T: Float> Matrix<T> {
    /// Compare two matrices cell by cell with [`EQ_TOLERANCE`].
    ///
    /// Returns `false` (never an error) if either matrix is malformed or the
    /// shapes differ. A cell pair that differs by exactly the tolerance, or
    /// that involves a NaN, compares unequal.
    ///
    /// ```
    /// # use adjugate_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[1.0 + 1e-9, 2.0]]).unwrap();
    /// assert!(a.approx_eq(&b));
    /// assert_ne!(a, b);
    /// ```
    pub fn approx_eq(&self, other: &Matrix<T>) -> bool {
        self.approx_eq_with(other, T::from_f64(EQ_TOLERANCE))
    }

    /// Like [`approx_eq`](Self::approx_eq) with an explicit tolerance.
    pub fn approx_eq_with(&self, other: &Matrix<T>, tol: T) -> bool {
        if !self.is_well_formed() || !other.is_well_formed() {
            return false;
        }
        if self.shape() != other.shape() {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() < tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive() {
        let a = Matrix::from_rows(&[[1.5, -2.0, 3.25], [0.0, 1e9, -1e-9]]).unwrap();
        assert!(a.approx_eq(&a));
    }

    #[test]
    fn test_tolerance_boundary() {
        let a = Matrix::from_rows(&[[0.0, 1.0], [2.0, 3.0]]).unwrap();

        let exact = Matrix::from_rows(&[[EQ_TOLERANCE, 1.0], [2.0, 3.0]]).unwrap();
        assert!(!a.approx_eq(&exact));

        let below = Matrix::from_rows(&[[EQ_TOLERANCE / 2.0, 1.0], [2.0, 3.0]]).unwrap();
        assert!(a.approx_eq(&below));
    }

    #[test]
    fn test_shape_difference() {
        let a = Matrix::<f64>::new(2, 3).unwrap();
        let b = Matrix::<f64>::new(3, 2).unwrap();
        assert!(!a.approx_eq(&b));
    }

    #[test]
    fn test_released_is_never_equal() {
        let a = Matrix::<f64>::identity(2).unwrap();
        let mut b = a.clone();
        b.release();
        assert!(!a.approx_eq(&b));
        assert!(!b.approx_eq(&a));
        assert!(!b.approx_eq(&b));
    }

    #[test]
    fn test_nan_is_unequal() {
        let a = Matrix::from_rows(&[[f64::NAN]]).unwrap();
        assert!(!a.approx_eq(&a));
    }

    #[test]
    fn test_custom_tolerance() {
        let a = Matrix::from_rows(&[[1.0_f32]]).unwrap();
        let b = Matrix::from_rows(&[[1.01_f32]]).unwrap();
        assert!(!a.approx_eq(&b));
        assert!(a.approx_eq_with(&b, 0.1));
    }
}
