//! Error type shared by every fallible operation in `adjugate-core`.

use thiserror::Error;

/// All errors returned by `adjugate-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The operand is released, has a zero dimension, or its data does not
    /// fill the requested shape.
    #[error("invalid shape {rows}x{cols}: {reason}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// Operand shapes are incompatible for the operation.
    #[error("shape mismatch in {op}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// The determinant is exactly zero, so no inverse exists.
    #[error("singular matrix: determinant is zero")]
    Singular,

    /// A `(row, col)` index lies outside the shape.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },
}

/// Convenience alias used throughout `adjugate-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = CoreError::InvalidShape {
            rows: 0,
            cols: 3,
            reason: "zero dimension",
        };
        assert_eq!(e.to_string(), "invalid shape 0x3: zero dimension");

        let e = CoreError::ShapeMismatch {
            op: "matmul",
            expected: (3, 2),
            got: (2, 2),
        };
        assert_eq!(
            e.to_string(),
            "shape mismatch in matmul: expected (3, 2), got (2, 2)"
        );

        assert_eq!(
            CoreError::Singular.to_string(),
            "singular matrix: determinant is zero"
        );
    }
}
