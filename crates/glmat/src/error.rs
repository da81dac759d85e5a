use std::fmt;

use crate::matrix::Rank;

/// Rejected input to a matrix operation.
///
/// Every variant is an invalid-argument error: the call that produced it
/// has no partial result and retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// `multiply` was called with no matrices.
    EmptyChain,
    /// Element `index` of a chain has a different rank than element 0.
    RankMismatch {
        index: usize,
        expected: Rank,
        found: Rank,
    },
    /// A flat sequence did not hold 9 or 16 elements.
    BadLength { len: usize },
    /// Projection dimensions are zero, negative, or not finite.
    DegenerateViewport { width: f64, height: f64, depth: Option<f64> },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::EmptyChain => {
                write!(f, "invalid argument: cannot multiply an empty chain")
            }
            MatrixError::RankMismatch { index, expected, found } => write!(
                f,
                "invalid argument: chain element {index} is {found}, expected {expected}"
            ),
            MatrixError::BadLength { len } => write!(
                f,
                "invalid argument: matrix must have 9 or 16 elements, got {len}"
            ),
            MatrixError::DegenerateViewport { width, height, depth: None } => write!(
                f,
                "invalid argument: degenerate viewport {width}x{height}"
            ),
            MatrixError::DegenerateViewport { width, height, depth: Some(depth) } => write!(
                f,
                "invalid argument: degenerate viewport {width}x{height}x{depth}"
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_element() {
        let e = MatrixError::RankMismatch { index: 2, expected: Rank::Three, found: Rank::Four };
        assert_eq!(e.to_string(), "invalid argument: chain element 2 is 4x4, expected 3x3");
    }

    #[test]
    fn display_viewport_with_and_without_depth() {
        let flat = MatrixError::DegenerateViewport { width: 0.0, height: 600.0, depth: None };
        assert_eq!(flat.to_string(), "invalid argument: degenerate viewport 0x600");

        let boxed =
            MatrixError::DegenerateViewport { width: 800.0, height: 600.0, depth: Some(-1.0) };
        assert_eq!(boxed.to_string(), "invalid argument: degenerate viewport 800x600x-1");
    }
}
