//! Rank-erased matrices for chains assembled from untyped flat sequences.
//!
//! Typed callers should prefer [`Mat3::multiply`] / [`Mat4::multiply`], where
//! mixing ranks cannot compile.

use std::fmt;

use crate::error::MatrixError;
use crate::{Mat3, Mat4};

/// Matrix dimension.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rank {
    /// 3x3, 2D transforms.
    Three,
    /// 4x4, 3D transforms.
    Four,
}

impl Rank {
    /// Number of stored elements.
    #[inline]
    pub const fn element_count(self) -> usize {
        match self {
            Rank::Three => 9,
            Rank::Four => 16,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Three => f.write_str("3x3"),
            Rank::Four => f.write_str("4x4"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Matrix {
    M3(Mat3),
    M4(Mat4),
}

impl Matrix {
    /// Picks the rank from the slice length (9 or 16).
    pub fn from_slice(values: &[f64]) -> Result<Self, MatrixError> {
        match values.len() {
            9 => Mat3::from_slice(values).map(Matrix::M3),
            16 => Mat4::from_slice(values).map(Matrix::M4),
            len => Err(MatrixError::BadLength { len }),
        }
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        match self {
            Matrix::M3(_) => Rank::Three,
            Matrix::M4(_) => Rank::Four,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Matrix::M3(m) => m.as_slice(),
            Matrix::M4(m) => m.as_slice(),
        }
    }
}

impl From<Mat3> for Matrix {
    fn from(m: Mat3) -> Self {
        Matrix::M3(m)
    }
}

impl From<Mat4> for Matrix {
    fn from(m: Mat4) -> Self {
        Matrix::M4(m)
    }
}

/// Composes a chain of same-rank matrices with the fold of
/// [`Mat3::multiply`] / [`Mat4::multiply`], without leaving the stack.
///
/// An empty chain or an element whose rank differs from the first one is
/// rejected; no partial result is returned.
pub fn multiply(chain: &[Matrix]) -> Result<Matrix, MatrixError> {
    let Some((first, rest)) = chain.split_first() else {
        log::debug!("rejected empty chain");
        return Err(MatrixError::EmptyChain);
    };

    rest.iter()
        .enumerate()
        .try_fold(*first, |acc, (i, next)| match (acc, next) {
            (Matrix::M3(a), Matrix::M3(b)) => Ok(Matrix::M3(a.combine(*b))),
            (Matrix::M4(a), Matrix::M4(b)) => Ok(Matrix::M4(a.combine(*b))),
            _ => {
                let index = i + 1;
                log::debug!("rejected mixed-rank chain at element {index}");
                Err(MatrixError::RankMismatch {
                    index,
                    expected: acc.rank(),
                    found: next.rank(),
                })
            }
        })
}
