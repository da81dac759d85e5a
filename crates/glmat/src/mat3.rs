use bytemuck::{Pod, Zeroable};

use crate::error::MatrixError;

const N: usize = 3;

/// 3x3 matrix for 2D affine transforms in homogeneous coordinates.
///
/// Storage is row-major: element `(r, c)` lives at index `r * 3 + c`.
/// Points are row vectors (`p' = p * M`), so the translation sits in the last
/// row. Handing the flat array to `uniformMatrix3fv(loc, false, ..)` gives a
/// shader that computes `u_matrix * vec3(p, 1.0)` the same transform.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3 {
    m: [f64; 9],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3::identity();

    #[inline]
    pub const fn from_row_major(m: [f64; 9]) -> Self {
        Self { m }
    }

    /// Builds a matrix from a flat row-major sequence of exactly 9 elements.
    pub fn from_slice(values: &[f64]) -> Result<Self, MatrixError> {
        <[f64; 9]>::try_from(values)
            .map(Self::from_row_major)
            .map_err(|_| MatrixError::BadLength { len: values.len() })
    }

    #[inline]
    pub const fn as_array(&self) -> &[f64; 9] {
        &self.m
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.m
    }

    /// Element at logical row `r`, column `c`.
    #[inline]
    pub const fn at(&self, r: usize, c: usize) -> f64 {
        self.m[r * N + c]
    }

    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self::from_row_major([
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub const fn translate(x: f64, y: f64) -> Self {
        Self::from_row_major([
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            x,   y,   1.0,
        ])
    }

    /// Rotation by `angle` radians.
    #[rustfmt::skip]
    pub fn rotate(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_row_major([
            c,   -s,  0.0,
            s,   c,   0.0,
            0.0, 0.0, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub const fn scale(x: f64, y: f64) -> Self {
        Self::from_row_major([
            x,   0.0, 0.0,
            0.0, y,   0.0,
            0.0, 0.0, 1.0,
        ])
    }

    /// Maps pixel space (origin top-left, +Y down) onto clip space `[-1, 1]²`.
    ///
    /// Dimensions are not checked; zero yields infinite entries. Use
    /// [`crate::Viewport::projection_2d`] for a checked variant.
    #[rustfmt::skip]
    pub fn project(width: f64, height: f64) -> Self {
        Self::from_row_major([
            2.0 / width, 0.0,           0.0,
            0.0,         -2.0 / height, 0.0,
            -1.0,        1.0,           1.0,
        ])
    }

    pub fn transpose(self) -> Self {
        let mut out = [0.0; 9];
        for r in 0..N {
            for c in 0..N {
                out[c * N + r] = self.m[r * N + c];
            }
        }
        Self::from_row_major(out)
    }

    /// Composes two transforms so that `next` is applied first, then `self`.
    ///
    /// `out[i][j] = Σ_k next[i][k] * self[k][j]`.
    pub fn combine(self, next: Mat3) -> Mat3 {
        let (a, b) = (&self.m, &next.m);
        let mut out = [0.0; 9];
        for i in 0..N {
            for j in 0..N {
                let mut acc = b[i * N] * a[j];
                for k in 1..N {
                    acc += b[i * N + k] * a[k * N + j];
                }
                out[i * N + j] = acc;
            }
        }
        Self::from_row_major(out)
    }

    /// Folds `chain` left to right with [`Mat3::combine`].
    ///
    /// The result applies the chain's transforms in reverse argument order:
    /// `multiply(&[P, T, R, S])` scales, then rotates, then translates, then
    /// projects.
    pub fn multiply(chain: &[Mat3]) -> Result<Mat3, MatrixError> {
        let Some((first, rest)) = chain.split_first() else {
            log::debug!("rejected empty 3x3 chain");
            return Err(MatrixError::EmptyChain);
        };
        Ok(rest.iter().fold(*first, |acc, &next| acc.combine(next)))
    }

    /// Applies the transform to a 2D point (homogeneous `w = 1`).
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.m;
        (
            x * m[0] + y * m[3] + m[6],
            x * m[1] + y * m[4] + m[7],
        )
    }

    /// Applies the matrix to a full homogeneous row vector.
    #[inline]
    pub fn transform_vec3(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.m;
        [
            v[0] * m[0] + v[1] * m[3] + v[2] * m[6],
            v[0] * m[1] + v[1] * m[4] + v[2] * m[7],
            v[0] * m[2] + v[1] * m[5] + v[2] * m[8],
        ]
    }

    /// Element-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Mat3, eps: f64) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| (a - b).abs() <= eps)
    }

    /// The flat array narrowed to `f32`, as passed to `uniformMatrix3fv`.
    pub fn to_gl_array(&self) -> [f32; 9] {
        self.m.map(|v| v as f32)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Mat3> for [f64; 9] {
    fn from(m: Mat3) -> Self {
        m.m
    }
}
