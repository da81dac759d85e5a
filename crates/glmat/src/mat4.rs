use bytemuck::{Pod, Zeroable};

use crate::error::MatrixError;

const N: usize = 4;

/// 4x4 matrix for 3D affine transforms in homogeneous coordinates.
///
/// Same conventions as [`crate::Mat3`]: row-major storage, row vectors,
/// translation in the last row.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    m: [f64; 16],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4::identity();

    #[inline]
    pub const fn from_row_major(m: [f64; 16]) -> Self {
        Self { m }
    }

    /// Builds a matrix from a flat row-major sequence of exactly 16 elements.
    pub fn from_slice(values: &[f64]) -> Result<Self, MatrixError> {
        <[f64; 16]>::try_from(values)
            .map(Self::from_row_major)
            .map_err(|_| MatrixError::BadLength { len: values.len() })
    }

    #[inline]
    pub const fn as_array(&self) -> &[f64; 16] {
        &self.m
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.m
    }

    #[inline]
    pub const fn at(&self, r: usize, c: usize) -> f64 {
        self.m[r * N + c]
    }

    pub const fn identity() -> Self {
        Self::scale(1.0, 1.0, 1.0)
    }

    #[rustfmt::skip]
    pub const fn translate(x: f64, y: f64, z: f64) -> Self {
        Self::from_row_major([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            x,   y,   z,   1.0,
        ])
    }

    /// Rotation in the Y/Z plane.
    #[rustfmt::skip]
    pub fn rotate_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_row_major([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation in the X/Z plane.
    ///
    /// The sine signs are mirrored relative to [`Mat4::rotate_x`] and
    /// [`Mat4::rotate_z`]; callers compose against exactly this layout.
    #[rustfmt::skip]
    pub fn rotate_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_row_major([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation in the X/Y plane.
    #[rustfmt::skip]
    pub fn rotate_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_row_major([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    #[rustfmt::skip]
    pub const fn scale(x: f64, y: f64, z: f64) -> Self {
        Self::from_row_major([
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Orthographic projection from a pixel-space box to clip space.
    ///
    /// Flips Y so 0 is at the top. Depth `[0, depth]` maps to `[0, 2]`;
    /// there is no shift on Z. Dimensions are not checked.
    #[rustfmt::skip]
    pub fn project(width: f64, height: f64, depth: f64) -> Self {
        Self::from_row_major([
            2.0 / width, 0.0,           0.0,         0.0,
            0.0,         -2.0 / height, 0.0,         0.0,
            0.0,         0.0,           2.0 / depth, 0.0,
            -1.0,        1.0,           0.0,         1.0,
        ])
    }

    pub fn transpose(self) -> Self {
        let mut out = [0.0; 16];
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
    pub fn combine(self, next: Mat4) -> Mat4 {
        let (a, b) = (&self.m, &next.m);
        let mut out = [0.0; 16];
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

    /// Folds `chain` left to right with [`Mat4::combine`].
    ///
    /// `multiply(&[P, T, Rx, Ry, Rz, S])` applies `S` first and `P` last.
    pub fn multiply(chain: &[Mat4]) -> Result<Mat4, MatrixError> {
        let Some((first, rest)) = chain.split_first() else {
            log::debug!("rejected empty 4x4 chain");
            return Err(MatrixError::EmptyChain);
        };
        Ok(rest.iter().fold(*first, |acc, &next| acc.combine(next)))
    }

    /// Applies the transform to a 3D point (homogeneous `w = 1`).
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let [x, y, z, _] = self.transform_vec4([x, y, z, 1.0]);
        (x, y, z)
    }

    /// Applies the matrix to a full homogeneous row vector.
    #[inline]
    pub fn transform_vec4(&self, v: [f64; 4]) -> [f64; 4] {
        let m = &self.m;
        let mut out = [0.0; 4];
        for (j, o) in out.iter_mut().enumerate() {
            *o = v[0] * m[j] + v[1] * m[N + j] + v[2] * m[2 * N + j] + v[3] * m[3 * N + j];
        }
        out
    }

    pub fn approx_eq(&self, other: &Mat4, eps: f64) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| (a - b).abs() <= eps)
    }

    /// The flat array narrowed to `f32`, as passed to `uniformMatrix4fv`.
    pub fn to_gl_array(&self) -> [f32; 16] {
        self.m.map(|v| v as f32)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Mat4> for [f64; 16] {
    fn from(m: Mat4) -> Self {
        m.m
    }
}
