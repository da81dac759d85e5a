//! GPU-side layouts for handing a composed matrix to a shader uniform.
//!
//! The flat row-major array is uploaded as-is; a shader reading it as a
//! column-major `mat3`/`mat4` then computes `u_matrix * p` with the same
//! result as [`Mat3::transform_point`] / [`Mat4::transform_point`].

use bytemuck::{Pod, Zeroable};

use crate::{Mat3, Mat4};

/// `mat4x4<f32>` uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4Uniform {
    pub m: [f32; 16],
}

impl Mat4Uniform {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Mat4> for Mat4Uniform {
    fn from(m: Mat4) -> Self {
        Self { m: m.to_gl_array() }
    }
}

/// `mat3x3<f32>` uniform in std140 layout.
///
/// Each shader column is one stored row, padded to 16 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3Uniform {
    pub cols: [[f32; 4]; 3],
}

impl Mat3Uniform {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Mat3> for Mat3Uniform {
    fn from(m: Mat3) -> Self {
        let gl = m.to_gl_array();
        let mut cols = [[0.0f32; 4]; 3];
        for (i, col) in cols.iter_mut().enumerate() {
            col[..3].copy_from_slice(&gl[i * 3..i * 3 + 3]);
        }
        Self { cols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mat4_uniform_is_flat_f32() {
        let u = Mat4Uniform::from(Mat4::translate(1.0, 2.0, 3.0));
        assert_eq!(&u.m[12..], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.as_bytes().len(), 64);
    }

    #[test]
    fn mat3_uniform_pads_each_column() {
        let u = Mat3Uniform::from(Mat3::translate(4.0, 5.0));
        assert_eq!(u.cols, [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [4.0, 5.0, 1.0, 0.0]]);
        assert_eq!(u.as_bytes().len(), 48);
    }

    #[test]
    fn matrix_slices_cast_to_bytes_without_copy() {
        let ms = [Mat3::IDENTITY, Mat3::scale(2.0, 2.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&ms);
        assert_eq!(bytes.len(), 2 * 9 * 8);
        let back: &[f64] = bytemuck::cast_slice(bytes);
        assert_eq!(&back[9..], Mat3::scale(2.0, 2.0).as_slice());
    }
}
