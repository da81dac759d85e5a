use crate::error::MatrixError;
use crate::{Mat3, Mat4};

/// Viewport size in pixels, plus the depth of the 3D viewing box.
///
/// `depth` is ignored by the 2D projection.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, depth: 0.0 }
    }

    #[inline]
    pub const fn with_depth(self, depth: f64) -> Self {
        Self { depth, ..self }
    }

    #[inline]
    pub fn is_valid_2d(self) -> bool {
        positive_finite(self.width) && positive_finite(self.height)
    }

    #[inline]
    pub fn is_valid_3d(self) -> bool {
        self.is_valid_2d() && positive_finite(self.depth)
    }

    /// [`Mat3::project`] for this viewport, rejecting sizes that would put
    /// infinities or NaN into the matrix.
    pub fn projection_2d(self) -> Result<Mat3, MatrixError> {
        if !self.is_valid_2d() {
            log::debug!("rejected 2D projection for {}x{}", self.width, self.height);
            return Err(MatrixError::DegenerateViewport {
                width: self.width,
                height: self.height,
                depth: None,
            });
        }
        Ok(Mat3::project(self.width, self.height))
    }

    /// [`Mat4::project`] for this viewport, with the same checks as
    /// [`Viewport::projection_2d`] applied to depth too.
    pub fn projection_3d(self) -> Result<Mat4, MatrixError> {
        if !self.is_valid_3d() {
            log::debug!(
                "rejected 3D projection for {}x{}x{}",
                self.width, self.height, self.depth
            );
            return Err(MatrixError::DegenerateViewport {
                width: self.width,
                height: self.height,
                depth: Some(self.depth),
            });
        }
        Ok(Mat4::project(self.width, self.height, self.depth))
    }
}

#[inline]
fn positive_finite(v: f64) -> bool {
    v > 0.0 && v.is_finite()
}
