//! Transform matrices for 2D and 3D WebGL-style render pipelines.
//!
//! Builders return fresh row-major matrices; `multiply` folds a chain of
//! them into the single matrix a renderer uploads as a uniform each frame.
//! Nothing here touches a GPU, window or global state.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`mat3`] | `Mat3`: 2D translate / rotate / scale / project |
//! | [`mat4`] | `Mat4`: 3D translate / rotate_x,y,z / scale / project |
//! | [`matrix`] | `Matrix`, `Rank`, rank-checked `multiply` |
//! | [`error`] | `MatrixError` |
//! | [`viewport`] | `Viewport` and checked projections |
//! | [`uniform`] | `Mat3Uniform`, `Mat4Uniform` byte layouts |
//! | [`scene`] | `Scene2d`, `Scene3d` per-frame state |
//!
//! # Composition order
//!
//! The last matrix in a chain is applied to a point first:
//!
//! ```rust
//! use glmat::Mat3;
//!
//! let t = Mat3::translate(10.0, 0.0);
//! let s = Mat3::scale(2.0, 1.0);
//!
//! // Scale, then translate.
//! let m = Mat3::multiply(&[t, s]).unwrap();
//! assert_eq!(m.transform_point(1.0, 0.0), (12.0, 0.0));
//!
//! // Translate, then scale.
//! let m = Mat3::multiply(&[s, t]).unwrap();
//! assert_eq!(m.transform_point(1.0, 0.0), (22.0, 0.0));
//! ```

pub mod error;
pub mod mat3;
pub mod mat4;
pub mod matrix;
pub mod scene;
pub mod uniform;
pub mod viewport;

pub use error::MatrixError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use matrix::{Matrix, Rank};
pub use scene::{Axis, Scene2d, Scene3d};
pub use uniform::{Mat3Uniform, Mat4Uniform};
pub use viewport::Viewport;
