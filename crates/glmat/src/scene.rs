//! Mutable scene state that is recomposed into one matrix per frame.
//!
//! The scene owns the translation, rotation and scale of a single shape plus
//! the viewport it is drawn into. Callers nudge the state in fixed steps (or
//! set fields directly) and call `matrix()` once per frame.

use std::f64::consts::PI;

use crate::error::MatrixError;
use crate::{Mat3, Mat4, Viewport};

/// Pixels moved by one translation step.
pub const TRANSLATION_STEP: f64 = 20.0;
/// Radians turned by one rotation step (5 degrees).
pub const ROTATION_STEP: f64 = 5.0 * PI / 180.0;
/// Uniform scale change of one grow/shrink step.
pub const SCALE_STEP: f64 = 0.1;
/// Depth of the 3D viewing box.
pub const DEFAULT_DEPTH: f64 = 400.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

// ── 2D ────────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scene2d {
    pub translation: [f64; 2],
    /// Radians.
    pub angle: f64,
    pub scale: [f64; 2],
    pub viewport: Viewport,
}

impl Scene2d {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            translation: [0.0, 0.0],
            angle: 0.0,
            scale: [1.0, 1.0],
            viewport: Viewport::new(width, height),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    /// Moves by whole translation steps along each axis (+Y is down).
    pub fn translate_by(&mut self, steps_x: f64, steps_y: f64) {
        self.translation[0] += steps_x * TRANSLATION_STEP;
        self.translation[1] += steps_y * TRANSLATION_STEP;
    }

    /// Turns by whole rotation steps; positive is counter-clockwise.
    pub fn rotate_by(&mut self, steps: f64) {
        self.angle += steps * ROTATION_STEP;
    }

    pub fn grow(&mut self) {
        self.scale = self.scale.map(|s| s + SCALE_STEP);
    }

    /// Scale is not clamped; shrinking past zero mirrors the shape.
    pub fn shrink(&mut self) {
        self.scale = self.scale.map(|s| s - SCALE_STEP);
    }

    /// `project * translate * rotate * scale`, applied right to left.
    pub fn matrix(&self) -> Result<Mat3, MatrixError> {
        let [tx, ty] = self.translation;
        let [sx, sy] = self.scale;
        Mat3::multiply(&[
            self.viewport.projection_2d()?,
            Mat3::translate(tx, ty),
            Mat3::rotate(self.angle),
            Mat3::scale(sx, sy),
        ])
    }
}

// ── 3D ────────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scene3d {
    pub translation: [f64; 3],
    /// Radians around X, Y, Z.
    pub angles: [f64; 3],
    pub scale: [f64; 3],
    pub viewport: Viewport,
}

impl Scene3d {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            translation: [0.0; 3],
            angles: [0.0; 3],
            scale: [1.0; 3],
            viewport: Viewport::new(width, height).with_depth(DEFAULT_DEPTH),
        }
    }

    /// A 200 px shape roughly centred in the viewport, tilted so all three
    /// rotation axes are visible.
    pub fn centered(width: f64, height: f64) -> Self {
        Self {
            translation: [width / 2.0 - 100.0, height / 2.0 - 100.0, 0.0],
            angles: [0.2, 0.3, 0.1],
            ..Self::new(width, height)
        }
    }

    /// Updates width and height; depth is kept.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    pub fn translate_by(&mut self, steps: [f64; 3]) {
        for (t, s) in self.translation.iter_mut().zip(steps) {
            *t += s * TRANSLATION_STEP;
        }
    }

    pub fn rotate_by(&mut self, axis: Axis, steps: f64) {
        self.angles[axis.index()] += steps * ROTATION_STEP;
    }

    pub fn grow(&mut self) {
        self.scale = self.scale.map(|s| s + SCALE_STEP);
    }

    pub fn shrink(&mut self) {
        self.scale = self.scale.map(|s| s - SCALE_STEP);
    }

    /// `project * translate * rot_x * rot_y * rot_z * scale`, applied right to left.
    pub fn matrix(&self) -> Result<Mat4, MatrixError> {
        let [tx, ty, tz] = self.translation;
        let [ax, ay, az] = self.angles;
        let [sx, sy, sz] = self.scale;
        Mat4::multiply(&[
            self.viewport.projection_3d()?,
            Mat4::translate(tx, ty, tz),
            Mat4::rotate_x(ax),
            Mat4::rotate_y(ay),
            Mat4::rotate_z(az),
            Mat4::scale(sx, sy, sz),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ── Scene2d ───────────────────────────────────────────────────────────

    #[test]
    fn scene2d_default_maps_origin_to_top_left() {
        let m = Scene2d::new(800.0, 600.0).matrix().unwrap();
        let (x, y) = m.transform_point(0.0, 0.0);
        assert!((x + 1.0).abs() < EPS && (y - 1.0).abs() < EPS);
    }

    #[test]
    fn scene2d_matrix_is_pipeline_chain() {
        let mut scene = Scene2d::new(640.0, 480.0);
        scene.translate_by(3.0, -1.0);
        scene.rotate_by(2.0);
        scene.grow();

        let want = Mat3::multiply(&[
            Mat3::project(640.0, 480.0),
            Mat3::translate(60.0, -20.0),
            Mat3::rotate(2.0 * ROTATION_STEP),
            Mat3::scale(1.1, 1.1),
        ])
        .unwrap();
        assert!(scene.matrix().unwrap().approx_eq(&want, EPS));
    }

    #[test]
    fn scene2d_translation_follows_steps() {
        let mut scene = Scene2d::new(100.0, 100.0);
        scene.translate_by(1.0, 0.0);
        scene.translate_by(0.0, 2.0);
        assert_eq!(scene.translation, [20.0, 40.0]);
    }

    #[test]
    fn scene2d_shrink_is_unclamped() {
        let mut scene = Scene2d::new(100.0, 100.0);
        for _ in 0..11 {
            scene.shrink();
        }
        assert!(scene.scale[0] < 0.0);
        assert!(scene.matrix().is_ok());
    }

    #[test]
    fn scene2d_zero_viewport_fails() {
        let mut scene = Scene2d::new(800.0, 600.0);
        scene.resize(0.0, 600.0);
        assert!(matches!(scene.matrix(), Err(MatrixError::DegenerateViewport { .. })));
    }

    // ── Scene3d ───────────────────────────────────────────────────────────

    #[test]
    fn scene3d_centered_start_state() {
        let scene = Scene3d::centered(800.0, 600.0);
        assert_eq!(scene.translation, [300.0, 200.0, 0.0]);
        assert_eq!(scene.angles, [0.2, 0.3, 0.1]);
        assert_eq!(scene.scale, [1.0, 1.0, 1.0]);
        assert_eq!(scene.viewport.depth, DEFAULT_DEPTH);
    }

    #[test]
    fn scene3d_matrix_is_pipeline_chain() {
        let scene = Scene3d::centered(800.0, 600.0);
        let want = Mat4::multiply(&[
            Mat4::project(800.0, 600.0, DEFAULT_DEPTH),
            Mat4::translate(300.0, 200.0, 0.0),
            Mat4::rotate_x(0.2),
            Mat4::rotate_y(0.3),
            Mat4::rotate_z(0.1),
            Mat4::scale(1.0, 1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(scene.matrix().unwrap(), want);
    }

    #[test]
    fn scene3d_rotate_by_touches_one_axis() {
        let mut scene = Scene3d::new(800.0, 600.0);
        scene.rotate_by(Axis::Y, 1.0);
        scene.rotate_by(Axis::Z, -2.0);
        assert_eq!(scene.angles, [0.0, ROTATION_STEP, -2.0 * ROTATION_STEP]);
    }

    #[test]
    fn scene3d_translation_reaches_clip_space() {
        let mut scene = Scene3d::new(800.0, 600.0);
        scene.translate_by([20.0, 15.0, 10.0]);
        let (x, y, z) = scene.matrix().unwrap().transform_point(0.0, 0.0, 0.0);
        // 400 px, 300 px, 200 deep: the centre of the box.
        assert!(x.abs() < EPS && y.abs() < EPS && (z - 1.0).abs() < EPS);
    }

    #[test]
    fn scene3d_resize_keeps_depth() {
        let mut scene = Scene3d::new(800.0, 600.0);
        scene.resize(1024.0, 768.0);
        assert_eq!(scene.viewport, Viewport::new(1024.0, 768.0).with_depth(DEFAULT_DEPTH));
    }

    #[test]
    fn scene3d_grow_then_shrink_restores_scale() {
        let mut scene = Scene3d::new(800.0, 600.0);
        scene.grow();
        scene.shrink();
        for s in scene.scale {
            assert!((s - 1.0).abs() < EPS);
        }
    }
}
