//! Per-frame driver: advance the scene, compose its matrix, upload it.

use anyhow::{Context, Result};
use glmat::{Mat3Uniform, Mat4Uniform, MatrixError, Scene2d, Scene3d};

use crate::config::{DemoConfig, Dims};
use crate::frame_clock::{FrameClock, FrameTime};

/// Receiver of the per-frame uniform bytes, standing in for a GPU upload.
pub trait UniformSink {
    fn upload(&mut self, frame_index: u64, bytes: &[u8]) -> Result<()>;
}

/// Sink that only reports what it would upload.
#[derive(Debug, Default)]
pub struct LogSink;

impl UniformSink for LogSink {
    fn upload(&mut self, frame_index: u64, bytes: &[u8]) -> Result<()> {
        log::debug!("frame {frame_index}: uploading {} uniform bytes", bytes.len());
        Ok(())
    }
}

/// Outcome of one frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameAction {
    Uploaded,
    /// The viewport could not be projected; nothing was uploaded.
    SkipFrame,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RunStats {
    pub uploaded: u64,
    pub skipped: u64,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DemoScene {
    Flat(Scene2d),
    Solid(Scene3d),
}

enum Uniform {
    Mat3(Mat3Uniform),
    Mat4(Mat4Uniform),
}

impl Uniform {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Uniform::Mat3(u) => u.as_bytes(),
            Uniform::Mat4(u) => u.as_bytes(),
        }
    }
}

pub struct Runner {
    scene: DemoScene,
    spin: [f64; 3],
    stats: RunStats,
}

impl Runner {
    pub fn new(config: &DemoConfig) -> Self {
        let scene = match config.dims {
            Dims::Two => {
                let mut s = Scene2d::new(config.width, config.height);
                s.viewport = config.viewport();
                s.translation = [config.width / 2.0, config.height / 2.0];
                DemoScene::Flat(s)
            }
            Dims::Three => {
                let mut s = Scene3d::centered(config.width, config.height);
                s.viewport = config.viewport();
                DemoScene::Solid(s)
            }
        };
        Self { scene, spin: config.spin, stats: RunStats::default() }
    }

    #[inline]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    fn advance(&mut self, dt: f64) {
        match &mut self.scene {
            DemoScene::Flat(s) => s.angle += self.spin[2] * dt,
            DemoScene::Solid(s) => {
                for (a, w) in s.angles.iter_mut().zip(self.spin) {
                    *a += w * dt;
                }
            }
        }
    }

    /// Runs one frame. A degenerate viewport skips the frame; any other
    /// failure is returned.
    pub fn step(&mut self, time: FrameTime, sink: &mut impl UniformSink) -> Result<FrameAction> {
        self.advance(time.dt);

        let composed = match &self.scene {
            DemoScene::Flat(s) => s.matrix().map(|m| {
                log::trace!("frame {}: {:?}", time.frame_index, m.as_slice());
                Uniform::Mat3(m.into())
            }),
            DemoScene::Solid(s) => s.matrix().map(|m| {
                log::trace!("frame {}: {:?}", time.frame_index, m.as_slice());
                Uniform::Mat4(m.into())
            }),
        };

        match composed {
            Ok(uniform) => {
                let bytes = uniform.as_bytes();
                sink.upload(time.frame_index, bytes)
                    .with_context(|| format!("uploading frame {}", time.frame_index))?;
                self.stats.uploaded += 1;
                self.stats.bytes += bytes.len() as u64;
                Ok(FrameAction::Uploaded)
            }
            Err(e @ MatrixError::DegenerateViewport { .. }) => {
                log::warn!("frame {}: {e}; skipping", time.frame_index);
                self.stats.skipped += 1;
                Ok(FrameAction::SkipFrame)
            }
            Err(e) => Err(anyhow::Error::new(e).context("composing frame matrix")),
        }
    }
}

/// Drives `config.frames` frames at `config.frame_interval`.
pub fn run(config: &DemoConfig, sink: &mut impl UniformSink) -> Result<RunStats> {
    let mut runner = Runner::new(config);
    let mut clock = FrameClock::new();

    for _ in 0..config.frames {
        if !config.frame_interval.is_zero() {
            std::thread::sleep(config.frame_interval);
        }
        runner.step(clock.tick(), &mut *sink)?;
    }

    Ok(runner.stats())
}
