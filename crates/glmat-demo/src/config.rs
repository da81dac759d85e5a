use std::time::Duration;

use anyhow::{Context, Result, anyhow, ensure};
use glmat::Viewport;
use glmat::scene::DEFAULT_DEPTH;

/// Which scene the demo drives.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Dims {
    Two,
    Three,
}

/// Demo run configuration.
///
/// Defaults match a typical full-window canvas; every field can be overridden
/// from the environment with [`DemoConfig::from_env`].
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub width: f64,
    pub height: f64,
    /// Depth of the 3D viewing box. Ignored for 2D.
    pub depth: f64,
    pub frames: u64,
    pub frame_interval: Duration,
    /// Angular velocity in radians per second around X, Y, Z.
    /// The 2D scene spins with the Z component.
    pub spin: [f64; 3],
    pub dims: Dims,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            depth: DEFAULT_DEPTH,
            frames: 120,
            frame_interval: Duration::from_millis(16),
            spin: [0.0, 0.6, 0.3],
            dims: Dims::Three,
        }
    }
}

impl DemoConfig {
    /// Defaults overlaid with `GLMAT_VIEWPORT` (`WxH`), `GLMAT_DEPTH`,
    /// `GLMAT_FRAMES` and `GLMAT_DIMS` (`2d` / `3d`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("GLMAT_VIEWPORT") {
            let (w, h) = parse_size(&raw).with_context(|| format!("GLMAT_VIEWPORT={raw:?}"))?;
            config.width = w;
            config.height = h;
        }
        if let Some(raw) = lookup("GLMAT_DEPTH") {
            config.depth = raw
                .trim()
                .parse()
                .with_context(|| format!("GLMAT_DEPTH={raw:?} is not a number"))?;
        }
        if let Some(raw) = lookup("GLMAT_FRAMES") {
            config.frames = raw
                .trim()
                .parse()
                .with_context(|| format!("GLMAT_FRAMES={raw:?} is not a frame count"))?;
        }
        if let Some(raw) = lookup("GLMAT_DIMS") {
            config.dims = match raw.trim().to_ascii_lowercase().as_str() {
                "2d" => Dims::Two,
                "3d" => Dims::Three,
                other => return Err(anyhow!("GLMAT_DIMS={other:?}, expected 2d or 3d")),
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// The viewport the scene will be projected into.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_depth(self.depth)
    }

    /// Applies the same rule as the checked projections, so a config that
    /// validates never has its frames skipped.
    pub fn validate(&self) -> Result<()> {
        let vp = self.viewport();
        ensure!(
            vp.is_valid_2d(),
            "viewport must be positive and finite, got {}x{}",
            self.width,
            self.height
        );
        if self.dims == Dims::Three {
            ensure!(
                vp.is_valid_3d(),
                "depth must be positive and finite, got {}",
                self.depth
            );
        }
        Ok(())
    }
}

fn parse_size(raw: &str) -> Result<(f64, f64)> {
    let (w, h) = raw
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT"))?;
    let w = w.trim().parse().context("bad width")?;
    let h = h.trim().parse().context("bad height")?;
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(DemoConfig::from_lookup(lookup(&[])).unwrap(), DemoConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = DemoConfig::from_lookup(lookup(&[
            ("GLMAT_VIEWPORT", "1024x768"),
            ("GLMAT_DEPTH", "1000"),
            ("GLMAT_FRAMES", "3"),
            ("GLMAT_DIMS", "2D"),
        ]))
        .unwrap();
        assert_eq!((config.width, config.height), (1024.0, 768.0));
        assert_eq!(config.depth, 1000.0);
        assert_eq!(config.frames, 3);
        assert_eq!(config.dims, Dims::Two);
    }

    #[test]
    fn malformed_viewport_is_an_error() {
        let err = DemoConfig::from_lookup(lookup(&[("GLMAT_VIEWPORT", "1024")])).unwrap_err();
        assert!(err.to_string().contains("GLMAT_VIEWPORT"));
    }

    #[test]
    fn zero_viewport_fails_validation() {
        assert!(DemoConfig::from_lookup(lookup(&[("GLMAT_VIEWPORT", "0x600")])).is_err());
    }

    #[test]
    fn zero_depth_is_fine_in_2d() {
        let config =
            DemoConfig::from_lookup(lookup(&[("GLMAT_DIMS", "2d"), ("GLMAT_DEPTH", "0")])).unwrap();
        assert_eq!(config.dims, Dims::Two);
        assert!(DemoConfig::from_lookup(lookup(&[("GLMAT_DEPTH", "0")])).is_err());
    }

    #[test]
    fn infinite_viewport_or_depth_is_rejected() {
        for size in ["infx600", "800xinf", "NaNx600"] {
            let err = DemoConfig::from_lookup(lookup(&[("GLMAT_VIEWPORT", size)])).unwrap_err();
            assert!(err.to_string().contains("finite"), "{size}: {err}");
        }
        let err = DemoConfig::from_lookup(lookup(&[("GLMAT_DEPTH", "inf")])).unwrap_err();
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn validated_config_projects() {
        let config = DemoConfig::from_lookup(lookup(&[("GLMAT_VIEWPORT", "1920x1080")])).unwrap();
        assert!(config.viewport().projection_3d().is_ok());
    }

    #[test]
    fn unknown_dims_is_an_error() {
        assert!(DemoConfig::from_lookup(lookup(&[("GLMAT_DIMS", "4d")])).is_err());
    }
}
