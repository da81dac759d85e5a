mod config;
mod frame_clock;
mod logging;
mod runner;

use anyhow::{Context, Result};

use crate::config::DemoConfig;
use crate::logging::{LoggingConfig, init_logging};
use crate::runner::LogSink;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::from_env().context("invalid demo configuration")?;
    log::info!(
        "driving {:?} scene at {}x{} (depth {}) for {} frames",
        config.dims,
        config.width,
        config.height,
        config.depth,
        config.frames
    );

    let stats = runner::run(&config, &mut LogSink)?;

    log::info!(
        "uploaded {} frames ({} bytes), skipped {}",
        stats.uploaded,
        stats.bytes,
        stats.skipped
    );
    Ok(())
}
