//! `env_logger` setup for `glmat-demo`.
//!
//! `glmat` itself only writes through the `log` facade. This module decides
//! where those records go and which `glmat`/`glmat_demo` targets are shown.

mod init;

pub use init::{LoggingConfig, init_logging};
