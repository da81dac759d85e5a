use std::sync::Once;

use log::LevelFilter;

/// How the demo's logger is set up.
///
/// `env_filter` takes `env_logger` directives such as
/// "glmat=debug,glmat_demo=trace". The per-frame matrices are logged at
/// `trace` under `glmat_demo::runner`. Rejected chains are logged at `debug`
/// under `glmat::matrix`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub fallback_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            fallback_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Where the demo's log filter comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Directives(String),
    Level(LevelFilter),
}

/// Resolves the filter: explicit config first, then `rust_log`, then the
/// fallback level. Blank directives count as unset.
fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> FilterSource {
    let usable = |d: &String| !d.trim().is_empty();
    config
        .env_filter
        .clone()
        .filter(usable)
        .or(rust_log.filter(usable))
        .map_or(FilterSource::Level(config.fallback_level), FilterSource::Directives)
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let source = resolve_filter(&config, std::env::var("RUST_LOG").ok());
        match &source {
            FilterSource::Directives(d) => {
                builder.parse_filters(d);
            }
            FilterSource::Level(level) => {
                builder.filter_level(*level);
            }
        }
        builder.write_style(config.write_style);

        // The test harness may have installed one already.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("glmat-demo logging initialized from {source:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_filter(filter: &str) -> LoggingConfig {
        LoggingConfig { env_filter: Some(filter.into()), ..LoggingConfig::default() }
    }

    #[test]
    fn explicit_filter_beats_rust_log() {
        let got = resolve_filter(&with_filter("glmat=debug"), Some("warn".into()));
        assert_eq!(got, FilterSource::Directives("glmat=debug".into()));
    }

    #[test]
    fn rust_log_is_used_when_unconfigured() {
        let got = resolve_filter(&LoggingConfig::default(), Some("glmat_demo=trace".into()));
        assert_eq!(got, FilterSource::Directives("glmat_demo=trace".into()));
    }

    #[test]
    fn falls_back_to_the_configured_level() {
        assert_eq!(
            resolve_filter(&LoggingConfig::default(), None),
            FilterSource::Level(LevelFilter::Info)
        );

        let quiet = LoggingConfig { fallback_level: LevelFilter::Warn, ..LoggingConfig::default() };
        assert_eq!(
            resolve_filter(&quiet, Some("  ".into())),
            FilterSource::Level(LevelFilter::Warn)
        );
        assert_eq!(
            resolve_filter(&with_filter(""), Some("glmat=info".into())),
            FilterSource::Directives("glmat=info".into())
        );
    }

    #[test]
    fn second_init_is_a_no_op() {
        init_logging(LoggingConfig::default());
        init_logging(with_filter("trace"));
        assert!(INIT.is_completed());
    }
}
