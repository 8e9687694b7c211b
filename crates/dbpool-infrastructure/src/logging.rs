//! Structured logging with tracing
//!
//! Installs a global subscriber writing to stdout and, when configured, to a
//! daily-rolling file. Both outputs share the plain/JSON format choice.

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV_VAR};
use dbpool_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;

pub use crate::config::LoggingConfig;
use tracing::{Level, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging with the provided configuration
///
/// `DBPOOL_LOG` takes precedence over the configured level when set. Fails
/// if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
    });

    let mut layers = vec![output_layer(std::io::stdout, config.json_format, true)];
    if let Some(path) = &config.file_output {
        let appender = tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM)),
        );
        layers.push(output_layer(appender, config.json_format, false));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to install logger: {e}")))?;

    info!(level = %level, json = config.json_format, "Logging initialized");
    Ok(())
}

fn output_layer<W>(writer: W, json: bool, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_thread_ids(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse a level name such as `debug` or `WARN`
pub fn parse_log_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse()
        .map_err(|_| Error::invalid_configuration("logging.level", level, "unknown log level"))
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found");
    }
}
