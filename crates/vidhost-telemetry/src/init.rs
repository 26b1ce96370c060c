//! Telemetry initialisation primitives and logging configuration.
//!
//! One entry point installs the subscriber; the output format is chosen at
//! runtime and the build identifier is fixed by the first initialisation.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing::{Subscriber, info};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default logging target when `RUST_LOG` is not provided.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "VIDHOST_LOG_FORMAT";

static BUILD_SHA: OnceCell<String> = OnceCell::new();

/// Install the process-wide subscriber: an [`EnvFilter`] (`RUST_LOG`, else
/// `config.level`) in front of a pretty or JSON formatter.
///
/// The first call records `config.build_sha`; later calls keep it.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    BUILD_SHA.get_or_init(|| config.build_sha.to_string());

    tracing_subscriber::registry()
        .with(env_filter(config.level))
        .with(formatter(config.format))
        .try_init()
        .context("failed to install tracing subscriber")?;
    info!(build_sha = build_sha(), format = ?config.format, "logging initialised");
    Ok(())
}

/// Access the build SHA recorded during logging initialisation.
#[must_use]
pub fn build_sha() -> &'static str {
    BUILD_SHA.get().map_or("dev", String::as_str)
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Log level string (e.g., `info`, `debug`).
    pub level: &'a str,
    /// Output format selection for the tracing subscriber.
    pub format: LogFormat,
    /// Build identifier recorded in structured logs.
    pub build_sha: &'a str,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::from_env(),
            build_sha: build_sha(),
        }
    }
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Emit logs as structured JSON objects.
    Json,
    /// Emit human-readable logs.
    Pretty,
}

impl LogFormat {
    /// Choose a sensible default for the current build.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }

    /// Read [`LOG_FORMAT_ENV`], falling back to [`LogFormat::infer`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => Self::Json,
            Some("pretty") => Self::Pretty,
            _ => Self::infer(),
        }
    }
}

fn formatter<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span> + 'static,
{
    let layer = fmt::layer().with_target(false);
    match format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Pretty => layer.boxed(),
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
