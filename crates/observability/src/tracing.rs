//! Tracing/logging initialization driven by [`LogConfig`].

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "info";

pub const FILTER_VAR: &str = "RUST_LOG";
pub const FORMAT_VAR: &str = "LOADSIM_LOG_FORMAT";

/// Output encoding of log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event (load-test runs feed these to collectors).
    #[default]
    Json,
    /// Compact human-readable lines for local runs.
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "compact" => Ok(LogFormat::Text),
            other => Err(format!("unknown log format '{other}' (expected json or text)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Problems found while reading the config, reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(FILTER_VAR) {
            if EnvFilter::try_new(&raw).is_ok() {
                config.filter = raw;
            } else {
                config
                    .warnings
                    .push(format!("{FILTER_VAR}={raw} is not a valid filter; using {DEFAULT_FILTER}"));
            }
        }

        if let Some(raw) = lookup(FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(e) => config.warnings.push(format!("{FORMAT_VAR}: {e}; using json")),
            }
        }

        config
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };

    if installed.is_ok() {
        for warning in &config.warnings {
            ::tracing::warn!("{warning}");
        }
    }
}
