//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
///
/// The level is chosen on the command line; the file only picks the format.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `pretty` (default) or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// True when log lines should be emitted as JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Build the filter for `level`. `RUST_LOG` takes precedence when set.
    #[must_use]
    pub fn filter(level: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    /// Initialize the tracing subscriber. Log lines go to stderr.
    ///
    /// Must be called at most once per process.
    pub fn init(&self, level: &str, force_json: bool) {
        let filter = Self::filter(level);

        if force_json || self.is_json() {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        } else {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}
