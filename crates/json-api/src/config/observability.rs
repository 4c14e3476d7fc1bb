//! Logging Config

use clap::{Args, ValueEnum};

/// Crates whose chatter is capped at `warn` unless `RUST_LOG` says otherwise.
const QUIET_TARGETS: [&str; 3] = ["h2", "hyper", "sqlx"];

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line logs for local runs.
    Compact,

    /// One JSON object per event, for log shipping.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` holds no directives (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

impl LoggingConfig {
    /// Filter directives used when the environment provides none.
    #[must_use]
    pub fn fallback_directives(&self) -> String {
        QUIET_TARGETS
            .iter()
            .fold(self.log_level.trim().to_string(), |directives, target| {
                format!("{directives},{target}=warn")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_directives_quiet_transport_and_sql_crates() {
        let config = LoggingConfig {
            log_level: " debug ".to_string(),
            log_format: LogFormat::Json,
            slow_request_threshold_ms: 250,
        };

        assert_eq!(
            config.fallback_directives(),
            "debug,h2=warn,hyper=warn,sqlx=warn"
        );
    }
}
