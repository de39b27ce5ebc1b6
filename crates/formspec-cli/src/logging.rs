//! Logging setup for the Formspec CLI
//!
//! This module provides:
//! - Verbosity-derived logging configuration
//! - Environment overrides (`FORMSPEC_LOG`, `FORMSPEC_LOG_FORMAT`)
//! - Structured logging setup via tracing-subscriber
//! - Performance timing spans

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Enable console output
    pub console: bool,
    /// Include file and line numbers
    pub source_location: bool,
    /// Include thread IDs
    pub thread_ids: bool,
}

/// Log output format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum LogFormat {
    /// Compact format for production
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            console: true,
            source_location: false,
            thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut config = Self::default();

        match verbosity {
            0 => {
                config.level = "warn".to_string();
            }
            1 => {
                config.level = "info".to_string();
            }
            2 => {
                config.level = "debug".to_string();
                config.source_location = true;
            }
            _ => {
                config.level = "trace".to_string();
                config.format = LogFormat::Full;
                config.source_location = true;
                config.thread_ids = true;
            }
        }

        config
    }

    /// Apply environment variable overrides
    pub fn merge_with_env(&mut self) {
        if let Ok(level) = std::env::var("FORMSPEC_LOG") {
            self.level = level;
        }
        if let Ok(format) = std::env::var("FORMSPEC_LOG_FORMAT") {
            match format.as_str() {
                "compact" => self.format = LogFormat::Compact,
                "full" => self.format = LogFormat::Full,
                "json" => self.format = LogFormat::Json,
                _ => {}
            }
        }
    }
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    if !config.console {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| Error::config(format!("invalid log level '{}': {}", config.level, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_ids(config.thread_ids);

    let result = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Full => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| Error::config(format!("failed to initialize logging: {}", e)))
}

/// Performance timing helpers
pub mod timing {
    use std::time::Instant;
    use tracing::debug;

    /// Logs the elapsed time for a named phase when dropped
    pub struct Timer {
        name: &'static str,
        start: Instant,
    }

    impl Timer {
        /// Start timing a phase
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                start: Instant::now(),
            }
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            debug!(
                phase = self.name,
                elapsed_ms = self.start.elapsed().as_millis() as u64,
                "phase complete"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LoggingConfig::from_verbosity(0).level, "warn");
        assert_eq!(LoggingConfig::from_verbosity(1).level, "info");
        let debug = LoggingConfig::from_verbosity(2);
        assert_eq!(debug.level, "debug");
        assert!(debug.source_location);
        let trace = LoggingConfig::from_verbosity(5);
        assert_eq!(trace.level, "trace");
        assert_eq!(trace.format, LogFormat::Full);
    }
}
