//! Logger bootstrap for the toolkit binary
//! Author: kartik4091
//! Created: 2026-10-18

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Log levels accepted by [`Logger::with_level`] and the configuration.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Installs a `tracing` subscriber writing compact lines to stderr.
/// `RUST_LOG` takes precedence over the configured level.
pub struct Logger {
    level: String,
    initialized: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_level("info")
    }

    pub fn with_level(level: &str) -> Self {
        Self {
            level: level.to_string(),
            initialized: false,
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// Installs the global subscriber. Safe to call more than once, and a
    /// subscriber installed elsewhere is left in place.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("utilkit={}", self.level)));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();

        self.initialized = true;
        if installed {
            info!("Logger initialized with level: {}", self.level);
        } else {
            debug!("Global subscriber already set; keeping it");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let mut logger = Logger::with_level("debug");
        logger.init();
        logger.init();
        let mut second = Logger::new();
        second.init();
        assert_eq!(logger.level(), "debug");
        assert_eq!(second.level(), "info");
    }
}
