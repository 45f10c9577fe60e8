//! Error types and handling for the utility toolkit
//! Created: 2026-10-18
//! Author: kartik4905

use std::{error::Error as StdError, io, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for toolkit operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for toolkit operations
#[derive(Error, Debug)]
#[non_exhaustive]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Date error: {0}")]
    ParseError(#[from] DateError),

    #[error("Task error: {0}")]
    TaskError(#[from] TaskError),

    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl Error {
    /// Walks the `source()` chain and renders every cause, outermost first.
    pub fn chain(&self) -> Vec<String> {
        let mut causes = vec![self.to_string()];
        let mut current = self.source();
        while let Some(cause) = current {
            causes.push(cause.to_string());
            current = cause.source();
        }
        causes
    }
}

// -------------------- Sub-Error Categories --------------------

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DateError {
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("'{input}' does not match pattern '{pattern}'")]
    Mismatch {
        input: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("local time {0} does not exist in the host time zone")]
    NonexistentLocalTime(String),

    #[error("invalid time zone: {0}")]
    InvalidZone(String),
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TaskError {
    #[error("task failed: {0}")]
    Failed(#[source] Box<dyn StdError + Send + Sync>),

    #[error("task panicked: {0}")]
    Panicked(String),

    #[error("worker exited before producing a result")]
    WorkerLost,

    #[error("failed to start worker: {0}")]
    Spawn(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_includes_sources() {
        let inner = io::Error::new(io::ErrorKind::Other, "boom");
        let err = Error::from(TaskError::Failed(Box::new(inner)));
        let chain = err.chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[2], "boom");
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
