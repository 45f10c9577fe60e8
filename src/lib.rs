//! Main Library File for the utility toolkit
//! Small, stateless helpers for text, collections, files, dates, hashing,
//! one-shot deferred tasks and integer math, plus the demonstration driver
//! that exercises them.

// Configuration and Errors
pub mod config;
pub mod error;

// Helpers
pub mod hash_utils;
pub mod utils;

// Demonstration driver
pub mod demo;

// Re-exports for crate consumers
pub use config::ToolkitConfig;
pub use demo::Demo;
pub use error::{DateError, Error, Result, TaskError};
pub use hash_utils::{md5_hex, HashAlgorithm, HashResult};
pub use utils::{DatePattern, Logger, TaskHandle, UtilityConfig, Zone};
