//! Utility Module Implementation
//! Author: kartik4091
//! Created: 2026-10-18
//!
//! Aggregates the stateless helpers: text, collections, file IO, date/time,
//! deferred tasks, integer math, the JSON placeholder and logging bootstrap.

use crate::error::Result;

// Submodules
pub mod collections;
pub mod datetime;
pub mod io;
pub mod json;
pub mod logger;
pub mod math;
pub mod task;
pub mod text;

// Re-exports for unified access
pub use self::{
    collections::{deduplicate, shuffle_copy, shuffle_copy_with},
    datetime::{format_instant, parse_instant, timestamp_millis, DatePattern, Zone},
    io::{ensure_parent_dir, has_allowed_extension, list_files, read_whole_file, write_whole_file},
    json::{parse_json, try_parse_json},
    logger::Logger,
    math::{gcd, lcm},
    task::{run_async, TaskHandle},
    text::{camel_to_snake, capitalize, capitalize_opt, is_blank, is_valid_email, reverse},
};

// General trait for configurable utility components
pub trait UtilityConfig: Send + Sync {
    fn validate(&self) -> Result<()>;
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}
