//! Demonstration run — exercises every utility in a fixed order
//! Author: kartik4091
//! Created: 2026-10-18
//!
//! Output goes to any `Write` so the binary can use stdout and tests a buffer.
//! Sections run in order and the first failure stops the run.

use std::io::Write;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, instrument};

use crate::{
    config::ToolkitConfig,
    error::Result,
    hash_utils::md5_hex,
    utils::{
        capitalize, deduplicate, ensure_parent_dir, format_instant, gcd, lcm, read_whole_file,
        reverse, run_async, shuffle_copy, write_whole_file,
    },
};

/// Text produced by the deferred task section.
pub const TASK_RESULT: &str = "Async task completed";

#[derive(Debug, Clone)]
pub struct Demo {
    config: ToolkitConfig,
}

impl Demo {
    pub fn new(config: ToolkitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Runs all sections. Blocks while the deferred task sleeps, so call it
    /// outside of an async runtime.
    #[instrument(skip_all)]
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        self.strings(out)?;
        self.collections(out)?;
        self.files(out)?;
        self.dates(out)?;
        self.hashing(out)?;
        self.concurrency(out)?;
        self.math(out)?;
        info!("demonstration finished");
        Ok(())
    }

    fn strings<W: Write>(&self, out: &mut W) -> Result<()> {
        let text = "Hello, Java!";
        writeln!(out, "=== String Operations ===")?;
        writeln!(out, "Original: {}", text)?;
        writeln!(out, "Reversed: {}", reverse(text))?;
        writeln!(out, "Capitalized: {}", capitalize("java"))?;
        Ok(())
    }

    fn collections<W: Write>(&self, out: &mut W) -> Result<()> {
        let numbers = [1, 2, 2, 3, 3, 4, 5];
        writeln!(out, "\n=== Collection Operations ===")?;
        writeln!(out, "Original list: {:?}", numbers)?;
        writeln!(out, "Deduplicated: {:?}", deduplicate(&numbers))?;
        writeln!(out, "Shuffled: {:?}", shuffle_copy(&numbers))?;
        Ok(())
    }

    fn files<W: Write>(&self, out: &mut W) -> Result<()> {
        let path = &self.config.demo_file;
        writeln!(out, "\n=== File Operations ===")?;
        ensure_parent_dir(path)?;
        write_whole_file(path, &self.config.demo_file_content)?;
        writeln!(out, "File content: {}", read_whole_file(path)?)?;
        Ok(())
    }

    fn dates<W: Write>(&self, out: &mut W) -> Result<()> {
        let pattern = self.config.pattern()?;
        writeln!(out, "\n=== Date and Time ===")?;
        writeln!(
            out,
            "Current time: {}",
            format_instant(&Utc::now(), &pattern, self.config.zone)
        )?;
        Ok(())
    }

    fn hashing<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n=== Hashing ===")?;
        writeln!(out, "MD5 hash: {}", md5_hex("test"))?;
        Ok(())
    }

    fn concurrency<W: Write>(&self, out: &mut W) -> Result<()> {
        let delay = Duration::from_millis(self.config.task_delay_ms);
        writeln!(out, "\n=== Concurrency ===")?;
        let handle = run_async(move || async move {
            tokio::time::sleep(delay).await;
            Ok::<_, std::io::Error>(TASK_RESULT.to_string())
        });
        writeln!(out, "{}", handle.get()?)?;
        Ok(())
    }

    fn math<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n=== Math ===")?;
        writeln!(out, "GCD(12,18): {}", gcd(12, 18))?;
        writeln!(out, "LCM(12,18): {}", lcm(12, 18)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::Zone;
    use tempfile::tempdir;

    fn quick_config(dir: &std::path::Path) -> ToolkitConfig {
        ToolkitConfig {
            demo_file: dir.join("test.txt"),
            task_delay_ms: 10,
            zone: Zone::Utc,
            ..ToolkitConfig::default()
        }
    }

    #[test]
    fn test_run_prints_every_section() {
        let dir = tempdir().unwrap();
        let mut out = Vec::new();
        Demo::new(quick_config(dir.path())).run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for header in ["String", "Collection", "File", "Date and Time", "Hashing", "Concurrency", "Math"] {
            assert!(text.contains(header), "missing section {}", header);
        }
        assert!(text.contains("Reversed: !avaJ ,olleH"));
        assert!(text.contains("Capitalized: Java"));
        assert!(text.contains("Deduplicated: [1, 2, 3, 4, 5]"));
        assert!(text.contains("File content: Hello, File!\n\n"));
        assert!(text.contains("MD5 hash: 098f6bcd4621d373cade4e832627b4f6"));
        assert!(text.contains(TASK_RESULT));
        assert!(text.contains("GCD(12,18): 6"));
        assert!(text.contains("LCM(12,18): 36"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("test.txt")).unwrap(),
            "Hello, File!"
        );
    }

    #[test]
    fn test_run_creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out/nested/test.txt");
        let config = ToolkitConfig {
            demo_file: nested.clone(),
            ..quick_config(dir.path())
        };
        Demo::new(config).run(&mut Vec::new()).unwrap();
        assert_eq!(std::fs::read_to_string(nested).unwrap(), "Hello, File!");
    }

    #[test]
    fn test_run_stops_on_file_error() {
        let dir = tempdir().unwrap();
        let config = ToolkitConfig {
            demo_file: dir.path().to_path_buf(),
            ..quick_config(dir.path())
        };
        let mut out = Vec::new();
        let err = Demo::new(config).run(&mut out).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== File Operations ==="));
        assert!(!text.contains("=== Math ==="));
    }
}
