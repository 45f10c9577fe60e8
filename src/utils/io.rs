//! IO Utilities for whole-file text operations
//! Author: kartik4091

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use crate::error::Result;

/// Reads a text file line by line and joins the lines with `\n`.
///
/// Every line, including the last one, is followed by `\n`, whether or not the
/// file ended with a newline. `\r\n` endings are normalized.
#[instrument]
pub fn read_whole_file(path: &Path) -> Result<String> {
    let reader = BufReader::new(File::open(path)?);
    let mut content = String::new();
    for line in reader.lines() {
        content.push_str(&line?);
        content.push('\n');
    }
    debug!(bytes = content.len(), "read file");
    Ok(content)
}

/// Creates or truncates `path` and writes exactly `content`.
#[instrument(skip(content))]
pub fn write_whole_file(path: &Path, content: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    debug!(bytes = content.len(), "wrote file");
    Ok(())
}

/// Ensures parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Returns true if path has one of the allowed extensions.
pub fn has_allowed_extension(path: &Path, allowed: &[&str]) -> bool {
    match path.extension() {
        Some(ext) => allowed.iter().any(|e| ext.eq_ignore_ascii_case(e)),
        None => false,
    }
}

/// Recursively collects regular files under `dir`, sorted by path.
/// When `extensions` is given only matching files are kept.
#[instrument]
pub fn list_files(dir: &Path, extensions: Option<&[&str]>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(dir, extensions, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files(dir: &Path, extensions: Option<&[&str]>, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, extensions, out)?;
        } else if extensions.map_or(true, |allowed| has_allowed_extension(&path, allowed)) {
            out.push(path);
        }
    }
    Ok(())
}
