//! Property record loading
//!
//! A property file holds either one JSON object or an array of objects.
//! Directories are walked recursively; file order is sorted so that record
//! order is deterministic.

use crate::config::ResolvedConfig;
use crate::property::PropertyAttributes;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// One property read from disk
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    /// File the record was read from
    pub source: PathBuf,
    /// Position within the file (0 for single-object files)
    pub index: usize,
    pub property: PropertyAttributes,
}

/// Records loaded from a path, plus the number of files that failed to load
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<PropertyRecord>,
    pub skipped_files: usize,
}

/// Parse the contents of a property file
pub fn parse_records(content: &str) -> Result<Vec<PropertyAttributes>> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("property file is not valid JSON")?;

    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item).with_context(|| format!("invalid property at index {}", i))
            })
            .collect(),
        serde_json::Value::Object(_) => {
            let property = serde_json::from_value(value).context("invalid property object")?;
            Ok(vec![property])
        }
        _ => anyhow::bail!("expected a property object or an array of property objects"),
    }
}

/// Load every record in one file
pub fn load_file(path: &Path) -> Result<Vec<PropertyRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read property file: {}", path.display()))?;
    let properties = parse_records(&content)
        .with_context(|| format!("failed to parse property file: {}", path.display()))?;

    Ok(properties
        .into_iter()
        .enumerate()
        .map(|(index, property)| PropertyRecord {
            source: path.to_path_buf(),
            index,
            property,
        })
        .collect())
}

/// Load records from a file or directory
///
/// An explicit file that fails to load is an error. Inside a directory, files
/// that fail to load are skipped with a warning and counted.
pub fn load_records(path: &Path, config: Option<&ResolvedConfig>) -> Result<LoadedRecords> {
    if path.is_file() {
        return Ok(LoadedRecords {
            records: load_file(path)?,
            skipped_files: 0,
        });
    }

    let mut loaded = LoadedRecords::default();
    for file in collect_property_files(path, config)? {
        match load_file(&file) {
            Ok(records) => {
                log::debug!("loaded {} record(s) from {}", records.len(), file.display());
                loaded.records.extend(records);
            }
            Err(e) => {
                log::warn!("skipping file {}: {:#}", file.display(), e);
                loaded.skipped_files += 1;
            }
        }
    }
    if loaded.skipped_files > 0 {
        log::warn!(
            "skipped {} file(s) that could not be loaded",
            loaded.skipped_files
        );
    }

    Ok(loaded)
}

/// Check if a file name looks like a property file
fn is_property_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Returns true for directory names that should not be traversed
fn is_skipped_dir(name: &str) -> bool {
    name.starts_with('.') || name == "node_modules" || name == "target"
}

/// Collect property files under a directory, filtered by config globs
///
/// Glob patterns are matched against the path relative to `root`.
pub fn collect_property_files(
    root: &Path,
    config: Option<&ResolvedConfig>,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if root.is_file() {
        files.push(root.to_path_buf());
        return Ok(files);
    }
    if root.is_dir() {
        collect_recursive(root, &mut files)?;
    }

    if let Some(config) = config {
        files.retain(|file| {
            let relative = file.strip_prefix(root).unwrap_or(file);
            let keep = config.should_include(relative);
            if !keep {
                log::debug!("excluded by config: {}", relative.display());
            }
            keep
        });
    }

    // Sort files for deterministic order
    files.sort();

    Ok(files)
}

fn collect_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry_result in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry_result?;
        let path = entry.path();
        let metadata = std::fs::symlink_metadata(&path)
            .with_context(|| format!("Failed to read metadata: {}", path.display()))?;

        if metadata.is_symlink() {
            continue;
        }
        let name = path.file_name().and_then(|n: &OsStr| n.to_str());
        if metadata.is_dir() {
            if name.map(is_skipped_dir).unwrap_or(false) {
                continue;
            }
            collect_recursive(&path, files)?;
        } else if metadata.is_file() && name.map(is_property_file).unwrap_or(false) {
            files.push(path);
        }
    }

    Ok(())
}
