//! Directory scanning and glob-filtered file discovery.
//!
//! Backs bulk-export file enumeration and project-root detection in the
//! infrastructure/providers layers.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{Result, UtilsError};

/// Build a [`GlobSet`] from a list of glob patterns (e.g. `*.rs`, `**/*.md`).
///
/// # Errors
///
/// Returns [`UtilsError::InvalidInput`] if any pattern fails to compile.
pub fn build_glob_set(patterns: &[impl AsRef<str>]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern.as_ref())
            .map_err(|e| UtilsError::invalid_input(format!("bad glob '{}': {e}", pattern.as_ref())))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| UtilsError::invalid_input(format!("failed to build glob set: {e}")))
}

/// Recursively list file paths under `root` matching `patterns`, skipping
/// hidden directories (names starting with `.`).
///
/// # Errors
///
/// Returns [`UtilsError::InvalidInput`] if `patterns` fails to compile.
pub fn find_matching_files(root: &Path, patterns: &[impl AsRef<str>]) -> Result<Vec<PathBuf>> {
    let set = build_glob_set(patterns)?;
    let mut matches = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e.file_name().to_str().unwrap_or("")))
        .filter_map(std::result::Result::ok)
    {
        if entry.file_type().is_file() {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if set.is_match(relative) {
                matches.push(entry.path().to_path_buf());
            }
        }
    }
    Ok(matches)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

/// Normalize a path (resolve `.`/`..` components without touching the
/// filesystem), returning a forward-slash string.
///
/// # Errors
///
/// Returns [`UtilsError::InvalidInput`] if the path contains non-UTF-8
/// components.
pub fn normalize_path_string(path: &Path) -> Result<String> {
    let normalized = normpath::PathExt::normalize_virtually(path)
        .map_err(|e| UtilsError::invalid_input(format!("failed to normalize path: {e}")))?;
    normalized
        .as_path()
        .to_str()
        .map(|s| s.replace('\\', "/"))
        .ok_or_else(|| UtilsError::invalid_input("path contains non-UTF-8 characters"))
}
