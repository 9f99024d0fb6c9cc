// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Run directory enumeration.

use std::path::{Path, PathBuf};
use sweep_core::ConfigError;

/// Every immediate child directory of `dest_path`, ordered lexicographically
/// by basename so dispatch order is deterministic for tests.
///
/// Fails with [`ConfigError`] if `dest_path` does not exist or contains no
/// child directories — the latter is a hard error: nothing to do.
pub fn enumerate_runs(dest_path: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    if !dest_path.is_dir() {
        return Err(ConfigError::DestFolderMissing {
            path: dest_path.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dest_path).map_err(|source| ConfigError::Io {
        path: dest_path.to_path_buf(),
        source,
    })?;

    let mut runs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ConfigError::Io {
            path: dest_path.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            runs.push(path);
        }
    }

    if runs.is_empty() {
        return Err(ConfigError::NoRuns {
            path: dest_path.to_path_buf(),
        });
    }

    runs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(runs)
}

#[cfg(test)]
#[path = "runs_tests.rs"]
mod tests;
