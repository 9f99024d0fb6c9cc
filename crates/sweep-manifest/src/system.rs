// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! System name and body name derivation from a sample run (§4.1).

use std::path::Path;
use sweep_core::ConfigError;

/// Locate the primary input file in `sample_run` (the one input file not
/// named in `body_file_basenames`), then read each body file's first
/// `sName <value>` directive.
///
/// Returns `(system_name, body_names)` where `system_name` is the primary
/// input file's basename without extension, and `body_names` are in the
/// same order as `body_file_basenames`.
pub fn derive_system(
    sample_run: &Path,
    body_file_basenames: &[String],
) -> Result<(String, Vec<String>), ConfigError> {
    let entries = std::fs::read_dir(sample_run).map_err(|source| ConfigError::Io {
        path: sample_run.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ConfigError::Io {
            path: sample_run.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name == "vplanet_log" || body_file_basenames.iter().any(|b| b == name) {
            continue;
        }
        candidates.push(path);
    }
    candidates.sort();

    let primary = candidates.into_iter().next().ok_or_else(|| ConfigError::NoPrimaryInput {
        path: sample_run.to_path_buf(),
    })?;

    let system_name = primary
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    let mut body_names = Vec::with_capacity(body_file_basenames.len());
    for basename in body_file_basenames {
        let body_path = sample_run.join(basename);
        let name = read_s_name(&body_path)?;
        body_names.push(name);
    }

    Ok((system_name, body_names))
}

/// Read the first `sName <value>` directive from a body input file.
fn read_s_name(path: &Path) -> Result<String, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        if tokens.next() == Some("sName") {
            if let Some(value) = tokens.next() {
                return Ok(value.to_string());
            }
        }
    }

    Err(ConfigError::Malformed {
        path: path.to_path_buf(),
        reason: "no sName directive found".to_string(),
    })
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
