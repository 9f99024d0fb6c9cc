// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Line-oriented manifest parsing (§6.1).

use std::path::Path;
use sweep_core::ConfigError;

/// The two pieces of the manifest the core consumes. Any other directive is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInfo {
    pub dest_folder_name: String,
    pub body_file_basenames: Vec<String>,
}

/// Parse the manifest and verify the destination folder exists under `cwd`.
///
/// Recognized directives (case-sensitive first token):
/// - `destfolder <name>` — required, exactly one occurrence expected.
/// - `file <basename>` — zero or more, appended in order.
pub fn read_manifest(manifest_path: &Path, cwd: &Path) -> Result<ManifestInfo, ConfigError> {
    let text = std::fs::read_to_string(manifest_path).map_err(|source| ConfigError::Io {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    let mut dest_folder_name = None;
    let mut body_file_basenames = Vec::new();

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("destfolder") => {
                if let Some(name) = tokens.next() {
                    dest_folder_name = Some(name.to_string());
                }
            }
            Some("file") => {
                if let Some(name) = tokens.next() {
                    body_file_basenames.push(name.to_string());
                }
            }
            _ => {}
        }
    }

    let dest_folder_name = dest_folder_name.ok_or_else(|| ConfigError::MissingDestFolder {
        path: manifest_path.to_path_buf(),
    })?;

    let dest_path = cwd.join(&dest_folder_name);
    if !dest_path.is_dir() {
        return Err(ConfigError::DestFolderMissing { path: dest_path });
    }

    tracing::debug!(
        manifest = %manifest_path.display(),
        dest_folder_name,
        bodies = body_file_basenames.len(),
        "manifest parsed"
    );

    Ok(ManifestInfo {
        dest_folder_name,
        body_file_basenames,
    })
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
