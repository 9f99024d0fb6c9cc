// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! The line-oriented checkpoint file format (§6.3).
//!
//! ```text
//! Vspace File: <absolute manifest path>
//! Total Number of Simulations: <N>
//! <absolute run directory> <status>    ) repeated N times
//! …
//! THE END
//! ```

use std::path::{Path, PathBuf};
use sweep_core::{CheckpointError, RunEntry, RunStatus};

const HEADER_PREFIX: &str = "Vspace File: ";
const TOTAL_PREFIX: &str = "Total Number of Simulations: ";
const SENTINEL: &str = "THE END";

/// Render the full checkpoint text for `manifest_path` and `entries`.
pub fn render(manifest_path: &Path, entries: &[RunEntry]) -> String {
    let mut out = String::new();
    out.push_str(HEADER_PREFIX);
    out.push_str(&manifest_path.display().to_string());
    out.push('\n');
    out.push_str(TOTAL_PREFIX);
    out.push_str(&entries.len().to_string());
    out.push('\n');
    for entry in entries {
        out.push_str(&entry.path.display().to_string());
        out.push(' ');
        out.push_str(&entry.status.code().to_string());
        out.push('\n');
    }
    out.push_str(SENTINEL);
    out.push('\n');
    out
}

/// Parse a checkpoint file's text, returning the manifest path it names and
/// the ordered, deduplicated run entries.
///
/// Unknown status tokens are treated as PENDING (`RunStatus::from_token`).
/// A duplicate run directory keeps its first occurrence, per §4.2's restore
/// edge-case policy.
pub fn parse(text: &str, ckpt_path: &Path) -> Result<(PathBuf, Vec<RunEntry>), CheckpointError> {
    let malformed = |reason: &str| CheckpointError::Malformed {
        path: ckpt_path.to_path_buf(),
        reason: reason.to_string(),
    };

    let mut lines = text.lines();

    let header = lines.next().ok_or_else(|| malformed("missing header line"))?;
    let manifest_path = header
        .strip_prefix(HEADER_PREFIX)
        .ok_or_else(|| malformed("malformed `Vspace File:` header"))?;
    let manifest_path = PathBuf::from(manifest_path);

    let total_line = lines
        .next()
        .ok_or_else(|| malformed("missing `Total Number of Simulations:` line"))?;
    if total_line.strip_prefix(TOTAL_PREFIX).is_none() {
        return Err(malformed("malformed `Total Number of Simulations:` line"));
    }

    let mut entries = Vec::new();
    let mut seen = std::collections::HashSet::new();
    let mut saw_sentinel = false;
    for line in lines {
        if line == SENTINEL {
            saw_sentinel = true;
            break;
        }
        let Some((path_str, status_str)) = line.rsplit_once(' ') else {
            continue;
        };
        let path = PathBuf::from(path_str);
        if !seen.insert(path.clone()) {
            continue;
        }
        entries.push(RunEntry {
            path,
            status: RunStatus::from_token(status_str),
        });
    }

    if !saw_sentinel {
        return Err(malformed("missing `THE END` sentinel"));
    }

    Ok((manifest_path, entries))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
