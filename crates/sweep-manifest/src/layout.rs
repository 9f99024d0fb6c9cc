// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Assembly of the immutable [`SweepLayout`] from manifest + sample run.

use std::path::Path;
use sweep_core::{ConfigError, SweepLayout};

use crate::{derive_system, enumerate_runs, read_manifest};

/// Read the manifest, enumerate the run directories, and derive the system
/// and body names from the first run — the full startup sequence of §4.6
/// steps 1-2, packaged for reuse by the orchestrator and by tests.
///
/// Returns the layout and the ordered list of run directories (callers need
/// both: the layout for checkpoint/archive paths, the run list to seed the
/// checkpoint).
pub fn build_layout(
    manifest_path: &Path,
    cwd: &Path,
) -> Result<(SweepLayout, Vec<std::path::PathBuf>), ConfigError> {
    let info = read_manifest(manifest_path, cwd)?;
    let dest_path = cwd.join(&info.dest_folder_name);
    let runs = enumerate_runs(&dest_path)?;

    let sample = runs.first().ok_or_else(|| ConfigError::NoRuns {
        path: dest_path.clone(),
    })?;
    let (system_name, body_names) = derive_system(sample, &info.body_file_basenames)?;

    let layout = SweepLayout {
        dest_folder_name: info.dest_folder_name,
        dest_path,
        body_file_basenames: info.body_file_basenames,
        system_name,
        body_names,
    };

    Ok((layout, runs))
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
