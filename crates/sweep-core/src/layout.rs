// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Derived sweep configuration (§3 "Sweep Layout").

use std::path::PathBuf;

/// Immutable configuration derived once at startup from the manifest and a
/// sample run directory. Never recomputed during a sweep execution.
#[derive(Debug, Clone)]
pub struct SweepLayout {
    /// Relative destination folder name, as written in the manifest's
    /// `destfolder` directive.
    pub dest_folder_name: String,
    /// Absolute path to the destination folder.
    pub dest_path: PathBuf,
    /// Basenames of the per-body input files present in every run directory,
    /// in manifest order.
    pub body_file_basenames: Vec<String>,
    /// Basename (without extension) of the primary input file in a sample run.
    pub system_name: String,
    /// Body names read from each body input file's first `sName` directive.
    pub body_names: Vec<String>,
}

impl SweepLayout {
    /// Path of the checkpoint file for this sweep, rooted at `cwd`.
    pub fn checkpoint_path(&self, cwd: &std::path::Path) -> PathBuf {
        cwd.join(format!(".{}", self.dest_folder_name))
    }

    /// Path of the optional binary archive file for this sweep, rooted at `cwd`.
    pub fn archive_path(&self, cwd: &std::path::Path) -> PathBuf {
        cwd.join(format!("{}.bpa", self.dest_folder_name))
    }
}
