// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! `appendRun` (§4.4): acquire the writer lock, open, delegate to the
//! injected sink, close on every exit path, release the lock.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sweep_core::{ArchiveError, ToolMetadata};
use tokio::sync::Mutex;

use crate::gather::RunData;
use crate::sink::ArchiveSink;

/// Owns the shared archive path and the single mutex serializing every
/// worker's access to it. At most one worker holds the archive open at a
/// time (§4.4 invariant) — this is how the scheduler tolerates a
/// non-concurrent-writer archive library.
pub struct ArchiveWriter {
    archive_path: PathBuf,
    sink: Arc<dyn ArchiveSink>,
    lock: Mutex<()>,
}

impl ArchiveWriter {
    pub fn new(archive_path: PathBuf, sink: Arc<dyn ArchiveSink>) -> Self {
        Self {
            archive_path,
            sink,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.archive_path
    }

    /// Append one run's gathered data as a group keyed by `run_dir`'s
    /// basename. The group name is derived here rather than by the caller
    /// so every sink sees a consistent key (§8 "Archive group cardinality").
    pub async fn append_run(
        &self,
        run_dir: &Path,
        data: &RunData,
        tool_metadata: &ToolMetadata,
        system_name: &str,
    ) -> Result<(), ArchiveError> {
        let group_name = run_dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ArchiveError::Write {
                path: self.archive_path.clone(),
                group: String::new(),
                source: std::io::Error::other("run directory has no basename"),
            })?
            .to_string();

        let _guard = self.lock.lock().await;
        self.sink
            .write(&self.archive_path, &group_name, data, tool_metadata, system_name)
            .await
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
