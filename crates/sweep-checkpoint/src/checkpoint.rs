// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! The Checkpoint Store (§4.2): single source of truth for per-run status.

use std::path::{Path, PathBuf};

use sweep_core::{CheckpointError, RunEntry, RunStatus};
use tokio::sync::Mutex;

use crate::format::{parse, render};

/// Outcome of [`Checkpoint::init_or_restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No checkpoint existed; a fresh one was written.
    Fresh,
    /// An existing checkpoint was read and any `IN_PROGRESS` rows reset to
    /// `PENDING`.
    Restored,
    /// Every row was already `COMPLETE` and `force` was not set.
    AlreadyDone,
}

/// The checkpoint file, guarded by a single lock shared by every worker.
///
/// The lock doubles as the in-memory mirror of the on-disk rows: every
/// mutation takes it, edits the cached entries, rewrites the file in full,
/// then releases — matching §4.2's "the store reads and writes the entire
/// checkpoint file on every mutation". [`counts`] deliberately bypasses this
/// lock and reads the file straight off disk, per §4.2's "need not be taken
/// under the lock for reporting".
pub struct Checkpoint {
    ckpt_path: PathBuf,
    manifest_path: PathBuf,
    entries: Mutex<Vec<RunEntry>>,
}

impl Checkpoint {
    /// Path of the underlying checkpoint file.
    pub fn path(&self) -> &Path {
        &self.ckpt_path
    }

    /// Initialize a fresh checkpoint, restore and repair an existing one, or
    /// report the sweep is already complete (§4.2 steps 1-4). When `force`
    /// is set and every row is already `COMPLETE`, the run directories and
    /// the checkpoint file are wiped and initialization starts over, which
    /// is the `FORCE_RESET` step folded into a single call rather than left
    /// to the caller to re-invoke.
    pub async fn init_or_restore(
        ckpt_path: PathBuf,
        manifest_path: PathBuf,
        runs: Vec<PathBuf>,
        force: bool,
    ) -> Result<(Self, RestoreOutcome), CheckpointError> {
        loop {
            if !ckpt_path.exists() {
                let entries: Vec<RunEntry> = runs.iter().cloned().map(RunEntry::new).collect();
                write_file(&ckpt_path, &manifest_path, &entries).await?;
                tracing::info!(
                    path = %ckpt_path.display(),
                    runs = entries.len(),
                    "fresh checkpoint written"
                );
                return Ok((
                    Checkpoint {
                        ckpt_path,
                        manifest_path,
                        entries: Mutex::new(entries),
                    },
                    RestoreOutcome::Fresh,
                ));
            }

            let text = tokio::fs::read_to_string(&ckpt_path)
                .await
                .map_err(|source| CheckpointError::Read {
                    path: ckpt_path.clone(),
                    source,
                })?;
            let (read_manifest_path, mut entries) = parse(&text, &ckpt_path)?;

            let mut repaired = false;
            for entry in &mut entries {
                if entry.status == RunStatus::InProgress {
                    entry.status = RunStatus::Pending;
                    repaired = true;
                }
            }

            let done = entries.iter().filter(|e| e.status == RunStatus::Complete).count();
            if done == entries.len() && !entries.is_empty() {
                if force {
                    tracing::warn!(
                        path = %ckpt_path.display(),
                        "force reset: wiping run directories and checkpoint"
                    );
                    for entry in &entries {
                        if entry.path.is_dir() {
                            tokio::fs::remove_dir_all(&entry.path).await.map_err(|source| {
                                CheckpointError::Write {
                                    path: entry.path.clone(),
                                    source,
                                }
                            })?;
                        }
                    }
                    tokio::fs::remove_file(&ckpt_path).await.map_err(|source| {
                        CheckpointError::Write {
                            path: ckpt_path.clone(),
                            source,
                        }
                    })?;
                    continue;
                }

                tracing::info!(
                    path = %ckpt_path.display(),
                    "checkpoint reports all runs complete; pass --force to re-run"
                );
                return Ok((
                    Checkpoint {
                        ckpt_path,
                        manifest_path: read_manifest_path,
                        entries: Mutex::new(entries),
                    },
                    RestoreOutcome::AlreadyDone,
                ));
            }

            write_file(&ckpt_path, &read_manifest_path, &entries).await?;
            if repaired {
                tracing::info!(
                    path = %ckpt_path.display(),
                    "restored checkpoint; reset in-progress runs to pending"
                );
            }
            return Ok((
                Checkpoint {
                    ckpt_path,
                    manifest_path: read_manifest_path,
                    entries: Mutex::new(entries),
                },
                RestoreOutcome::Restored,
            ));
        }
    }

    /// Claim the lowest-indexed `PENDING` run and flip it to `IN_PROGRESS`.
    /// Returns `None` once no `PENDING` entry remains.
    pub async fn claim_next(&self) -> Result<Option<PathBuf>, CheckpointError> {
        let mut entries = self.entries.lock().await;
        let Some(entry) = entries.iter_mut().find(|e| e.status == RunStatus::Pending) else {
            return Ok(None);
        };
        entry.status = RunStatus::InProgress;
        let claimed = entry.path.clone();
        write_file(&self.ckpt_path, &self.manifest_path, &entries).await?;
        Ok(Some(claimed))
    }

    /// Mark `run_dir` `COMPLETE`.
    pub async fn mark_complete(&self, run_dir: &Path) -> Result<(), CheckpointError> {
        self.set_status(run_dir, RunStatus::Complete).await
    }

    /// Mark `run_dir` `PENDING` again, making it eligible for another claim.
    pub async fn mark_failed(&self, run_dir: &Path) -> Result<(), CheckpointError> {
        self.set_status(run_dir, RunStatus::Pending).await
    }

    async fn set_status(&self, run_dir: &Path, status: RunStatus) -> Result<(), CheckpointError> {
        let mut entries = self.entries.lock().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.path == run_dir)
            .ok_or_else(|| CheckpointError::UnknownRun {
                path: run_dir.to_path_buf(),
            })?;
        entry.status = status;
        write_file(&self.ckpt_path, &self.manifest_path, &entries).await
    }
}

async fn write_file(
    ckpt_path: &Path,
    manifest_path: &Path,
    entries: &[RunEntry],
) -> Result<(), CheckpointError> {
    let rendered = render(manifest_path, entries);
    tokio::fs::write(ckpt_path, rendered)
        .await
        .map_err(|source| CheckpointError::Write {
            path: ckpt_path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "checkpoint_tests.rs"]
mod tests;
