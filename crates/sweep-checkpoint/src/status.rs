// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Lock-free checkpoint reporting (§4.2 `counts()`, §7 "status-reporting
//! tool that reads the checkpoint file without the lock").

use std::path::Path;

use sweep_core::{CheckpointError, RunStatus};

use crate::format::parse;

/// `(done, in_progress, pending)` counts read directly from `ckpt_path`,
/// bypassing the checkpoint lock entirely. A torn read (a concurrent
/// rewrite in progress) yields a stale summary, never corruption, per §4.2.
pub async fn counts(ckpt_path: &Path) -> Result<(usize, usize, usize), CheckpointError> {
    let text = tokio::fs::read_to_string(ckpt_path)
        .await
        .map_err(|source| CheckpointError::Read {
            path: ckpt_path.to_path_buf(),
            source,
        })?;
    let (_, entries) = parse(&text, ckpt_path)?;

    let done = entries.iter().filter(|e| e.status == RunStatus::Complete).count();
    let in_progress = entries
        .iter()
        .filter(|e| e.status == RunStatus::InProgress)
        .count();
    let pending = entries.iter().filter(|e| e.status == RunStatus::Pending).count();

    Ok((done, in_progress, pending))
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
