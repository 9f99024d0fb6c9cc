// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! One worker's claim → execute → archive? → mark loop (§4.5).

use std::sync::Arc;

use sweep_archive::{ArchiveWriter, GatherContext, Gatherer};
use sweep_checkpoint::Checkpoint;
use sweep_core::{CheckpointError, ExitClass, SweepLayout, ToolMetadata};
use sweep_runner::Runner;

/// Bundle of archive-mode collaborators. Present iff `-bp` was requested
/// (§4.5 precondition: `toolMetadata` is present iff `-bp` was requested).
#[derive(Clone)]
pub struct ArchiveBundle {
    pub archive: Arc<ArchiveWriter>,
    pub gatherer: Arc<dyn Gatherer>,
    pub tool_metadata: ToolMetadata,
}

pub async fn run_worker(
    worker_id: usize,
    checkpoint: Arc<Checkpoint>,
    runner: Arc<Runner>,
    layout: Arc<SweepLayout>,
    archive: Option<ArchiveBundle>,
    verbose: bool,
) -> Result<(), CheckpointError> {
    loop {
        let Some(run_dir) = checkpoint.claim_next().await? else {
            return Ok(());
        };

        let span = tracing::info_span!(
            "sweep.worker",
            worker_id,
            run = %run_dir.display(),
        );
        let _enter = span.enter();

        if verbose {
            tracing::info!("starting {}", run_dir.display());
        }

        let class = runner.execute(&run_dir).await;

        match class {
            ExitClass::Success => {
                if let Some(bundle) = &archive {
                    if let Err(()) = archive_run(bundle, &layout, &run_dir).await {
                        checkpoint.mark_failed(&run_dir).await?;
                        continue;
                    }
                }
                checkpoint.mark_complete(&run_dir).await?;
                if verbose {
                    tracing::info!("finished {}", run_dir.display());
                }
            }
            ExitClass::Failure => {
                checkpoint.mark_failed(&run_dir).await?;
                if verbose {
                    tracing::warn!("failed {}", run_dir.display());
                }
            }
        }
    }
}

/// Gather (lock-free) then append the run's data to the shared archive.
/// A gather or archive-write failure is not fatal to the worker: the run
/// is left for the caller to mark FAILED and retry (§7 `ArchiveError`).
async fn archive_run(bundle: &ArchiveBundle, layout: &SweepLayout, run_dir: &std::path::Path) -> Result<(), ()> {
    let ctx = GatherContext {
        run_dir,
        system_name: &layout.system_name,
        body_names: &layout.body_names,
        log_file_name: sweep_runner::LOG_FILE_NAME,
        body_file_basenames: &layout.body_file_basenames,
        tool_metadata: &bundle.tool_metadata,
    };

    let data = match bundle.gatherer.gather(&ctx).await {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(run = %run_dir.display(), error = %err, "gather failed");
            return Err(());
        }
    };

    bundle
        .archive
        .append_run(run_dir, &data, &bundle.tool_metadata, &layout.system_name)
        .await
        .map_err(|err| {
            tracing::warn!(run = %run_dir.display(), error = %err, "archive write failed");
        })
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
