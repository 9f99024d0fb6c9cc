// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! `Scheduler.run` (§4.5): construct the worker pool and join it.

use std::sync::Arc;

use sweep_archive::{ArchiveWriter, Gatherer};
use sweep_checkpoint::Checkpoint;
use sweep_core::{CheckpointError, SweepLayout, ToolMetadata};
use sweep_runner::Runner;

use crate::worker::{run_worker, ArchiveBundle};

/// Archive-mode collaborators, present iff `-bp` was requested.
pub struct ArchiveMode {
    pub archive: Arc<ArchiveWriter>,
    pub gatherer: Arc<dyn Gatherer>,
    pub tool_metadata: ToolMetadata,
}

/// Everything the worker pool needs to run one sweep to completion.
pub struct SchedulerConfig {
    pub checkpoint: Arc<Checkpoint>,
    pub layout: Arc<SweepLayout>,
    pub simulator_binary: String,
    pub cores: usize,
    pub verbose: bool,
    pub archive: Option<ArchiveMode>,
}

/// Spawn `cores` worker tasks, each running the claim-execute-archive-mark
/// loop until the checkpoint's pending queue drains, then wait for all of
/// them to terminate (§4.5 construction).
///
/// Precondition: `cores >= 1`. A worker's own failure (e.g. a checkpoint
/// I/O error, §7) terminates only that worker; the others continue
/// draining the queue. The first such error is surfaced to the caller once
/// every worker has joined.
pub async fn run(config: SchedulerConfig) -> Result<(), CheckpointError> {
    let cores = config.cores.max(1);
    let runner = Arc::new(Runner::new(config.simulator_binary));
    let archive = config.archive.map(|mode| ArchiveBundle {
        archive: mode.archive,
        gatherer: mode.gatherer,
        tool_metadata: mode.tool_metadata,
    });

    let mut set = tokio::task::JoinSet::new();
    for worker_id in 0..cores {
        let checkpoint = config.checkpoint.clone();
        let runner = runner.clone();
        let layout = config.layout.clone();
        let archive = archive.clone();
        let verbose = config.verbose;
        set.spawn(async move { run_worker(worker_id, checkpoint, runner, layout, archive, verbose).await });
    }

    let mut first_err = None;
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::error!(error = %err, "worker terminated");
                first_err.get_or_insert(err);
            }
            Err(join_err) => {
                tracing::error!(error = %join_err, "worker task panicked");
            }
        }
    }

    match first_err {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
