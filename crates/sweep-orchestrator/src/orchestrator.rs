// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! `run_parallel` (§4.6).

use std::path::PathBuf;
use std::sync::Arc;

use sweep_archive::{ArchiveSink, ArchiveWriter, Gatherer};
use sweep_checkpoint::{Checkpoint, RestoreOutcome};
use sweep_core::SweepError;
use sweep_engine::{ArchiveMode, SchedulerConfig};

use crate::notify::{LogNotifier, Notifier};

/// Configuration for one `run_parallel` invocation, mirroring the CLI
/// surface of §6.4.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub manifest_path: PathBuf,
    pub cores: usize,
    pub quiet: bool,
    pub verbose: bool,
    pub bigplanet: bool,
    pub force: bool,
    /// Reads the manifest, derives the layout, and initializes/restores the
    /// checkpoint without starting any worker or invoking the simulator.
    pub dry_run: bool,
    pub simulator_binary: String,
    pub notify_addr: Option<String>,
}

/// Outcome of one `run_parallel` invocation.
#[derive(Debug)]
pub enum RunOutcome {
    /// The worker pool ran to completion (possibly zero workers needed if
    /// every run was already pending-free from a prior partial execution).
    Completed,
    /// Every run was already `COMPLETE` and `--force` was not set (§4.2
    /// `ALREADY_DONE`). The orchestrator performed no work.
    AlreadyDone,
    /// `--dry-run` was set; only layout derivation and checkpoint
    /// initialization ran.
    DryRun {
        layout: sweep_core::SweepLayout,
        total_runs: usize,
    },
}

/// Read the manifest, initialize or restore the checkpoint, run the
/// scheduler to completion, and clean up the archive if it was not
/// requested (§4.6 steps 1-7).
pub async fn run_parallel(
    config: OrchestratorConfig,
    gatherer: Arc<dyn Gatherer>,
    sink: Arc<dyn ArchiveSink>,
    notifier: Option<Arc<dyn Notifier>>,
) -> Result<RunOutcome, SweepError> {
    let notifier: Arc<dyn Notifier> = notifier.unwrap_or_else(|| Arc::new(LogNotifier));
    let cwd = std::env::current_dir().map_err(|source| SweepError::Io {
        path: PathBuf::from("."),
        source,
    })?;

    let (layout, runs) = sweep_manifest::build_layout(&config.manifest_path, &cwd)?;

    if config.dry_run {
        let ckpt_path = layout.checkpoint_path(&cwd);
        let (_, outcome) = Checkpoint::init_or_restore(
            ckpt_path,
            config.manifest_path.clone(),
            runs.clone(),
            config.force,
        )
        .await?;
        tracing::info!(?outcome, total_runs = runs.len(), "dry run complete");
        return Ok(RunOutcome::DryRun {
            layout,
            total_runs: runs.len(),
        });
    }

    let ckpt_path = layout.checkpoint_path(&cwd);
    let archive_path = layout.archive_path(&cwd);

    let (checkpoint, outcome) =
        Checkpoint::init_or_restore(ckpt_path.clone(), config.manifest_path.clone(), runs, config.force)
            .await?;

    if outcome == RestoreOutcome::AlreadyDone {
        tracing::info!("sweep already complete; pass --force to re-run");
        if let Some(addr) = &config.notify_addr {
            notifier.notify(addr, "sweep already complete").await;
        }
        return Ok(RunOutcome::AlreadyDone);
    }

    // Captured exactly once, before any worker starts (§4.5 design notes).
    let tool_metadata = if config.bigplanet {
        Some(sweep_runner::describe(&config.simulator_binary).await?)
    } else {
        None
    };

    let archive_mode = match &tool_metadata {
        Some(tool_metadata) => {
            if !archive_path.exists() {
                std::fs::File::create(&archive_path).map_err(|source| {
                    sweep_core::ArchiveError::Open {
                        path: archive_path.clone(),
                        source,
                    }
                })?;
            }
            Some(ArchiveMode {
                archive: Arc::new(ArchiveWriter::new(archive_path.clone(), sink.clone())),
                gatherer: gatherer.clone(),
                tool_metadata: tool_metadata.clone(),
            })
        }
        None => None,
    };

    let scheduler_config = SchedulerConfig {
        checkpoint: Arc::new(checkpoint),
        layout: Arc::new(layout),
        simulator_binary: config.simulator_binary.clone(),
        cores: config.cores.max(1),
        verbose: config.verbose && !config.quiet,
        archive: archive_mode,
    };
    let ckpt_path_for_report = ckpt_path.clone();

    sweep_engine::run(scheduler_config).await?;

    if !config.bigplanet && archive_path.exists() {
        std::fs::remove_file(&archive_path).map_err(|source| sweep_core::ArchiveError::Open {
            path: archive_path.clone(),
            source,
        })?;
    }

    if let Some(addr) = &config.notify_addr {
        let (done, in_progress, pending) = sweep_checkpoint::counts(&ckpt_path_for_report).await?;
        notifier
            .notify(
                addr,
                &format!("sweep finished: {done} done, {in_progress} in progress, {pending} pending"),
            )
            .await;
    }

    Ok(RunOutcome::Completed)
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
