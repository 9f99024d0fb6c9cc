// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! `sweep <manifest> [...]` — the default CLI action (§4.6, §6.4).

use std::sync::Arc;

use sweep_archive::{LogGatherer, TarArchiveSink};
use sweep_orchestrator::{run_parallel, LogNotifier, OrchestratorConfig, RunOutcome};

use crate::cli::RunArgs;

pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    let cores = args.cores.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or_else(|_| num_cpus::get())
    });

    let config = OrchestratorConfig {
        manifest_path: args.manifest,
        cores,
        quiet: args.quiet,
        verbose: args.verbose,
        bigplanet: args.bigplanet,
        force: args.force,
        dry_run: args.dry_run,
        simulator_binary: args.simulator_binary,
        notify_addr: args.notify_addr,
    };

    let outcome = run_parallel(
        config,
        Arc::new(LogGatherer),
        Arc::new(TarArchiveSink),
        Some(Arc::new(LogNotifier)),
    )
    .await?;

    match outcome {
        RunOutcome::Completed => {}
        RunOutcome::AlreadyDone => {
            eprintln!("sweep already complete; pass --force to re-run");
        }
        RunOutcome::DryRun { layout, total_runs } => {
            eprintln!(
                "dry run: {total_runs} run(s) under `{}`, system `{}`",
                layout.dest_path.display(),
                layout.system_name
            );
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
