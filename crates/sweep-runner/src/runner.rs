// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Child-process invocation and exit classification (§4.3).

use std::path::{Path, PathBuf};
use std::process::Stdio;

use sweep_core::{ExitClass, SimulationFailure};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Name of the per-run log file the runner appends to (§6.2).
pub const LOG_FILE_NAME: &str = "vplanet_log";
/// Name of the primary input file passed to the simulator (§4.3 step 2).
pub const INPUT_FILE_NAME: &str = "vpl.in";

/// Invokes a named simulator binary in a fixed working directory with a
/// fixed argument vector — never through a shell (§9).
#[derive(Debug, Clone)]
pub struct Runner {
    simulator_binary: String,
}

impl Runner {
    pub fn new(simulator_binary: impl Into<String>) -> Self {
        Self {
            simulator_binary: simulator_binary.into(),
        }
    }

    /// Execute the simulator in `run_dir` and classify the outcome.
    ///
    /// A missing binary, an inaccessible `run_dir`, or a failure to open the
    /// log file all collapse to [`ExitClass::Failure`] (§4.3 "Failure
    /// semantics") — the caller marks the run PENDING and another attempt
    /// may be made. A spawn error never terminates the worker.
    pub async fn execute(&self, run_dir: &Path) -> ExitClass {
        match self.execute_inner(run_dir).await {
            Ok(class) => class,
            Err(err) => {
                tracing::warn!(run = %run_dir.display(), error = %err, "simulation failed");
                ExitClass::Failure
            }
        }
    }

    async fn execute_inner(&self, run_dir: &Path) -> Result<ExitClass, SimulationFailure> {
        let log_path = run_dir.join(LOG_FILE_NAME);
        let mut log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .await
            .map_err(|source| SimulationFailure::LogOpen {
                path: log_path.clone(),
                source,
            })?;

        let span = tracing::info_span!(
            "sweep.runner",
            run = %run_dir.display(),
            bin = %self.simulator_binary,
        );
        let _enter = span.enter();

        let mut command = Command::new(&self.simulator_binary);
        command
            .arg(INPUT_FILE_NAME)
            .current_dir(run_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let child = command.spawn().map_err(|source| SimulationFailure::Spawn {
            binary: self.simulator_binary.clone(),
            run_dir: run_dir.to_path_buf(),
            source,
        })?;

        // wait_with_output drains both pipes concurrently to completion before
        // yielding the exit status — a process whose pipes are not drained
        // may otherwise block indefinitely on large outputs (§4.3 step 3).
        let output = child
            .wait_with_output()
            .await
            .map_err(|source| SimulationFailure::Spawn {
                binary: self.simulator_binary.clone(),
                run_dir: run_dir.to_path_buf(),
                source,
            })?;

        write_log(&mut log_file, &log_path, &output.stderr, &output.stdout).await?;

        if output.status.success() {
            Ok(ExitClass::Success)
        } else {
            Err(SimulationFailure::NonZeroExit {
                binary: self.simulator_binary.clone(),
                run_dir: run_dir.to_path_buf(),
                status: output.status.to_string(),
            })
        }
    }
}

async fn write_log(
    log_file: &mut tokio::fs::File,
    log_path: &PathBuf,
    stderr: &[u8],
    stdout: &[u8],
) -> Result<(), SimulationFailure> {
    let write_err = |source| SimulationFailure::LogWrite {
        path: log_path.clone(),
        source,
    };
    log_file.write_all(stderr).await.map_err(write_err)?;
    log_file.write_all(stdout).await.map_err(write_err)?;
    log_file.flush().await.map_err(write_err)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
