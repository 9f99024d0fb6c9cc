// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Cross-crate error taxonomy.

use std::path::PathBuf;

/// Startup-time configuration failures. Fatal to the orchestrator; never retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("manifest `{path}` has no `destfolder` directive")]
    MissingDestFolder { path: PathBuf },

    #[error("destination folder `{path}` does not exist")]
    DestFolderMissing { path: PathBuf },

    #[error("destination folder `{path}` contains no run directories")]
    NoRuns { path: PathBuf },

    #[error("sample run `{path}` has no primary input file")]
    NoPrimaryInput { path: PathBuf },

    #[error("`{path}` is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Checkpoint read/write failures. Fatal to the worker that hits one; fatal
/// to the orchestrator if encountered during startup.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("failed to read checkpoint `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write checkpoint `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("checkpoint `{path}` is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("unknown run directory `{path}` passed to checkpoint mutation")]
    UnknownRun { path: PathBuf },
}

/// Failure to open or write the shared archive for a single run. The caller
/// marks the run FAILED and continues with the next run (§7).
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to open archive `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write group `{group}` into archive `{path}`: {source}")]
    Write {
        path: PathBuf,
        group: String,
        #[source]
        source: std::io::Error,
    },
}

/// The external simulator exited non-zero, could not be spawned, or its log
/// file could not be opened. Never propagated; recorded as FAILED (§7).
#[derive(Debug, thiserror::Error)]
pub enum SimulationFailure {
    #[error("failed to open log file `{path}`: {source}")]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write log file `{path}`: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to spawn `{binary}` in `{run_dir}`: {source}")]
    Spawn {
        binary: String,
        run_dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{binary}` exited with status {status} in `{run_dir}`")]
    NonZeroExit {
        binary: String,
        run_dir: PathBuf,
        status: String,
    },

    #[error("failed to spawn `{binary}` for tool-metadata introspection: {source}")]
    DescribeSpawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error union for the CLI's `anyhow`-wrapped `main`.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error(transparent)]
    Simulation(#[from] SimulationFailure),
    #[error("I/O error at `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
