// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Command-line surface (§6.4).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sweep", version, about = "Parallel sweep execution engine")]
pub struct Cli {
    #[command(subcommand)]
    pub status_command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the checkpoint's done/in-progress/pending counts and exit.
    /// The "status-reporting tool" §1 calls out of scope for the core
    /// orchestrator — hosted here instead, reading the checkpoint file
    /// without its lock (§4.2 `counts()`).
    Status(StatusArgs),
}

/// Tagged wrapper so `main.rs` can match on either a `status` invocation or
/// the default run invocation without re-deriving `RunArgs`' positional.
pub enum CommandKind {
    Run(RunArgs),
    Status(StatusArgs),
}

impl Cli {
    pub fn dispatch(self) -> CommandKind {
        match self.status_command {
            Some(Command::Status(args)) => CommandKind::Status(args),
            None => CommandKind::Run(self.run),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        match self.status_command {
            Some(Command::Status(_)) => Verbosity::Quiet,
            None => {
                if self.run.quiet {
                    Verbosity::Quiet
                } else if self.run.verbose {
                    Verbosity::Verbose
                } else {
                    Verbosity::Normal
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Path to the sweep manifest.
    pub manifest: PathBuf,

    /// Number of worker processes. Defaults to the host's available
    /// parallelism.
    #[arg(short = 'c', long = "cores")]
    pub cores: Option<usize>,

    /// Suppress per-run progress reporting.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log per-run start/finish at `info` level (default filter already
    /// shows these; this flag additionally enables `sweep.worker` spans).
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable the shared archive (`<destFolder>.bpa`).
    #[arg(long = "bp")]
    pub bigplanet: bool,

    /// Operator notification address. Acted on by the pluggable `Notifier`;
    /// no transport is assumed beyond logging unless one is configured.
    #[arg(short = 'm', long = "notify")]
    pub notify_addr: Option<String>,

    /// Wipe and re-run even if the checkpoint reports every run complete.
    #[arg(long = "force")]
    pub force: bool,

    /// Validate the manifest and initialize the checkpoint without running
    /// any worker or invoking the simulator.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Name (or path) of the external simulator binary to invoke.
    #[arg(long = "simulator", default_value = "vplanet")]
    pub simulator_binary: String,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Path to the sweep manifest (used only to locate the checkpoint file).
    pub manifest: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
