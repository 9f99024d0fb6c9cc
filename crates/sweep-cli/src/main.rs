// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! `sweep` — parallel sweep execution engine CLI (§6.4).
//!
//! Reads a sweep manifest, dispatches pending run directories across a pool
//! of workers, and optionally archives each completed run's output into a
//! single shared file.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod cli;
mod logging;
mod run;
mod status;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbosity());

    match cli.dispatch() {
        cli::CommandKind::Run(args) => run::execute(args).await,
        cli::CommandKind::Status(args) => status::execute(args).await,
    }
}
