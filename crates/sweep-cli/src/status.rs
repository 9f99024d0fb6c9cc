// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! `sweep status <manifest>` — lock-free checkpoint summary.

use crate::cli::StatusArgs;

pub async fn execute(args: StatusArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (layout, _runs) = sweep_manifest::build_layout(&args.manifest, &cwd)?;
    let ckpt_path = layout.checkpoint_path(&cwd);

    let (done, in_progress, pending) = sweep_checkpoint::counts(&ckpt_path).await?;
    println!("{done} done, {in_progress} in progress, {pending} pending");

    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
