// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! One-shot simulator introspection (§3 "ToolMetadata", §9 "one-shot
//! external metadata call").
//!
//! Invoked exactly once by the orchestrator before any worker starts, and
//! never again. Workers only ever receive the resulting value by shared
//! reference (§4.5): re-invoking this while a worker holds the archive lock
//! open risks file-descriptor inheritance and ordering problems that
//! manifest as deadlock.

use std::process::Stdio;

use sweep_core::{SimulationFailure, ToolMetadata};
use tokio::process::Command;

/// Flag the simulator accepts to print its introspection/help banner.
const DESCRIBE_FLAG: &str = "-h";

/// Run `<simulator_binary> -h` and capture its combined output as the
/// sweep's immutable [`ToolMetadata`].
pub async fn describe(simulator_binary: &str) -> Result<ToolMetadata, SimulationFailure> {
    let output = Command::new(simulator_binary)
        .arg(DESCRIBE_FLAG)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| SimulationFailure::DescribeSpawn {
            binary: simulator_binary.to_string(),
            source,
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    tracing::info!(
        binary = simulator_binary,
        bytes = combined.len(),
        "captured tool metadata"
    );

    Ok(ToolMetadata::new(combined))
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
