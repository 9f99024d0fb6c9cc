// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sweep-orchestrator: top-level entry point.
//!
//! Reads the manifest, initializes or restores the checkpoint, constructs
//! the scheduler, runs it to completion, and performs final archive cleanup.

mod notify;
mod orchestrator;

pub use notify::{LogNotifier, Notifier};
pub use orchestrator::{run_parallel, OrchestratorConfig, RunOutcome};
