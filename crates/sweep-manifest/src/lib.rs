// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sweep-manifest: Manifest & Layout Reader.
//!
//! Reads the sweep manifest to obtain the destination folder name and the
//! per-body input file list, enumerates the run directories, and derives
//! the system name and body list from a sample run. All failures surface as
//! [`ConfigError`] naming the offending path; none are retried by this crate.

mod layout;
mod manifest;
mod runs;
mod system;

pub use layout::build_layout;
pub use manifest::{read_manifest, ManifestInfo};
pub use runs::enumerate_runs;
pub use system::derive_system;
