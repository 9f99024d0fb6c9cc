// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! The injected, lock-free gather capability (§4.4).
//!
//! `gather` is pure and runs outside the writer lock: it reads the run
//! directory's outputs and builds an in-memory, opaque [`RunData`] value.
//! The core never interprets the bytes; only a concrete [`ArchiveSink`]
//! does (archive-data extraction is explicitly out of scope, §1).

use std::path::Path;

use async_trait::async_trait;
use sweep_core::{ArchiveError, ToolMetadata};

/// Everything a [`Gatherer`] may need to read a run's outputs, mirroring
/// the parameters named in §4.4's `gather(...)` signature.
#[derive(Debug, Clone, Copy)]
pub struct GatherContext<'a> {
    pub run_dir: &'a Path,
    pub system_name: &'a str,
    pub body_names: &'a [String],
    pub log_file_name: &'a str,
    pub body_file_basenames: &'a [String],
    pub tool_metadata: &'a ToolMetadata,
}

/// Opaque payload produced by a [`Gatherer`] and consumed by an
/// [`ArchiveSink`]. The core never inspects the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunData(Vec<u8>);

impl RunData {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Reads the run directory's outputs and builds an opaque [`RunData`].
/// Implementations must not acquire the archive writer lock; §4.5 calls
/// this outside it specifically so gathering never blocks other workers.
#[async_trait]
pub trait Gatherer: Send + Sync {
    async fn gather(&self, ctx: &GatherContext<'_>) -> Result<RunData, ArchiveError>;
}

/// Default [`Gatherer`]: reads the per-run simulation log verbatim. A real
/// deployment would substitute a gatherer that flattens simulator-specific
/// output files into typed datasets (out of scope for this core, §1).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogGatherer;

#[async_trait]
impl Gatherer for LogGatherer {
    async fn gather(&self, ctx: &GatherContext<'_>) -> Result<RunData, ArchiveError> {
        let log_path = ctx.run_dir.join(ctx.log_file_name);
        let bytes = tokio::fs::read(&log_path)
            .await
            .map_err(|source| ArchiveError::Open {
                path: log_path,
                source,
            })?;
        Ok(RunData::new(bytes))
    }
}

#[cfg(test)]
#[path = "gather_tests.rs"]
mod tests;
