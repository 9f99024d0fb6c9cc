// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Opaque, immutable descriptor of the simulator binary (§3 "ToolMetadata").
//!
//! Acquired exactly once by the orchestrator before any worker starts
//! (§4.5), then shared read-only with every worker. The core treats the
//! contents as opaque; only the injected archive-write capability (§4.4)
//! interprets them.

use std::sync::Arc;

/// Immutable tool metadata, cheaply cloneable (`Arc`-backed) so every worker
/// can hold its own handle without contention.
#[derive(Debug, Clone)]
pub struct ToolMetadata(Arc<str>);

impl ToolMetadata {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Arc::from(raw.into()))
    }

    /// Raw bytes captured from the simulator's introspection invocation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ToolMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
