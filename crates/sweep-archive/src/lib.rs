// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sweep-archive: Archive Writer.
//!
//! Wraps a single shared archive file. Under an exclusive writer lock it
//! creates a per-run group and delegates dataset population to an injected
//! [`ArchiveSink`]. Gathering the per-run payload via [`Gatherer`] happens
//! outside the lock entirely — the lock protects only open/write/close.

mod gather;
mod sink;
mod writer;

pub use gather::{GatherContext, Gatherer, LogGatherer, RunData};
pub use sink::{ArchiveSink, TarArchiveSink};
pub use writer::ArchiveWriter;
