// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Logging configuration. `-q` raises the default filter to `warn`; plain
//! invocation keeps `info`; `RUST_LOG` always overrides.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Verbosity;

/// No background writer thread is needed for a short-lived CLI process, so
/// this returns no drop guard (unlike the daemon's non-blocking file
/// appender); kept as a function so the default-filter choice stays in one
/// place.
pub fn init(verbosity: Verbosity) {
    let default_filter = match verbosity {
        Verbosity::Quiet => "warn",
        Verbosity::Normal => "info",
        Verbosity::Verbose => "sweep=debug,info",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}
