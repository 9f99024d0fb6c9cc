// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

//! Pluggable operator-notification surface for `-m <addr>` (§6.4, §9 Open
//! Questions: "no notification mechanism is specified"). The core only
//! needs to surface the address to something pluggable; [`LogNotifier`] is
//! the no-op default that simply logs it.

use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, addr: &str, message: &str);
}

/// Default [`Notifier`]: logs the address and message at `info` level.
/// Documented no-op per §9 — no real notification channel is specified.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, addr: &str, message: &str) {
        tracing::info!(addr, message, "sweep notification (no-op transport)");
    }
}
