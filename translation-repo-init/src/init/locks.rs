//! Per-language mutual exclusion.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::trace;

/// Async locks keyed by language code.
///
/// Holding the guard for a code keeps any other caller in this process from
/// creating or cloning the same repository at the same time.
#[derive(Debug, Default)]
pub struct LanguageLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl LanguageLocks {
    /// Creates an empty lock table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and takes the lock of `key`.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(key.to_string()).or_default())
        };
        trace!(key, "Waiting for language lock");
        lock.lock_owned().await
    }
}
