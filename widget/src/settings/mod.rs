//! # Settings Store
//!
//! In-memory implementation of the [`SettingsPort`] consumed by the slippage
//! controller, plus the derived setting monitor used for badges and warnings.

pub mod monitor;

pub use monitor::SettingMonitor;

use crate::core::service::SettingsPort;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe in-memory settings store.
///
/// Values are plain strings keyed by name. Every write bumps a monotonic
/// revision counter; readers that cached a value can compare revisions to
/// know a newer commit exists.
#[derive(Default)]
pub struct InMemorySettings {
    values: RwLock<HashMap<String, String>>,
    revision: AtomicU64,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsPort for InMemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set_value(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
        self.revision.fetch_add(1, Ordering::Release);
    }

    fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_none_for_unknown_key() {
        let store = InMemorySettings::new();
        assert!(store.get("slippage").is_none());
    }

    #[test]
    fn test_set_value_overwrites() {
        let store = InMemorySettings::new();
        store.set_value("slippage", "0.5");
        store.set_value("slippage", "1");
        assert_eq!(store.get("slippage").as_deref(), Some("1"));
    }

    #[test]
    fn test_revision_increments_on_every_write() {
        let store = InMemorySettings::new();
        assert_eq!(store.revision(), 0);
        store.set_value("slippage", "0.5");
        store.set_value("slippage", "0.5");
        assert_eq!(store.revision(), 2);
    }
}
