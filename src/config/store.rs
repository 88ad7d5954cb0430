//! Active-configuration store.
//!
//! Holds the model the engine is currently serving from. Readers take
//! lock-free snapshots; a reload builds a complete new model and swaps
//! it in atomically, so in-flight work keeps its snapshot and never
//! observes a mix of old and new.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::model::ServerConfig;

/// Shared cell for the active [`ServerConfig`].
pub struct ConfigStore {
    active: ArcSwap<ServerConfig>,
}

impl ConfigStore {
    /// Create a store holding the initial model.
    pub fn new(initial: ServerConfig) -> Self {
        Self {
            active: ArcSwap::from_pointee(initial),
        }
    }

    /// Snapshot of the active model. Cheap and lock-free; the snapshot
    /// stays valid across later swaps.
    pub fn current(&self) -> Arc<ServerConfig> {
        self.active.load_full()
    }

    /// Atomically replace the active model.
    pub fn replace(&self, next: ServerConfig) {
        self.active.store(Arc::new(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn named(name: &str) -> ServerConfig {
        ServerConfig::from_node(&Node::builder("server").attribute("name", name).build())
    }

    #[test]
    fn test_replace_swaps_current() {
        let store = ConfigStore::new(named("first"));
        assert_eq!(store.current().name(), "first");

        store.replace(named("second"));
        assert_eq!(store.current().name(), "second");
    }

    #[test]
    fn test_old_snapshot_survives_swap() {
        let store = ConfigStore::new(named("first"));
        let snapshot = store.current();

        store.replace(named("second"));
        assert_eq!(snapshot.name(), "first");
        assert_eq!(store.current().name(), "second");
    }
}
