//! Process-local settings store.

use crate::store::{SettingsCallback, SharedSettingsStore};
use crate::subscription::Subscription;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::debug;

struct Observer {
    keys: HashSet<String>,
    callback: SettingsCallback,
}

#[derive(Default)]
struct ObserverRegistry {
    next_id: u64,
    observers: HashMap<u64, Observer>,
}

/// In-memory [`SharedSettingsStore`].
///
/// Every write signals the observers of the written key, even when the value
/// is unchanged, the way platform preference stores post a change
/// notification per write. Callbacks run on the writing thread after all
/// internal locks are released.
#[derive(Default)]
pub struct InMemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
    registry: Arc<Mutex<ObserverRegistry>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key` and signals its observers.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone(), value.into());
        self.notify(&key);
    }

    /// Removes `key` and signals its observers. Returns the removed value.
    pub fn remove(&self, key: &str) -> Option<String> {
        let removed = self
            .values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        self.notify(key);
        removed
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .len()
    }

    fn notify(&self, key: &str) {
        let callbacks: Vec<SettingsCallback> = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .values()
            .filter(|o| o.keys.contains(key))
            .map(|o| Arc::clone(&o.callback))
            .collect();

        for callback in callbacks {
            callback(key);
        }
    }
}

impl SharedSettingsStore for InMemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn subscribe(&self, keys: &[&str], callback: SettingsCallback) -> Subscription {
        let id = {
            let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            let id = registry.next_id;
            registry.next_id += 1;
            registry.observers.insert(
                id,
                Observer {
                    keys: keys.iter().map(|k| (*k).to_string()).collect(),
                    callback,
                },
            );
            id
        };
        debug!(subscription_id = id, keys = ?keys, "Settings subscription added");

        let registry = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .observers
                    .remove(&id);
                debug!(subscription_id = id, "Settings subscription cancelled");
            }
        })
    }
}
