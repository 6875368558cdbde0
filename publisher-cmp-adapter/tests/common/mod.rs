//! Shared test helpers for adapter tests.

#![allow(dead_code)]

use consent_plugin_sdk::{ConsentAdapter, ConsentAdapterDelegate};
use consent_settings::InMemorySettingsStore;
use consent_types::{ConsentKey, ConsentValue, Consents};
use publisher_cmp_adapter::{PublisherCmpAdapter, PublisherCmpConfig};
use std::sync::{Arc, Mutex, Weak};

/// Delegate that records every key it is notified about.
#[derive(Default)]
pub struct RecordingDelegate {
    changes: Mutex<Vec<ConsentKey>>,
}

impl RecordingDelegate {
    pub fn changes(&self) -> Vec<ConsentKey> {
        self.changes.lock().unwrap().clone()
    }

    /// Recorded keys sorted, for comparisons where emission order is unspecified.
    pub fn sorted_changes(&self) -> Vec<ConsentKey> {
        let mut changes = self.changes();
        changes.sort();
        changes
    }

    pub fn count(&self) -> usize {
        self.changes.lock().unwrap().len()
    }

    pub fn reset(&self) {
        self.changes.lock().unwrap().clear();
    }
}

impl ConsentAdapterDelegate for RecordingDelegate {
    fn on_consent_change(&self, key: &ConsentKey) {
        self.changes.lock().unwrap().push(key.clone());
    }
}

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn consents(entries: &[(&str, &str)]) -> Consents {
    entries
        .iter()
        .map(|(k, v)| (ConsentKey::from(*k), ConsentValue::from(*v)))
        .collect()
}

pub fn keys(names: &[&str]) -> Vec<ConsentKey> {
    let mut keys: Vec<ConsentKey> = names.iter().map(|k| ConsentKey::from(*k)).collect();
    keys.sort();
    keys
}

/// Builds an adapter over a fresh in-memory settings store.
pub fn make_adapter(
    uses_external_privacy_strings: bool,
) -> (PublisherCmpAdapter, Arc<InMemorySettingsStore>) {
    init_tracing();
    let settings = Arc::new(InMemorySettingsStore::new());
    let adapter = PublisherCmpAdapter::new(
        PublisherCmpConfig::new(uses_external_privacy_strings),
        settings.clone(),
    );
    (adapter, settings)
}

/// Registers a fresh recording delegate. The caller keeps it alive.
pub fn attach_delegate(adapter: &dyn ConsentAdapter) -> Arc<RecordingDelegate> {
    let delegate = Arc::new(RecordingDelegate::default());
    let weak: Weak<RecordingDelegate> = Arc::downgrade(&delegate);
    adapter.set_delegate(weak);
    delegate
}
