use crate::subscription::Subscription;
use std::sync::Arc;

/// Invoked with the settings key that changed.
pub type SettingsCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// A process-wide key-value store consent modules read from but never write.
pub trait SharedSettingsStore: Send + Sync {
    /// Current string value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Registers `callback` for writes to any of `keys`.
    ///
    /// The callback may run on whichever thread performed the write. It keeps
    /// firing until the returned [`Subscription`] is cancelled or dropped.
    fn subscribe(&self, keys: &[&str], callback: SettingsCallback) -> Subscription;
}
