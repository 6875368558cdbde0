//! Consent state: publisher consents, the optional merge with standard
//! privacy strings, and per-key change notification.

use consent_plugin_sdk::ConsentAdapterDelegate;
use consent_settings::{
    read_privacy_strings, settings_keys, PrivacyStringKey, SettingsCallback, SharedSettingsStore,
    Subscription, STANDARD_PRIVACY_STRINGS,
};
use consent_types::{ConsentKey, Consents};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};
use tracing::{debug, info};

/// Keys whose value differs between `old` and `new`.
///
/// Covers keys added or changed in `new` and keys removed from `old`. Each key
/// appears at most once; order is unspecified.
pub fn changed_keys(old: &Consents, new: &Consents) -> Vec<ConsentKey> {
    let updated = new
        .iter()
        .filter(|(key, value)| old.get(*key) != Some(*value))
        .map(|(key, _)| key.clone());
    let removed = old.keys().filter(|key| !new.contains_key(*key)).cloned();
    updated.chain(removed).collect()
}

enum Lifecycle {
    Uninitialized,
    /// Held only so dropping the store cancels it. `None` when standard
    /// privacy strings are not used.
    Initialized { _subscription: Option<Subscription> },
}

/// State reachable from settings-store callbacks. Callbacks hold it weakly.
struct Shared {
    uses_external_privacy_strings: bool,
    settings: Arc<dyn SharedSettingsStore>,
    custom: RwLock<Consents>,
    /// Privacy strings as of the last settings signal, keyed by consent key.
    observed_external: Mutex<Consents>,
    delegate: RwLock<Option<Weak<dyn ConsentAdapterDelegate>>>,
}

impl Shared {
    fn custom(&self) -> Consents {
        self.custom
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn on_settings_changed(&self, settings_key: &str) {
        let Some(entry) = PrivacyStringKey::for_settings_key(settings_key) else {
            return;
        };
        let current = entry.read(self.settings.as_ref());

        {
            let mut observed = self
                .observed_external
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if observed.get(entry.consent_key) == current.as_ref() {
                return;
            }
            match current {
                Some(value) => {
                    observed.insert(ConsentKey::from(entry.consent_key), value);
                }
                None => {
                    observed.remove(entry.consent_key);
                }
            }
        }

        let shadowed = self
            .custom
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(entry.consent_key);
        if shadowed {
            debug!(
                key = entry.consent_key,
                "Privacy string changed under a publisher-supplied consent"
            );
            return;
        }

        self.notify(&[ConsentKey::from(entry.consent_key)]);
    }

    /// Delivers one notification per key. No lock is held while the delegate runs.
    fn notify(&self, keys: &[ConsentKey]) {
        if keys.is_empty() {
            return;
        }

        let delegate = self
            .delegate
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade);
        let Some(delegate) = delegate else {
            debug!(changed = keys.len(), "No consent delegate, dropping notifications");
            return;
        };

        for key in keys {
            debug!(key = %key, "Consent changed");
            delegate.on_consent_change(key);
        }
    }
}

/// Holds publisher-supplied consents and resolves what Core sees.
///
/// With standard privacy strings enabled, reads merge the strings currently in
/// the settings store under the publisher consents, which win on collision.
/// Nothing merged is cached: every [`consents`](Self::consents) call reads
/// the settings store again.
///
/// Dropping the store cancels its settings observation.
pub struct ConsentStateStore {
    shared: Arc<Shared>,
    lifecycle: Mutex<Lifecycle>,
    should_collect_consent: AtomicBool,
}

impl ConsentStateStore {
    pub fn new(
        uses_external_privacy_strings: bool,
        settings: Arc<dyn SharedSettingsStore>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                uses_external_privacy_strings,
                settings,
                custom: RwLock::new(Consents::new()),
                observed_external: Mutex::new(Consents::new()),
                delegate: RwLock::new(None),
            }),
            lifecycle: Mutex::new(Lifecycle::Uninitialized),
            should_collect_consent: AtomicBool::new(false),
        }
    }

    pub fn uses_external_privacy_strings(&self) -> bool {
        self.shared.uses_external_privacy_strings
    }

    /// Starts observing standard privacy strings when they are in use.
    ///
    /// Only the first call has an effect.
    pub fn initialize(&self) {
        let mut lifecycle = self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner);
        if matches!(*lifecycle, Lifecycle::Initialized { .. }) {
            debug!("Consent store already initialized");
            return;
        }

        let subscription = self
            .shared
            .uses_external_privacy_strings
            .then(|| self.observe_privacy_strings());
        info!(
            observing_privacy_strings = subscription.is_some(),
            "Consent store initialized"
        );
        *lifecycle = Lifecycle::Initialized {
            _subscription: subscription,
        };
    }

    pub fn is_initialized(&self) -> bool {
        matches!(
            *self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner),
            Lifecycle::Initialized { .. }
        )
    }

    fn observe_privacy_strings(&self) -> Subscription {
        let snapshot = read_privacy_strings(self.shared.settings.as_ref());
        *self
            .shared
            .observed_external
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = snapshot;

        let shared = Arc::downgrade(&self.shared);
        let callback: SettingsCallback = Arc::new(move |settings_key: &str| {
            if let Some(shared) = shared.upgrade() {
                shared.on_settings_changed(settings_key);
            }
        });
        let subscription = self
            .shared
            .settings
            .subscribe(&settings_keys(), callback);

        // Writes that landed while subscribing never reached the callback.
        // Re-checking against the baseline reports them; values the callback
        // already recorded compare equal and stay silent.
        for entry in STANDARD_PRIVACY_STRINGS {
            self.shared.on_settings_changed(entry.settings_key);
        }
        subscription
    }

    /// Resolved consents: publisher consents, merged over the standard privacy
    /// strings when those are in use.
    pub fn consents(&self) -> Consents {
        let custom = self.shared.custom();
        if !self.shared.uses_external_privacy_strings {
            return custom;
        }

        let mut resolved = read_privacy_strings(self.shared.settings.as_ref());
        resolved.extend(custom);
        resolved
    }

    /// Publisher consents alone, without privacy strings.
    pub fn custom_consents(&self) -> Consents {
        self.shared.custom()
    }

    /// Replaces the publisher consents and notifies every changed key once.
    pub fn set_consents(&self, consents: Consents) {
        let changed = {
            let mut custom = self
                .shared
                .custom
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let old = std::mem::replace(&mut *custom, consents);
            changed_keys(&old, &custom)
        };
        self.shared.notify(&changed);
    }

    pub fn should_collect_consent(&self) -> bool {
        self.should_collect_consent.load(Ordering::Acquire)
    }

    pub fn set_should_collect_consent(&self, should_collect: bool) {
        self.should_collect_consent
            .store(should_collect, Ordering::Release);
    }

    /// Replaces the delegate. The store never keeps it alive.
    pub fn set_delegate(&self, delegate: Weak<dyn ConsentAdapterDelegate>) {
        *self
            .shared
            .delegate
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(delegate);
    }

    pub fn clear_delegate(&self) {
        *self
            .shared
            .delegate
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}
