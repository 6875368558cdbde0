//! Standard IAB privacy strings kept in the shared settings store.

use crate::store::SharedSettingsStore;
use consent_types::{keys, ConsentKey, ConsentValue, Consents};

/// Settings key holding the IAB US Privacy string.
pub const IAB_US_PRIVACY_STRING: &str = "IABUSPrivacy_String";

/// Settings key holding the IAB TCF v2 TC string.
pub const IAB_TCF_TC_STRING: &str = "IABTCF_TCString";

/// Where a standard privacy string is stored and which consent key reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacyStringKey {
    pub settings_key: &'static str,
    pub consent_key: &'static str,
}

pub const STANDARD_PRIVACY_STRINGS: &[PrivacyStringKey] = &[
    PrivacyStringKey {
        settings_key: IAB_US_PRIVACY_STRING,
        consent_key: keys::USP,
    },
    PrivacyStringKey {
        settings_key: IAB_TCF_TC_STRING,
        consent_key: keys::TCF,
    },
];

impl PrivacyStringKey {
    /// Looks up the entry for a settings key.
    pub fn for_settings_key(settings_key: &str) -> Option<&'static PrivacyStringKey> {
        STANDARD_PRIVACY_STRINGS
            .iter()
            .find(|entry| entry.settings_key == settings_key)
    }

    /// Reads this privacy string. Empty strings count as absent.
    pub fn read(&self, store: &dyn SharedSettingsStore) -> Option<ConsentValue> {
        store
            .get(self.settings_key)
            .filter(|value| !value.is_empty())
            .map(ConsentValue::from)
    }
}

/// Settings keys of all standard privacy strings.
pub fn settings_keys() -> Vec<&'static str> {
    STANDARD_PRIVACY_STRINGS
        .iter()
        .map(|entry| entry.settings_key)
        .collect()
}

/// Reads every standard privacy string present in `store`, keyed by consent key.
pub fn read_privacy_strings(store: &dyn SharedSettingsStore) -> Consents {
    STANDARD_PRIVACY_STRINGS
        .iter()
        .filter_map(|entry| {
            entry
                .read(store)
                .map(|value| (ConsentKey::from(entry.consent_key), value))
        })
        .collect()
}
