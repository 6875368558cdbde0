//! Adapter configuration.

use consent_plugin_sdk::ModuleCredentials;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Credentials key carrying [`PublisherCmpConfig::uses_external_privacy_strings`].
pub const USES_IAB_STRINGS_KEY: &str = "usesIABStringsFromUserDefaults";

/// Configuration for [`crate::PublisherCmpAdapter`], fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherCmpConfig {
    /// Merge the IAB privacy strings found in the shared settings store into
    /// the reported consents, and observe them for changes.
    #[serde(rename = "usesIABStringsFromUserDefaults", default)]
    pub uses_external_privacy_strings: bool,
}

impl PublisherCmpConfig {
    pub fn new(uses_external_privacy_strings: bool) -> Self {
        Self {
            uses_external_privacy_strings,
        }
    }

    /// Builds the configuration from a loosely typed credentials bag.
    ///
    /// A missing or non-boolean [`USES_IAB_STRINGS_KEY`] entry yields the
    /// default configuration.
    pub fn from_credentials(credentials: &ModuleCredentials) -> Self {
        match credentials.get(USES_IAB_STRINGS_KEY) {
            None => Self::default(),
            Some(Value::Bool(enabled)) => Self::new(*enabled),
            Some(other) => {
                warn!(
                    key = USES_IAB_STRINGS_KEY,
                    value = %other,
                    "Expected a boolean credential, falling back to false"
                );
                Self::default()
            }
        }
    }
}
