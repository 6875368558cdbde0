//! Shared settings store access for consent modules.
//!
//! Platforms keep standard IAB privacy strings in a process-wide key-value
//! store written by whichever CMP the publisher runs. Consent modules read
//! those keys and subscribe to changes through [`SharedSettingsStore`], so the
//! platform store can be swapped for [`InMemorySettingsStore`] in tests and in
//! hosts without one.

mod memory;
mod privacy_strings;
mod store;
mod subscription;

pub use memory::InMemorySettingsStore;
pub use privacy_strings::{
    read_privacy_strings, settings_keys, PrivacyStringKey, IAB_TCF_TC_STRING,
    IAB_US_PRIVACY_STRING, STANDARD_PRIVACY_STRINGS,
};
pub use store::{SettingsCallback, SharedSettingsStore};
pub use subscription::Subscription;
