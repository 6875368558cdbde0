//! Core consent adapter for publishers that run their own CMP.
//!
//! The publisher's CMP collects consent and the publisher reports the result
//! here through [`PublisherCmpAdapter::set_consents`]. The adapter relays it to
//! Core through the [`consent_plugin_sdk::ConsentAdapter`] contract and tells
//! Core's delegate about every key whose value changed.
//!
//! # Standard privacy strings
//!
//! When [`PublisherCmpConfig::uses_external_privacy_strings`] is set, the IAB
//! US Privacy and TCF strings the CMP writes to the shared settings store are
//! merged into the reported consents. Publisher-supplied values take
//! precedence on key collisions. After initialization the adapter observes
//! those settings keys and notifies the delegate when they change.
//!
//! # Consent actions
//!
//! Granting, denying and resetting consent, and showing a consent dialog, are
//! owned by the publisher's CMP. The adapter reports every such request as
//! unsuccessful and leaves its state untouched.
//!
//! # Example
//!
//! ```
//! use consent_settings::InMemorySettingsStore;
//! use consent_types::{keys, values, Consents};
//! use publisher_cmp_adapter::{PublisherCmpAdapter, PublisherCmpConfig};
//! use std::sync::Arc;
//!
//! let settings = Arc::new(InMemorySettingsStore::new());
//! let adapter = PublisherCmpAdapter::new(PublisherCmpConfig::default(), settings);
//!
//! let mut consents = Consents::new();
//! consents.insert(keys::CCPA_OPT_IN.into(), values::GRANTED.into());
//! adapter.set_consents(consents.clone());
//!
//! assert_eq!(adapter.store().consents(), consents);
//! ```

mod adapter;
mod config;
mod store;

pub use adapter::{PublisherCmpAdapter, CLASS_NAME, MODULE_ID, MODULE_VERSION};
pub use config::{PublisherCmpConfig, USES_IAB_STRINGS_KEY};
pub use store::{changed_keys, ConsentStateStore};
