//! The Core module wrapping [`ConsentStateStore`].

use crate::config::PublisherCmpConfig;
use crate::store::ConsentStateStore;
use async_trait::async_trait;
use consent_plugin_sdk::{
    ConsentAdapter, ConsentAdapterDelegate, Module, ModuleConfiguration, ModuleCredentials,
    ModuleFactory, ModuleResult,
};
use consent_settings::SharedSettingsStore;
use consent_types::{ConsentDialogType, ConsentSource, Consents};
use std::sync::{Arc, Weak};
use tracing::{info, warn};

/// Identifier Core uses for this module.
pub const MODULE_ID: &str = "publisher_cmp";

/// Version Core reports for this module, taken from the crate version.
pub const MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Class name under which [`PublisherCmpAdapter::register`] installs the
/// adapter in a [`ModuleFactory`].
pub const CLASS_NAME: &str = "PublisherCmpAdapter";

/// Consent adapter for publishers that run their own CMP.
pub struct PublisherCmpAdapter {
    config: PublisherCmpConfig,
    store: ConsentStateStore,
}

impl PublisherCmpAdapter {
    pub fn new(config: PublisherCmpConfig, settings: Arc<dyn SharedSettingsStore>) -> Self {
        Self {
            config,
            store: ConsentStateStore::new(config.uses_external_privacy_strings, settings),
        }
    }

    /// Constructs the adapter from the credentials bag Core was configured with.
    pub fn from_credentials(
        credentials: &ModuleCredentials,
        settings: Arc<dyn SharedSettingsStore>,
    ) -> Self {
        Self::new(PublisherCmpConfig::from_credentials(credentials), settings)
    }

    /// Installs a constructor for this adapter under [`CLASS_NAME`].
    pub fn register(
        factory: &mut ModuleFactory,
        settings: Arc<dyn SharedSettingsStore>,
    ) -> ModuleResult<()> {
        factory.register(CLASS_NAME, move |credentials: &ModuleCredentials| {
            Arc::new(Self::from_credentials(credentials, Arc::clone(&settings)))
                as Arc<dyn ConsentAdapter>
        })
    }

    pub fn config(&self) -> PublisherCmpConfig {
        self.config
    }

    pub fn store(&self) -> &ConsentStateStore {
        &self.store
    }

    /// Reports the consents collected by the publisher's CMP, replacing the
    /// previous ones. The delegate hears about every key that changed.
    pub fn set_consents(&self, consents: Consents) {
        self.store.set_consents(consents);
    }

    /// Reports whether the publisher's CMP wants consent collected.
    pub fn set_should_collect_consent(&self, should_collect: bool) {
        self.store.set_should_collect_consent(should_collect);
    }
}

#[async_trait]
impl Module for PublisherCmpAdapter {
    fn module_id(&self) -> &str {
        MODULE_ID
    }

    fn module_version(&self) -> &str {
        MODULE_VERSION
    }

    async fn initialize(&self, configuration: &ModuleConfiguration) -> ModuleResult<()> {
        info!(
            module_id = MODULE_ID,
            sdk_version = %configuration.sdk_version,
            uses_external_privacy_strings = self.config.uses_external_privacy_strings,
            "Initializing module"
        );
        self.store.initialize();
        Ok(())
    }
}

#[async_trait]
impl ConsentAdapter for PublisherCmpAdapter {
    fn consents(&self) -> Consents {
        self.store.consents()
    }

    fn should_collect_consent(&self) -> bool {
        self.store.should_collect_consent()
    }

    async fn grant_consent(&self, source: ConsentSource) -> bool {
        warn!(?source, "grant_consent is not supported; use your CMP's API");
        false
    }

    async fn deny_consent(&self, source: ConsentSource) -> bool {
        warn!(?source, "deny_consent is not supported; use your CMP's API");
        false
    }

    async fn reset_consent(&self) -> bool {
        warn!("reset_consent is not supported; use your CMP's API");
        false
    }

    async fn show_consent_dialog(&self, dialog_type: ConsentDialogType) -> bool {
        warn!(?dialog_type, "show_consent_dialog is not supported; use your CMP's API");
        false
    }

    fn set_delegate(&self, delegate: Weak<dyn ConsentAdapterDelegate>) {
        self.store.set_delegate(delegate);
    }

    fn clear_delegate(&self) {
        self.store.clear_delegate();
    }
}
