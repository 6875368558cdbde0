//! Module and consent capability traits.

use crate::error::ModuleResult;
use crate::types::{ModuleConfiguration, ModuleInfo};
use async_trait::async_trait;
use consent_types::{ConsentDialogType, ConsentKey, ConsentSource, Consents};
use std::sync::Weak;

/// Identity and lifecycle contract. Every module must implement this.
#[async_trait]
pub trait Module: Send + Sync {
    /// Stable identifier Core uses to refer to the module.
    fn module_id(&self) -> &str;

    /// Version string of the module implementation.
    fn module_version(&self) -> &str;

    /// Prepares the module for use. Core awaits this once per module before
    /// relying on any capability.
    async fn initialize(&self, configuration: &ModuleConfiguration) -> ModuleResult<()>;

    fn info(&self) -> ModuleInfo {
        ModuleInfo {
            module_id: self.module_id().to_string(),
            module_version: self.module_version().to_string(),
        }
    }
}

/// Receives consent change notifications from a [`ConsentAdapter`].
///
/// Adapters hold their delegate weakly; Core owns it.
pub trait ConsentAdapterDelegate: Send + Sync {
    /// Called once for each key whose consent value changed.
    fn on_consent_change(&self, key: &ConsentKey);
}

/// Consent capability set Core expects from a consent module.
///
/// The action methods return `true` when the CMP carried out the action.
#[async_trait]
pub trait ConsentAdapter: Module {
    /// Current consent values.
    fn consents(&self) -> Consents;

    /// Whether the CMP has determined that consent should be collected.
    fn should_collect_consent(&self) -> bool;

    async fn grant_consent(&self, source: ConsentSource) -> bool;

    async fn deny_consent(&self, source: ConsentSource) -> bool;

    async fn reset_consent(&self) -> bool;

    async fn show_consent_dialog(&self, dialog_type: ConsentDialogType) -> bool;

    /// Registers the single delegate slot, replacing any previous delegate.
    fn set_delegate(&self, delegate: Weak<dyn ConsentAdapterDelegate>);

    fn clear_delegate(&self);
}
