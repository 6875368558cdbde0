//! Configuration types handed to modules by Core.

use serde::{Deserialize, Serialize};

/// Free-form credentials bag Core passes to modules it constructs by class
/// name. Its schema belongs to each module, not to Core.
pub type ModuleCredentials = serde_json::Map<String, serde_json::Value>;

/// Configuration Core passes to [`crate::Module::initialize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfiguration {
    /// Version of the Core SDK initializing the module.
    pub sdk_version: String,
    /// Publisher application identifier, when Core has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl Default for ModuleConfiguration {
    fn default() -> Self {
        Self {
            sdk_version: "1.0.0".into(),
            application_id: None,
        }
    }
}

/// Identity of a loaded module, as reported in Core's module listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub module_id: String,
    pub module_version: String,
}
