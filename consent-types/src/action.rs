use serde::{Deserialize, Serialize};

/// Who initiated a consent action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentSource {
    /// The user made the choice, typically through a consent dialog.
    User,
    /// The publisher made the choice on the user's behalf.
    Developer,
}

/// The kind of consent dialog a host may ask a CMP to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentDialogType {
    /// Short first-layer dialog.
    Concise,
    /// Full second-layer dialog with per-purpose controls.
    Detailed,
}
