//! Well-known consent keys understood by Core and its downstream consumers.
//!
//! Publishers may report any other string as a custom key.

/// IAB TCF consent string.
pub const TCF: &str = "tcf";

/// IAB US Privacy string.
pub const USP: &str = "usp";

/// CCPA opt-in state, usually one of the tokens in [`crate::values`].
pub const CCPA_OPT_IN: &str = "ccpa_opt_in";

/// Whether GDPR consent was given.
pub const GDPR_CONSENT_GIVEN: &str = "gdpr_consent_given";

/// IAB Global Privacy Platform string.
pub const GPP: &str = "gpp";
