//! Consent keys, values and the mapping between them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Mapping of consent keys to their current values, as reported to Core.
pub type Consents = HashMap<ConsentKey, ConsentValue>;

/// Identifies a privacy signal, e.g. `"tcf"` or a publisher-defined key.
///
/// Well-known keys live in [`crate::keys`]. Any other string is a custom key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsentKey(String);

impl ConsentKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key, returning the underlying string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ConsentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConsentKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ConsentKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ConsentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConsentKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The state of a privacy signal.
///
/// Either a small token such as `"granted"` (see [`crate::values`]) or an
/// opaque string such as a raw IAB privacy string. Values are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsentValue(String);

impl ConsentValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the underlying string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ConsentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConsentValue {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ConsentValue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ConsentValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConsentValue {
    fn borrow(&self) -> &str {
        &self.0
    }
}
