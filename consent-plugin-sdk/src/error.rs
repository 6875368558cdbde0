//! Error types for the module lifecycle.

use thiserror::Error;

/// Result type for module operations.
pub type ModuleResult<T> = Result<T, ModuleError>;

/// Errors a module or the module factory can report to Core.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The module could not finish initialization.
    #[error("module initialization failed: {0}")]
    InitializationFailed(String),

    /// A credential entry was present but unusable. For modules that reject
    /// bad credentials; the publisher CMP adapter falls back to defaults.
    #[error("invalid credential '{key}': {reason}")]
    InvalidCredentials { key: String, reason: String },

    /// No constructor is registered under the requested class name.
    #[error("unknown module class: {0}")]
    UnknownModule(String),

    /// A constructor is already registered under this class name.
    #[error("module class already registered: {0}")]
    AlreadyRegistered(String),
}
