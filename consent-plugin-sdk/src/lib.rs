//! Module contract for Core consent adapters.
//!
//! Core loads consent adapters as modules. Adapter authors implement
//! [`Module`] for identity and lifecycle, and [`ConsentAdapter`] for the
//! consent capability set. Core registers a [`ConsentAdapterDelegate`] on each
//! adapter to hear about consent changes.
//!
//! Hosts that build modules from configuration rather than code use
//! [`ModuleFactory`], which maps a class name to a constructor taking the
//! loosely typed [`ModuleCredentials`] bag.
//!
//! # Example
//!
//! ```
//! use consent_plugin_sdk::{ModuleConfiguration, ModuleCredentials, ModuleFactory};
//!
//! let factory = ModuleFactory::new();
//! let credentials = ModuleCredentials::new();
//! assert!(factory.make("Missing", &credentials).is_err());
//! assert_eq!(ModuleConfiguration::default().application_id, None);
//! ```

mod error;
mod factory;
mod module;
mod types;

pub use error::{ModuleError, ModuleResult};
pub use factory::{ModuleConstructor, ModuleFactory};
pub use module::{ConsentAdapter, ConsentAdapterDelegate, Module};
pub use types::{ModuleConfiguration, ModuleCredentials, ModuleInfo};
