//! Consent type definitions shared by Core consent modules.
//!
//! This crate defines the plugin-agnostic vocabulary every consent adapter
//! speaks:
//! - [`ConsentKey`] / [`ConsentValue`] string newtypes
//! - [`Consents`], the key-to-value mapping reported to Core
//! - Well-known key and value constants ([`keys`], [`values`])
//! - [`ConsentSource`] and [`ConsentDialogType`] used by consent actions
//!
//! Anything specific to a single CMP belongs in that CMP's adapter crate.

mod action;
mod consent;
pub mod keys;
pub mod values;

pub use action::{ConsentDialogType, ConsentSource};
pub use consent::{ConsentKey, ConsentValue, Consents};
