//! Core types and error handling for PDM.
//!
//! Hosts the shared error taxonomy used by every pipeline stage. The three
//! stages themselves live in [`crate::resolver`], [`crate::extractor`], and
//! [`crate::collector`].

pub mod error;

pub use error::{ErrorContext, PdmError, user_friendly_error};
