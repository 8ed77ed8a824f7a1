//! Core building blocks shared across the crate:
//! - The record model ([`NewsRecord`]) and the change vocabulary
//!   ([`ChangeType`]) spoken by the wallet core.
//! - The crate error type ([`NewsError`]).

/// The crate error type (`NewsError`).
pub mod error;
/// The record model and the upstream change vocabulary.
pub mod models;

pub use error::NewsError;
pub use models::{ChangeType, NewsRecord};
