//! Enhanced HTTP request extractors with improved error handling.
//!
//! Drop-in replacements for the standard axum extractors that reject with
//! the handler [`Error`] type, so malformed input turns into the same
//! structured error envelope the handlers produce themselves.
//!
//! - [`Json`] - JSON body extraction with detailed error messages
//! - [`ValidateJson`] - JSON extraction with automatic `validator` checks
//! - [`Path`] - path parameter extraction with typed error context
//! - [`Query`] - query parameter extraction with enhanced error messages
//!
//! [`Error`]: crate::handler::Error

pub mod reject;

pub use crate::extract::reject::{Json, Path, Query, ValidateJson};
