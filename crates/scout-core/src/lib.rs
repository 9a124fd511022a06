#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for catalog operations.
pub const TRACING_TARGET_CATALOG: &str = "scout_core::catalog";

/// Tracing target for workspace store operations.
pub const TRACING_TARGET_STORE: &str = "scout_core::store";

mod catalog;
mod error;

pub mod model;
pub mod query;
pub mod store;

pub use crate::catalog::CompanyCatalog;
pub use crate::error::{BoxedError, Error, ErrorKind, Result};
