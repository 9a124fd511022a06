#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for enrichment operations.
pub const TRACING_TARGET_ENRICH: &str = "scout_rig::enrich";

/// Tracing target for reader-proxy fetches.
pub const TRACING_TARGET_READER: &str = "scout_rig::reader";

mod agent;
mod config;
mod error;
mod reader;
mod response;

pub use crate::agent::{EnrichmentAgent, Enricher};
pub use crate::config::EnrichmentConfig;
pub use crate::error::{Error, Result};
pub use crate::reader::{PageReader, ReaderClient, ScrapedPage};
pub use crate::response::parse_enrichment;
