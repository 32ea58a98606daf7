//! Core types and configuration for codedump.
//!
//! This crate provides the data structures shared by the catalog, the
//! collection engine and the terminal navigator: directory entries, the
//! collection policy and its error type.

mod config;
mod entry;
mod error;

pub use config::{
    CollectConfig, CollectConfigBuilder, DEFAULT_ARTIFACT_PREFIX, DEFAULT_ARTIFACT_SUFFIX,
    DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_EXTENSIONS,
};
pub use entry::{Entry, EntryKind, PARENT_REF};
pub use error::CollectError;
