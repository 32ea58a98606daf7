//! Directory catalog and collection engine for codedump.
//!
//! This crate provides the two filesystem-facing pieces of codedump:
//!
//! - **Catalog** - lists the immediate children of one directory for the
//!   navigator, degrading to an empty listing on read failures
//! - **Collector** - walks a subtree depth-first with `jwalk`, prunes
//!   denylisted directories before descending, skips binary, hidden and
//!   previously generated files, and streams every remaining text file into
//!   one timestamped artifact
//!
//! # Example
//!
//! ```rust,no_run
//! use codedump_scan::Collector;
//!
//! let collector = Collector::new();
//! let report = collector.collect("/path/to/project".as_ref()).unwrap();
//!
//! println!("Wrote {} files to {}", report.files_written, report.artifact_name);
//! ```

mod artifact;
mod catalog;
mod collector;

pub use artifact::{HEADER_RULE, artifact_name, project_name, write_block, write_header};
pub use catalog::{list_entries, normalize, read_children, resolve};
pub use collector::{CollectReport, Collector};

// Re-export core types for convenience
pub use codedump_core::{CollectConfig, CollectError, Entry, EntryKind, PARENT_REF};
