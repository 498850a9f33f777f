//! Wxstate CLI - Command line tools for airport flight-category classification.
//!
//! This crate provides the CLI binaries:
//! - classify_obs: classify a single observation given as flags
//! - classify_batch: classify a stream of observation records
//!
//! Observation-record parsing lives here; the decision rule itself is in
//! `wxstate-core`.

pub mod record;

pub use record::{parse_record, RecordError};
