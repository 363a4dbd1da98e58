//! Core processing for whatstat.
//!
//! This module contains:
//! - [`models`] - the enriched [`Collection`] of records
//! - [`enrich`] - calendar fields, word counts and conversation starts
//! - [`pivot`] - grouping records into a [`PivotTable`]
//! - [`labels`] - weekday and month names for pivot axes
//! - [`output`] - format writers (CSV, JSON, JSONL)

pub mod enrich;
pub mod labels;
pub mod models;
pub mod output;
pub mod pivot;

pub use enrich::{enrich, hours_since_previous};
pub use labels::{key_label, localize};
pub use models::Collection;
pub use pivot::{AxisEntry, PivotRequest, PivotTable, aggregate};

#[cfg(feature = "csv-output")]
pub use output::{pivot_to_csv, to_csv, write_csv, write_pivot_csv};
#[cfg(feature = "json-output")]
pub use output::{pivot_to_json, pivot_to_jsonl, to_json, to_jsonl, write_json, write_jsonl};
