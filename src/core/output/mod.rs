//! Output format writers.
//!
//! Both the record table and pivot tables can be rendered:
//! - [`write_csv`] / [`to_csv`] / [`pivot_to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] / [`pivot_to_json`] - pretty JSON - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] / [`pivot_to_jsonl`] - one JSON object per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> whatstat::Result<()> {
//! use whatstat::core::output::{to_csv, write_json, write_jsonl};
//! use whatstat::pipeline::TranscriptParser;
//!
//! let collection = TranscriptParser::new().parse("chat.txt")?;
//!
//! write_json(&collection, "records.json")?;
//! write_jsonl(&collection, "records.jsonl")?;
//! let csv_string = to_csv(&collection)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{pivot_to_csv, to_csv, write_csv, write_pivot_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{pivot_to_json, to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{pivot_to_jsonl, to_jsonl, write_jsonl};
