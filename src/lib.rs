//! # whatstat
//!
//! Activity statistics for WhatsApp chat exports.
//!
//! ## Overview
//!
//! whatstat reads the plain-text transcript WhatsApp produces with
//! "Export chat", turns every message into a record enriched with calendar
//! fields, word counts, media and conversation-start flags, and aggregates
//! those records into pivot tables ready for charting:
//!
//! - which hours of the day the group is busiest
//! - how many words per message each weekday sees
//! - how conversations are spread over the months of each year
//!
//! Export dates follow the phone's locale, so the date layout of each file is
//! inferred from a sample of its own dates.
//!
//! ## Quick Start
//!
//! ```rust
//! use whatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "\
//! 1/2/23, 10:30 - Alice: hello, world
//! 1/2/23, 10:31 - Bob: hi
//! 3/2/23, 22:05 - Alice: <Media omitted>";
//!
//!     let collection = TranscriptParser::new().parse_str(transcript)?;
//!
//!     let request = PivotRequest::parse("dayofweek", "msg", None)?;
//!     let table = localize(&request.run(collection.records()), Locale::En);
//!
//!     assert_eq!(table.column_labels(), vec!["Wednesday", "Friday"]);
//!     assert_eq!(table.values, vec![vec![2.0, 1.0]]);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`pipeline`] - [`TranscriptParser`](pipeline::TranscriptParser), the file → records entry point
//! - [`parsing`] - sanitizing, segmenting, author splitting, date format inference
//! - [`core`] - record [`Collection`](core::Collection), enrichment, pivots, labels, writers
//! - [`dimension`] - [`Dimension`](dimension::Dimension), [`Metric`](dimension::Metric) and their keys
//! - [`message`] - [`RawMessage`](message::RawMessage) and [`MessageRecord`](message::MessageRecord)
//! - [`config`] - [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`locale`] - label languages
//! - [`format`] - output format selection
//! - [`error`] - [`WhatstatError`] and [`Result`]
//! - `cli` - command-line arguments (requires the `cli` feature)
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod dimension;
pub mod error;
pub mod format;
pub mod locale;
pub mod message;
pub mod parsing;
pub mod pipeline;

// Re-export the main types at the crate root for convenience
pub use error::{Result, WhatstatError};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use whatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;
    pub use crate::error::{Result, WhatstatError};

    pub use crate::config::AnalyzerConfig;
    pub use crate::dimension::{Aggregation, Dimension, DimensionValue, Metric};
    pub use crate::locale::Locale;
    pub use crate::pipeline::TranscriptParser;

    pub use crate::core::labels::localize;
    pub use crate::core::models::Collection;
    pub use crate::core::pivot::{PivotRequest, PivotTable, aggregate};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{pivot_to_csv, to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{pivot_to_json, to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;
}
