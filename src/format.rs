//! Output format selection.
//!
//! [`OutputFormat`] picks a writer for the record table or a pivot table
//! without the caller touching the feature-gated writer modules directly.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> whatstat::Result<()> {
//! use whatstat::format::{OutputFormat, to_format_string};
//! use whatstat::pipeline::TranscriptParser;
//!
//! let collection = TranscriptParser::new().parse_str("01/02/23, 10:30 - Alice: hello")?;
//! let csv = to_format_string(&collection, OutputFormat::Csv)?;
//! assert!(csv.starts_with("date;author;body"));
//!
//! let format = OutputFormat::from_path("records.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::models::Collection;
use crate::core::pivot::PivotTable;
use crate::error::WhatstatError;

/// Output format for records and pivot tables.
///
/// - [`Csv`](OutputFormat::Csv) - semicolon delimited, opens in spreadsheets
/// - [`Json`](OutputFormat::Json) - pretty-printed, good for chart front ends
/// - [`Jsonl`](OutputFormat::Jsonl) - one object per line
///
/// ```rust
/// use whatstat::format::OutputFormat;
///
/// let format: OutputFormat = "ndjson".parse()?;
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// # Ok::<(), whatstat::WhatstatError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records, or the pivot table as one object
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

/// Accepted names and extensions, lowercase.
const NAMES: [(&str, OutputFormat); 4] = [
    ("csv", OutputFormat::Csv),
    ("json", OutputFormat::Json),
    ("jsonl", OutputFormat::Jsonl),
    ("ndjson", OutputFormat::Jsonl),
];

impl OutputFormat {
    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        NAMES.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
    }

    fn expected() -> String {
        NAMES.iter().map(|(n, _)| *n).collect::<Vec<_>>().join(", ")
    }

    /// Picks the format from the extension of `path`, case-insensitively.
    ///
    /// Used for `--records`, where the file name is the only hint.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WhatstatError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::lookup(ext).ok_or_else(|| {
            WhatstatError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: {}", Self::expected()),
            )
        })
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    fn unavailable(self) -> WhatstatError {
        WhatstatError::invalid_format(
            "output",
            format!("{self} output needs the '{}' feature", self.required_feature()),
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Json => "JSON",
            OutputFormat::Jsonl => "JSONL",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = WhatstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| {
            WhatstatError::invalid_format(
                "output",
                format!("Unknown format: '{s}'. Expected one of: {}", Self::expected()),
            )
        })
    }
}

/// Writes the record table to a file in the specified format.
///
/// # Example
///
/// ```rust,no_run
/// # #[cfg(all(feature = "csv-output", feature = "json-output"))]
/// # fn example() -> whatstat::Result<()> {
/// use whatstat::format::{OutputFormat, write_to_format};
/// use whatstat::pipeline::TranscriptParser;
///
/// let collection = TranscriptParser::new().parse("chat.txt")?;
/// write_to_format(&collection, "records.csv", OutputFormat::Csv)?;
/// write_to_format(&collection, "records.jsonl", OutputFormat::Jsonl)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    collection: &Collection,
    path: &str,
    format: OutputFormat,
) -> Result<(), WhatstatError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(collection, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(collection, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(collection, path),
        #[allow(unreachable_patterns)]
        _ => Err(format.unavailable()),
    }
}

/// Renders the record table as a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    collection: &Collection,
    format: OutputFormat,
) -> Result<String, WhatstatError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(collection),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(collection),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(collection),
        #[allow(unreachable_patterns)]
        _ => Err(format.unavailable()),
    }
}

/// Renders a pivot table as a string in the specified format.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "csv-output")]
/// # fn example() -> whatstat::Result<()> {
/// use whatstat::core::pivot::aggregate;
/// use whatstat::dimension::{Dimension, Metric};
/// use whatstat::format::{OutputFormat, pivot_to_format_string};
/// use whatstat::pipeline::TranscriptParser;
///
/// let collection = TranscriptParser::new().parse_str("01/02/23, 10:30 - Alice: hello")?;
/// let table = aggregate(collection.records(), Dimension::Hour, Metric::Msg, None);
/// let csv = pivot_to_format_string(&table, OutputFormat::Csv)?;
/// assert!(csv.starts_with("msg;10"));
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn pivot_to_format_string(
    table: &PivotTable,
    format: OutputFormat,
) -> Result<String, WhatstatError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::pivot_to_csv(table),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::pivot_to_json(table),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::pivot_to_jsonl(table),
        #[allow(unreachable_patterns)]
        _ => Err(format.unavailable()),
    }
}
