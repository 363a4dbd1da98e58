//! Unified error types for whatstat.
//!
//! Every fallible operation in the crate returns [`WhatstatError`]. Failures
//! are local to one transcript or one pivot request: an error never leaves a
//! partially built [`Collection`](crate::core::Collection) behind.
//!
//! # Error Taxonomy
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`MalformedTranscript`](WhatstatError::MalformedTranscript) | no header line, or no attributable message survives |
//! | [`DateInference`](WhatstatError::DateInference) | no date format fits, or one date fails under the inferred format |
//! | [`InvalidDimension`](WhatstatError::InvalidDimension) | pivot requested on an unknown dimension key |
//! | [`UnsupportedMetric`](WhatstatError::UnsupportedMetric) | pivot requested on an unknown metric key |

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for whatstat operations.
///
/// # Example
///
/// ```rust
/// use whatstat::error::Result;
/// use whatstat::dimension::Dimension;
///
/// fn pick_axis(name: &str) -> Result<Dimension> {
///     name.parse()
/// }
///
/// assert!(pick_axis("year_month").is_ok());
/// assert!(pick_axis("fortnight").is_err());
/// ```
pub type Result<T> = std::result::Result<T, WhatstatError>;

/// The error type for all whatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WhatstatError {
    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript could not be turned into any attributable message.
    ///
    /// This occurs when:
    /// - No line matches the `date time - ...` header pattern
    /// - Every header line lacks an `Author: body` part
    #[error("Could not parse file: {message}")]
    MalformedTranscript {
        /// Description of what's wrong
        message: String,
    },

    /// Date format inference failed, or the inferred format rejected a date.
    ///
    /// Date parsing is all-or-nothing per transcript, so a single failure
    /// aborts the whole file.
    #[error("Could not parse date '{input}'{}: {message}", format.as_ref().map(|f| format!(" with format '{f}'")).unwrap_or_default())]
    DateInference {
        /// The inferred format, if inference got that far
        format: Option<String>,
        /// The offending date string (or a sample of them)
        input: String,
        /// Description of what went wrong
        message: String,
    },

    /// A pivot was requested on an unrecognized dimension key.
    #[error("Invalid dimension '{input}'. Expected one of: {expected}")]
    InvalidDimension {
        /// The key that was provided
        input: String,
        /// Comma separated list of valid keys
        expected: String,
    },

    /// A pivot was requested on an unrecognized metric key.
    #[error("Unsupported metric '{input}'. Expected one of: {expected}")]
    UnsupportedMetric {
        /// The key that was provided
        input: String,
        /// Comma separated list of valid keys
        expected: String,
    },

    /// The requested output format is not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for WhatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        WhatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl WhatstatError {
    /// Creates a malformed transcript error.
    pub fn malformed(message: impl Into<String>) -> Self {
        WhatstatError::MalformedTranscript {
            message: message.into(),
        }
    }

    /// Creates a date inference error for a date that has no usable format yet.
    pub fn date_inference(input: impl Into<String>, message: impl Into<String>) -> Self {
        WhatstatError::DateInference {
            format: None,
            input: input.into(),
            message: message.into(),
        }
    }

    /// Creates a date inference error for a date the inferred format rejected.
    pub fn date_mismatch(
        format: impl Into<String>,
        input: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        WhatstatError::DateInference {
            format: Some(format.into()),
            input: input.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid dimension error.
    pub fn invalid_dimension(input: impl Into<String>) -> Self {
        WhatstatError::InvalidDimension {
            input: input.into(),
            expected: crate::dimension::Dimension::keys()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Creates an unsupported metric error.
    pub fn unsupported_metric(input: impl Into<String>) -> Self {
        WhatstatError::UnsupportedMetric {
            input: input.into(),
            expected: crate::dimension::Metric::ALL
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        WhatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, WhatstatError::Io(_))
    }

    /// Returns `true` if the transcript had no attributable messages.
    pub fn is_malformed(&self) -> bool {
        matches!(self, WhatstatError::MalformedTranscript { .. })
    }

    /// Returns `true` if this is a date inference or date parsing error.
    pub fn is_date_inference(&self) -> bool {
        matches!(self, WhatstatError::DateInference { .. })
    }

    /// Returns `true` if a pivot request named an unknown dimension or metric.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            WhatstatError::InvalidDimension { .. } | WhatstatError::UnsupportedMetric { .. }
        )
    }
}
