//! Transcript → [`Collection`] pipeline.
//!
//! Chains the parsing stages with enrichment:
//!
//! ```text
//! lines ─ sanitize ─ segment ─ split authors ─ infer format ─ parse dates ─ enrich
//! ```
//!
//! # Example
//!
//! ```rust
//! use whatstat::pipeline::TranscriptParser;
//!
//! let transcript = "\
//! 25/12/23, 09:00 - Alice: merry christmas
//! 25/12/23, 09:05 - Bob: <Media omitted>
//! 25/12/23, 21:30 - Alice: good night everyone";
//!
//! let collection = TranscriptParser::new().parse_str(transcript)?;
//! assert_eq!(collection.len(), 3);
//! assert_eq!(collection.date_format().pattern(), "%d/%m/%y %H:%M");
//! assert!(collection.records()[1].media);
//! assert!(collection.records()[2].starting);
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::config::AnalyzerConfig;
use crate::core::enrich::enrich;
use crate::core::models::Collection;
use crate::error::{Result, WhatstatError};
use crate::parsing::{infer_date_format, is_header, sanitize_line, segment_lines, split_authors};

/// Parses WhatsApp text exports into enriched record collections.
///
/// The parser is stateless between calls; every call reads one whole
/// transcript and returns a fresh [`Collection`].
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: AnalyzerConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Reads and parses a transcript file. The file must be UTF-8.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Collection> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| WhatstatError::Utf8 {
            context: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = content.len(), "read transcript");
        self.parse_str(&content)
    }

    /// Parses a transcript held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Collection> {
        self.parse_lines(content.lines())
    }

    /// Parses a transcript given as individual lines.
    ///
    /// # Errors
    ///
    /// - [`WhatstatError::MalformedTranscript`] if no line starts with a
    ///   date header, or no header line carries an author
    /// - [`WhatstatError::DateInference`] if no date layout fits, or one
    ///   date does not parse with the inferred layout
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Collection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| sanitize_line(line.as_ref()))
            .collect();

        if !lines.iter().any(|line| is_header(line)) {
            return Err(WhatstatError::malformed(
                "no line starts with a date and time; is this a WhatsApp export?",
            ));
        }

        let segments = segment_lines(&lines, self.config.join_orphan_lines);
        let messages = split_authors(&segments, &self.config);
        if messages.is_empty() {
            return Err(WhatstatError::malformed(
                "the transcript has no message with an author",
            ));
        }

        let date_strings: Vec<&str> = messages.iter().map(|m| m.date_string.as_str()).collect();
        let format = infer_date_format(&date_strings, self.config.sample_size, self.config.seed)?;
        let dates = format.parse_all(&date_strings)?;

        let records = enrich(&messages, &dates, &self.config);
        tracing::info!(
            lines = lines.len(),
            messages = records.len(),
            format = %format,
            "parsed transcript"
        );

        Ok(Collection::new(records, format))
    }
}
