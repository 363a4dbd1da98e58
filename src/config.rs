//! Configuration for transcript analysis.
//!
//! [`AnalyzerConfig`] carries every tunable of the parse → enrich pipeline.
//! It has no CLI framework dependency and round-trips through serde, so a
//! front end can keep it in a JSON file.
//!
//! # Example
//!
//! ```rust
//! use whatstat::config::AnalyzerConfig;
//! use whatstat::pipeline::TranscriptParser;
//!
//! let config = AnalyzerConfig::new()
//!     .with_alias("+54 9 11 5555-0000", "Eric")
//!     .with_media_placeholder("<Médias omis>")
//!     .with_seed(7);
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholders WhatsApp writes instead of an attachment, per export locale.
pub const DEFAULT_MEDIA_PLACEHOLDERS: [&str; 2] = ["<Multimedia omitido>", "<Media omitted>"];

/// Settings for [`TranscriptParser`](crate::pipeline::TranscriptParser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Upper bound on the number of dates sampled for format inference (default: 50)
    pub sample_size: usize,

    /// A message starts a conversation when the gap to the previous one
    /// exceeds this many whole hours (default: 6)
    pub starting_gap_hours: i64,

    /// Bodies that mark a media message on exact match
    pub media_placeholders: Vec<String>,

    /// Raw author string → canonical display name, applied after splitting
    pub author_aliases: BTreeMap<String, String>,

    /// Append lines without a date header to the previous body instead of
    /// dropping them (default: false)
    pub join_orphan_lines: bool,

    /// Seed for the inference sample; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_size: 50,
            starting_gap_hours: 6,
            media_placeholders: DEFAULT_MEDIA_PLACEHOLDERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            author_aliases: BTreeMap::new(),
            join_orphan_lines: false,
            seed: None,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of dates sampled for format inference.
    #[must_use]
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size.max(1);
        self
    }

    /// Sets the conversation-start gap in hours.
    #[must_use]
    pub fn with_starting_gap_hours(mut self, hours: i64) -> Self {
        self.starting_gap_hours = hours;
        self
    }

    /// Adds a media placeholder string.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        if !self.media_placeholders.contains(&placeholder) {
            self.media_placeholders.push(placeholder);
        }
        self
    }

    /// Maps a raw author string to a canonical name.
    #[must_use]
    pub fn with_alias(mut self, raw: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.author_aliases.insert(raw.into(), canonical.into());
        self
    }

    /// Enables or disables joining continuation lines onto the previous message.
    #[must_use]
    pub fn with_join_orphan_lines(mut self, enabled: bool) -> Self {
        self.join_orphan_lines = enabled;
        self
    }

    /// Fixes the seed used to sample dates for format inference.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns `true` if `body` is exactly one of the media placeholders.
    pub fn is_media(&self, body: &str) -> bool {
        self.media_placeholders.iter().any(|p| p == body)
    }
}
