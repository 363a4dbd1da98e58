//! Message types produced by the pipeline.
//!
//! - [`RawMessage`] - an attributable header line before its date is parsed
//! - [`MessageRecord`] - a fully enriched message with every derived dimension
//!
//! Records are built once by [`enrich`](crate::core::enrich) and never
//! mutated afterwards.
//!
//! # Serialization
//!
//! `media` and `starting` are booleans in Rust but serialize as `0`/`1`, the
//! representation charting front ends and columnar caches expect.
//!
//! ```
//! use chrono::NaiveDate;
//! use whatstat::message::MessageRecord;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 12, 25)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 0)
//!     .unwrap();
//! let record = MessageRecord::from_parts(date, "Alice", "merry christmas", false, true);
//!
//! let json = serde_json::to_string(&record)?;
//! assert!(json.contains(r#""starting":1"#));
//! assert!(json.contains(r#""media":0"#));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A header line split into its raw date, author and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Zero-padded date and time, still unparsed (e.g. `01/02/23 10:30`).
    pub date_string: String,
    /// Verbatim author name, after alias substitution.
    pub author: String,
    /// Message text with the author prefix stripped.
    pub body: String,
}

impl RawMessage {
    pub fn new(
        date_string: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            date_string: date_string.into(),
            author: author.into(),
            body: body.into(),
        }
    }
}

/// One attributable chat message plus all derived dimensions.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `date` | Parsed wall-clock timestamp |
/// | `year` .. `dayofweek` | Calendar fields; `dayofweek` is 0 for Monday |
/// | `year_*` | `YYYY-<unit>` composite keys, sortable as strings |
/// | `words` | Space-separated token count, always at least 1 |
/// | `media` | Body is exactly a media placeholder |
/// | `starting` | Gap to the previous message exceeds the threshold |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub date: NaiveDateTime,
    pub author: String,
    pub body: String,

    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub weekofyear: u32,
    pub quarter: u32,
    pub dayofweek: u32,

    pub year_month: String,
    pub year_day: String,
    pub year_hour: String,
    pub year_weekofyear: String,
    pub year_dayofweek: String,
    pub year_quarter: String,

    pub words: u32,
    #[serde(with = "flag")]
    pub media: bool,
    #[serde(with = "flag")]
    pub starting: bool,
}

impl MessageRecord {
    /// Builds a record and derives every calendar and content attribute.
    ///
    /// `media` and `starting` depend on configuration and on the previous
    /// record, so the caller decides them.
    pub fn from_parts(
        date: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
        media: bool,
        starting: bool,
    ) -> Self {
        let body = body.into();
        let year = date.year();
        let month = date.month();
        let day = date.day();
        let hour = date.hour();
        let iso = date.iso_week();
        let weekofyear = iso.week();
        let quarter = (month - 1) / 3 + 1;
        let dayofweek = date.weekday().num_days_from_monday();

        Self {
            date,
            author: author.into(),
            words: word_count(&body),
            body,
            year,
            month,
            day,
            hour,
            weekofyear,
            quarter,
            dayofweek,
            year_month: format!("{year:04}-{month:02}"),
            year_day: format!("{year:04}-{:03}", date.ordinal()),
            year_hour: format!("{year:04}-{hour:02}"),
            // ISO year keeps late-December week 1 after week 52 of the same year
            year_weekofyear: format!("{:04}-{weekofyear:02}", iso.year()),
            year_dayofweek: format!("{year:04}-{dayofweek:02}"),
            year_quarter: format!("{year:04}-{quarter:02}"),
            media,
            starting,
        }
    }
}

/// Counts interior spaces plus one.
///
/// Consecutive spaces each count, and an empty body is one word.
pub fn word_count(body: &str) -> u32 {
    let spaces = body.bytes().filter(|b| *b == b' ').count();
    u32::try_from(spaces).unwrap_or(u32::MAX - 1) + 1
}

/// Serializes a `bool` as `0`/`1` and accepts either form back.
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Int(u8),
        Bool(bool),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Flag::deserialize(deserializer)? {
            Flag::Int(v) => v != 0,
            Flag::Bool(b) => b,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("hello"), 1);
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count("hello, world"), 2);
        assert_eq!(word_count("a  b"), 3);
    }

    #[test]
    fn test_calendar_fields() {
        // 2023-12-25 is a Monday
        let r = MessageRecord::from_parts(at(2023, 12, 25, 8), "Alice", "hi there", false, false);
        assert_eq!(r.year, 2023);
        assert_eq!(r.month, 12);
        assert_eq!(r.day, 25);
        assert_eq!(r.hour, 8);
        assert_eq!(r.quarter, 4);
        assert_eq!(r.dayofweek, 0);
        assert_eq!(r.weekofyear, 52);
        assert_eq!(r.words, 2);
    }

    #[test]
    fn test_composite_keys() {
        let r = MessageRecord::from_parts(at(2024, 3, 5, 9), "Bob", "x", false, false);
        assert_eq!(r.year_month, "2024-03");
        assert_eq!(r.year_day, "2024-065");
        assert_eq!(r.year_hour, "2024-09");
        assert_eq!(r.year_weekofyear, "2024-10");
        // Tuesday
        assert_eq!(r.year_dayofweek, "2024-01");
        assert_eq!(r.year_quarter, "2024-01");
    }

    #[test]
    fn test_iso_week_crosses_year() {
        // 2024-12-30 belongs to ISO week 1 of 2025
        let r = MessageRecord::from_parts(at(2024, 12, 30, 12), "Bob", "x", false, false);
        assert_eq!(r.weekofyear, 1);
        assert_eq!(r.year_weekofyear, "2025-01");
    }

    #[test]
    fn test_flags_roundtrip_as_integers() {
        let r = MessageRecord::from_parts(at(2024, 1, 1, 0), "A", "<Media omitted>", true, false);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains(r#""media":1"#));
        let back: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
