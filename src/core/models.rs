//! The enriched record set produced for one transcript.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::message::MessageRecord;
use crate::parsing::DateFormat;

/// An ordered, immutable set of [`MessageRecord`]s in file order, together
/// with the date format that was inferred for the file.
///
/// A new transcript always produces a new collection; there is no
/// incremental update. The type round-trips through serde so an external
/// cache can persist it between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    date_format: DateFormat,
    records: Vec<MessageRecord>,
}

impl Collection {
    /// Column names of the tabular form, in output order.
    pub const COLUMNS: [&'static str; 19] = [
        "date",
        "author",
        "body",
        "year",
        "month",
        "day",
        "hour",
        "weekofyear",
        "quarter",
        "dayofweek",
        "year_month",
        "year_day",
        "year_hour",
        "year_weekofyear",
        "year_dayofweek",
        "year_quarter",
        "words",
        "media",
        "starting",
    ];

    pub fn new(records: Vec<MessageRecord>, date_format: DateFormat) -> Self {
        Self {
            date_format,
            records,
        }
    }

    /// Records in file order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// The format every date in the file was parsed with.
    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Distinct authors, sorted.
    pub fn authors(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.author.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
