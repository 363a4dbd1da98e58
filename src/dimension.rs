//! Pivot axes and metrics.
//!
//! - [`Dimension`] - a calendar attribute (or the author) usable as a pivot axis or hue
//! - [`DimensionValue`] - the sortable value a record carries for a dimension
//! - [`Metric`] - a quantity plotted on the y axis
//! - [`Aggregation`] - how a metric collapses a group into one number
//!
//! The string keys are a compatibility surface for front ends and are spelled
//! exactly as `year_month`, `wpm`, and so on.
//!
//! # Example
//!
//! ```rust
//! use whatstat::dimension::{Aggregation, Dimension, Metric};
//!
//! let x: Dimension = "dayofweek".parse()?;
//! let y: Metric = "wpm".parse()?;
//!
//! assert_eq!(x, Dimension::DayOfWeek);
//! assert_eq!(y.aggregation(), Aggregation::Mean);
//! # Ok::<(), whatstat::WhatstatError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WhatstatError;
use crate::locale::Locale;
use crate::message::MessageRecord;

/// A categorical or temporal attribute of a [`MessageRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Per-author grouping; not a calendar field, so not part of [`Dimension::ALL`]
    Author,
    Year,
    Month,
    Day,
    Hour,
    #[serde(rename = "dayofweek")]
    DayOfWeek,
    #[serde(rename = "weekofyear")]
    WeekOfYear,
    Quarter,
    YearMonth,
    YearDay,
    YearHour,
    #[serde(rename = "year_weekofyear")]
    YearWeekOfYear,
    #[serde(rename = "year_dayofweek")]
    YearDayOfWeek,
    YearQuarter,
}

impl Dimension {
    /// All calendar dimensions, in the order front ends list them.
    pub const ALL: [Dimension; 13] = [
        Dimension::Year,
        Dimension::Month,
        Dimension::Day,
        Dimension::Hour,
        Dimension::DayOfWeek,
        Dimension::WeekOfYear,
        Dimension::Quarter,
        Dimension::YearMonth,
        Dimension::YearDay,
        Dimension::YearHour,
        Dimension::YearWeekOfYear,
        Dimension::YearDayOfWeek,
        Dimension::YearQuarter,
    ];

    /// Every key accepted by [`FromStr`]: the calendar dimensions plus `author`.
    pub fn keys() -> impl Iterator<Item = Dimension> {
        Dimension::ALL
            .into_iter()
            .chain(std::iter::once(Dimension::Author))
    }

    /// Returns the wire key of this dimension.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Author => "author",
            Dimension::Year => "year",
            Dimension::Month => "month",
            Dimension::Day => "day",
            Dimension::Hour => "hour",
            Dimension::DayOfWeek => "dayofweek",
            Dimension::WeekOfYear => "weekofyear",
            Dimension::Quarter => "quarter",
            Dimension::YearMonth => "year_month",
            Dimension::YearDay => "year_day",
            Dimension::YearHour => "year_hour",
            Dimension::YearWeekOfYear => "year_weekofyear",
            Dimension::YearDayOfWeek => "year_dayofweek",
            Dimension::YearQuarter => "year_quarter",
        }
    }

    /// Human-readable axis title.
    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Dimension::Author => "Author",
                Dimension::Year => "Year",
                Dimension::Month => "Month",
                Dimension::Day => "Day of month",
                Dimension::Hour => "Hour of day",
                Dimension::DayOfWeek => "Day of week",
                Dimension::WeekOfYear => "Week of year",
                Dimension::Quarter => "Quarter",
                Dimension::YearMonth => "Year-month",
                Dimension::YearDay => "Year-day",
                Dimension::YearHour => "Year-hour",
                Dimension::YearWeekOfYear => "Year-week",
                Dimension::YearDayOfWeek => "Year-day of week",
                Dimension::YearQuarter => "Year-quarter",
            },
            Locale::Es => match self {
                Dimension::Author => "Autor/a",
                Dimension::Year => "Año",
                Dimension::Month => "Mes",
                Dimension::Day => "Dia del mes",
                Dimension::Hour => "Hora del dia",
                Dimension::DayOfWeek => "Dia de la semana",
                Dimension::WeekOfYear => "Semana del año",
                Dimension::Quarter => "Trimestre",
                Dimension::YearMonth => "Año-mes",
                Dimension::YearDay => "Año-dia",
                Dimension::YearHour => "Año-hora",
                Dimension::YearWeekOfYear => "Año-semana",
                Dimension::YearDayOfWeek => "Año-dia de la semana",
                Dimension::YearQuarter => "Año-trimestre",
            },
        }
    }

    /// Extracts this dimension's value from a record.
    pub fn value(self, record: &MessageRecord) -> DimensionValue {
        match self {
            Dimension::Author => DimensionValue::Key(record.author.clone()),
            Dimension::Year => DimensionValue::Int(i64::from(record.year)),
            Dimension::Month => DimensionValue::Int(i64::from(record.month)),
            Dimension::Day => DimensionValue::Int(i64::from(record.day)),
            Dimension::Hour => DimensionValue::Int(i64::from(record.hour)),
            Dimension::DayOfWeek => DimensionValue::Int(i64::from(record.dayofweek)),
            Dimension::WeekOfYear => DimensionValue::Int(i64::from(record.weekofyear)),
            Dimension::Quarter => DimensionValue::Int(i64::from(record.quarter)),
            Dimension::YearMonth => DimensionValue::Key(record.year_month.clone()),
            Dimension::YearDay => DimensionValue::Key(record.year_day.clone()),
            Dimension::YearHour => DimensionValue::Key(record.year_hour.clone()),
            Dimension::YearWeekOfYear => DimensionValue::Key(record.year_weekofyear.clone()),
            Dimension::YearDayOfWeek => DimensionValue::Key(record.year_dayofweek.clone()),
            Dimension::YearQuarter => DimensionValue::Key(record.year_quarter.clone()),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = WhatstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::keys()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| WhatstatError::invalid_dimension(s))
    }
}

/// The value a record holds for one dimension.
///
/// Plain calendar fields are integers and sort numerically; composite
/// `YYYY-<unit>` keys and author names sort as strings. A single axis never
/// mixes the two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionValue {
    Int(i64),
    Key(String),
}

impl fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionValue::Int(v) => write!(f, "{v}"),
            DimensionValue::Key(k) => f.write_str(k),
        }
    }
}

/// How a group of metric values collapses into one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Count,
    Sum,
    Mean,
}

impl Aggregation {
    /// Applies the aggregation to the values of one non-empty group.
    ///
    /// An empty group yields 0 for every operator.
    pub fn apply(self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        match self {
            Aggregation::Count => values.len() as f64,
            Aggregation::Sum => values.iter().sum(),
            Aggregation::Mean => values.iter().sum::<f64>() / values.len() as f64,
        }
    }
}

/// A quantity plotted on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Number of messages
    Msg,
    /// Total words
    Words,
    /// Mean words per message
    Wpm,
    /// Number of conversation-starting messages
    Starting,
    /// Number of media placeholder messages
    Media,
}

/// Wire key and aggregation operator for each metric.
const METRIC_TABLE: [(Metric, &str, Aggregation); 5] = [
    (Metric::Msg, "msg", Aggregation::Count),
    (Metric::Words, "words", Aggregation::Sum),
    (Metric::Wpm, "wpm", Aggregation::Mean),
    (Metric::Starting, "starting", Aggregation::Sum),
    (Metric::Media, "media", Aggregation::Sum),
];

impl Metric {
    /// All metrics, in the order front ends list them.
    pub const ALL: [Metric; 5] = [
        Metric::Msg,
        Metric::Words,
        Metric::Wpm,
        Metric::Starting,
        Metric::Media,
    ];

    fn entry(self) -> &'static (Metric, &'static str, Aggregation) {
        // rows follow declaration order
        &METRIC_TABLE[self as usize]
    }

    /// Returns the wire key of this metric.
    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// Returns the aggregation operator applied to this metric's column.
    pub fn aggregation(self) -> Aggregation {
        self.entry().2
    }

    /// Returns the per-record value fed into the aggregation.
    ///
    /// `wpm` reads the `words` column; `msg` is counted, so its value is
    /// irrelevant beyond being present.
    pub fn value(self, record: &MessageRecord) -> f64 {
        match self {
            Metric::Msg => 1.0,
            Metric::Words | Metric::Wpm => f64::from(record.words),
            Metric::Starting => f64::from(u8::from(record.starting)),
            Metric::Media => f64::from(u8::from(record.media)),
        }
    }

    /// Human-readable axis title.
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Metric::Msg) => "Messages",
            (Locale::En, Metric::Words) => "Words",
            (Locale::En, Metric::Wpm) => "Words per message",
            (Locale::En, Metric::Starting) => "Conversations started",
            (Locale::En, Metric::Media) => "Media messages",
            (Locale::Es, Metric::Msg) => "Mensajes",
            (Locale::Es, Metric::Words) => "Palabras",
            (Locale::Es, Metric::Wpm) => "Palabras por mensaje",
            (Locale::Es, Metric::Starting) => "Conversaciones iniciadas",
            (Locale::Es, Metric::Media) => "Mensajes multimedia",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = WhatstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        METRIC_TABLE
            .iter()
            .find(|(_, key, _)| *key == s)
            .map(|(m, _, _)| *m)
            .ok_or_else(|| WhatstatError::unsupported_metric(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_keys_roundtrip() {
        for d in Dimension::ALL {
            assert_eq!(d.as_str().parse::<Dimension>().unwrap(), d);
        }
    }

    #[test]
    fn test_dimension_keys_verbatim() {
        let keys: Vec<&str> = Dimension::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(
            keys,
            [
                "year",
                "month",
                "day",
                "hour",
                "dayofweek",
                "weekofyear",
                "quarter",
                "year_month",
                "year_day",
                "year_hour",
                "year_weekofyear",
                "year_dayofweek",
                "year_quarter"
            ]
        );
    }

    #[test]
    fn test_author_dimension() {
        assert_eq!("author".parse::<Dimension>().unwrap(), Dimension::Author);
        assert!(!Dimension::ALL.contains(&Dimension::Author));
        assert_eq!(Dimension::keys().count(), 14);
    }

    #[test]
    fn test_unknown_dimension() {
        let err = "DayOfWeek".parse::<Dimension>().unwrap_err();
        assert!(matches!(err, WhatstatError::InvalidDimension { .. }));
    }

    #[test]
    fn test_metric_table() {
        assert_eq!(Metric::Msg.aggregation(), Aggregation::Count);
        assert_eq!(Metric::Words.aggregation(), Aggregation::Sum);
        assert_eq!(Metric::Wpm.aggregation(), Aggregation::Mean);
        assert_eq!(Metric::Starting.aggregation(), Aggregation::Sum);
        assert_eq!(Metric::Media.aggregation(), Aggregation::Sum);
        for m in Metric::ALL {
            assert_eq!(m.as_str().parse::<Metric>().unwrap(), m);
        }
    }

    #[test]
    fn test_unknown_metric() {
        let err = "mean".parse::<Metric>().unwrap_err();
        assert!(matches!(err, WhatstatError::UnsupportedMetric { .. }));
    }

    #[test]
    fn test_aggregation_apply() {
        let values = [2.0, 4.0, 3.0];
        assert_eq!(Aggregation::Count.apply(&values), 3.0);
        assert_eq!(Aggregation::Sum.apply(&values), 9.0);
        assert_eq!(Aggregation::Mean.apply(&values), 3.0);
        assert_eq!(Aggregation::Mean.apply(&[]), 0.0);
    }

    #[test]
    fn test_value_ordering() {
        let mut values = vec![
            DimensionValue::Int(10),
            DimensionValue::Int(2),
            DimensionValue::Int(1),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                DimensionValue::Int(1),
                DimensionValue::Int(2),
                DimensionValue::Int(10)
            ]
        );

        let mut keys = vec![
            DimensionValue::Key("2024-01".into()),
            DimensionValue::Key("2023-12".into()),
        ];
        keys.sort();
        assert_eq!(keys[0].to_string(), "2023-12");
    }
}
