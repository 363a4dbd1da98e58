//! Date format inference.
//!
//! WhatsApp writes dates in the phone's locale, so `01/02/23` may be the
//! first of February or the second of January. Instead of asking the caller,
//! a bounded random sample of the file's dates is scored against every
//! candidate layout and the best one is applied to the whole file.
//!
//! Parsing with the inferred format is all-or-nothing: one date that does not
//! fit fails the transcript.

use std::fmt;

use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WhatstatError};

/// Position of day, month and year in the date part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

/// Two-digit (`23`) or four-digit (`2023`) years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearWidth {
    Short,
    Long,
}

/// 24-hour or 12-hour clock, with or without seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clock {
    H24,
    H24Seconds,
    H12,
    H12Seconds,
}

/// A complete layout for a sanitized, zero-padded date string.
///
/// # Example
///
/// ```rust
/// use whatstat::parsing::{Clock, DateFormat, DateOrder, YearWidth};
///
/// let format = DateFormat::new(DateOrder::DayMonthYear, '/', YearWidth::Long, Clock::H24);
/// assert_eq!(format.pattern(), "%d/%m/%Y %H:%M");
/// assert!(format.parse("25/12/2023 08:00").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateFormat {
    pub order: DateOrder,
    pub separator: char,
    pub year: YearWidth,
    pub clock: Clock,
}

const ORDERS: [DateOrder; 3] = [
    DateOrder::DayMonthYear,
    DateOrder::MonthDayYear,
    DateOrder::YearMonthDay,
];

// short years first: %Y also accepts "23" and would place it in year 23
const YEARS: [YearWidth; 2] = [YearWidth::Short, YearWidth::Long];

const CLOCKS: [Clock; 4] = [Clock::H24, Clock::H24Seconds, Clock::H12, Clock::H12Seconds];

const SEPARATORS: [char; 2] = ['/', '-'];

impl DateFormat {
    pub fn new(order: DateOrder, separator: char, year: YearWidth, clock: Clock) -> Self {
        Self {
            order,
            separator,
            year,
            clock,
        }
    }

    /// All layouts in tie-break priority order.
    ///
    /// When the sample cannot tell day and month apart, day-first wins.
    pub fn candidates() -> Vec<DateFormat> {
        let mut candidates = Vec::with_capacity(ORDERS.len() * YEARS.len() * CLOCKS.len() * 2);
        for order in ORDERS {
            for year in YEARS {
                for clock in CLOCKS {
                    for separator in SEPARATORS {
                        candidates.push(DateFormat::new(order, separator, year, clock));
                    }
                }
            }
        }
        candidates
    }

    /// Returns the chrono format string.
    pub fn pattern(&self) -> String {
        let year = match self.year {
            YearWidth::Short => "%y",
            YearWidth::Long => "%Y",
        };
        let sep = self.separator;
        let date = match self.order {
            DateOrder::DayMonthYear => format!("%d{sep}%m{sep}{year}"),
            DateOrder::MonthDayYear => format!("%m{sep}%d{sep}{year}"),
            DateOrder::YearMonthDay => format!("{year}{sep}%m{sep}%d"),
        };
        let time = match self.clock {
            Clock::H24 => "%H:%M",
            Clock::H24Seconds => "%H:%M:%S",
            Clock::H12 => "%I:%M %p",
            Clock::H12Seconds => "%I:%M:%S %p",
        };
        format!("{date} {time}")
    }

    /// Parses one date string with this layout.
    pub fn parse(&self, input: &str) -> Result<NaiveDateTime> {
        let pattern = self.pattern();
        NaiveDateTime::parse_from_str(input, &pattern)
            .map_err(|e| WhatstatError::date_mismatch(pattern, input, e.to_string()))
    }

    /// Parses every date string, failing on the first one that does not fit.
    pub fn parse_all<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Vec<NaiveDateTime>> {
        let pattern = self.pattern();
        inputs
            .iter()
            .map(|input| {
                let input = input.as_ref();
                NaiveDateTime::parse_from_str(input, &pattern).map_err(|e| {
                    WhatstatError::date_mismatch(pattern.as_str(), input, e.to_string())
                })
            })
            .collect()
    }

    fn score<S: AsRef<str>>(&self, sample: &[S]) -> usize {
        let pattern = self.pattern();
        sample
            .iter()
            .filter(|s| NaiveDateTime::parse_from_str(s.as_ref(), &pattern).is_ok())
            .count()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern())
    }
}

/// Picks the layout that parses the most strings of `sample`.
///
/// Ties go to the earlier candidate in [`DateFormat::candidates`]. Fails if no
/// candidate parses a single string.
pub fn infer_from_sample<S: AsRef<str>>(sample: &[S]) -> Result<DateFormat> {
    let Some(first) = sample.first() else {
        return Err(WhatstatError::date_inference("", "no dates to infer a format from"));
    };

    let mut best: Option<(DateFormat, usize)> = None;
    for candidate in DateFormat::candidates() {
        let score = candidate.score(sample);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((candidate, score));
            if score == sample.len() {
                break;
            }
        }
    }

    match best {
        Some((format, score)) => {
            tracing::debug!(%format, score, sample = sample.len(), "inferred date format");
            Ok(format)
        }
        None => Err(WhatstatError::date_inference(
            first.as_ref(),
            "no known date layout matches the sampled dates",
        )),
    }
}

/// Draws up to `sample_size` dates without replacement and infers their format.
///
/// At least one date is always drawn. With a `seed` the same dates are drawn
/// on every call.
pub fn infer_date_format<S: AsRef<str>>(
    dates: &[S],
    sample_size: usize,
    seed: Option<u64>,
) -> Result<DateFormat> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sample: Vec<&str> = dates
        .choose_multiple(&mut rng, sample_size.max(1))
        .map(|s| s.as_ref())
        .collect();

    infer_from_sample(&sample)
}
