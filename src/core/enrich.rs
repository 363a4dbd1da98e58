//! Dimension enrichment.
//!
//! Turns attributable messages plus their parsed timestamps into
//! [`MessageRecord`]s. Calendar fields come from the timestamp, `words` and
//! `media` from the body, and `starting` from the gap to the previous
//! message in file order.

use chrono::NaiveDateTime;

use crate::config::AnalyzerConfig;
use crate::message::{MessageRecord, RawMessage};

/// Whole hours (truncated) since the previous timestamp; 0 for the first.
///
/// Out-of-order timestamps produce negative gaps and are kept as-is.
pub fn hours_since_previous(dates: &[NaiveDateTime]) -> Vec<i64> {
    let mut gaps = Vec::with_capacity(dates.len());
    let mut previous: Option<NaiveDateTime> = None;
    for &date in dates {
        gaps.push(previous.map_or(0, |prev| (date - prev).num_hours()));
        previous = Some(date);
    }
    gaps
}

/// Builds one enriched record per message.
///
/// `messages` and `dates` are parallel slices; extra entries in the longer
/// one are ignored.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDateTime;
/// use whatstat::config::AnalyzerConfig;
/// use whatstat::core::enrich::enrich;
/// use whatstat::message::RawMessage;
///
/// let messages = vec![
///     RawMessage::new("01/01/24 08:00", "Alice", "good morning"),
///     RawMessage::new("01/01/24 20:00", "Bob", "<Media omitted>"),
/// ];
/// let dates: Vec<NaiveDateTime> = ["2024-01-01 08:00", "2024-01-01 20:00"]
///     .iter()
///     .map(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap())
///     .collect();
///
/// let records = enrich(&messages, &dates, &AnalyzerConfig::default());
/// assert!(!records[0].starting);
/// assert!(records[1].starting);
/// assert!(records[1].media);
/// ```
pub fn enrich(
    messages: &[RawMessage],
    dates: &[NaiveDateTime],
    config: &AnalyzerConfig,
) -> Vec<MessageRecord> {
    let gaps = hours_since_previous(dates);

    let records: Vec<MessageRecord> = messages
        .iter()
        .zip(dates)
        .zip(gaps)
        .map(|((message, &date), gap)| {
            MessageRecord::from_parts(
                date,
                message.author.as_str(),
                message.body.as_str(),
                config.is_media(&message.body),
                gap > config.starting_gap_hours,
            )
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        starting = records.iter().filter(|r| r.starting).count(),
        media = records.iter().filter(|r| r.media).count(),
        "enriched records"
    );
    records
}
