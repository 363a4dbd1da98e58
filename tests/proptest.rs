//! Property-based tests for whatstat.
//!
//! These tests generate random records and transcripts to find edge cases.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use whatstat::prelude::*;

fn arb_author() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Carla Gómez".to_string(),
        "Иван".to_string(),
        "+54 9 11 5555-0000".to_string(),
    ])
}

fn arb_body() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "hello, world".to_string(),
        "note: bring snacks".to_string(),
        "a - b - c".to_string(),
        "<Media omitted>".to_string(),
        "Привет мир".to_string(),
        "🎉🔥 emoji".to_string(),
        "Special;chars\"here".to_string(),
    ])
}

fn arb_date() -> impl Strategy<Value = NaiveDateTime> {
    (2019i32..2026, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, m, d, h, min)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    })
}

/// Generate a random enriched record
fn arb_record() -> impl Strategy<Value = MessageRecord> {
    (arb_date(), arb_author(), arb_body(), any::<bool>(), any::<bool>()).prop_map(
        |(date, author, body, media, starting)| {
            MessageRecord::from_parts(date, author, body, media, starting)
        },
    )
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<MessageRecord>> {
    prop::collection::vec(arb_record(), 0..max_len)
}

fn arb_dimension() -> impl Strategy<Value = Dimension> {
    prop::sample::select(Dimension::keys().collect::<Vec<_>>())
}

fn arb_metric() -> impl Strategy<Value = Metric> {
    prop::sample::select(Metric::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // RECORD PROPERTIES
    // ============================================

    /// Every record has at least one word
    #[test]
    fn words_at_least_one(record in arb_record()) {
        prop_assert!(record.words >= 1);
    }

    /// Composite keys start with the calendar year (ISO year for weeks)
    #[test]
    fn composite_keys_carry_year(record in arb_record()) {
        let year = format!("{:04}-", record.year);
        prop_assert!(record.year_month.starts_with(&year));
        prop_assert!(record.year_day.starts_with(&year));
        prop_assert!(record.year_hour.starts_with(&year));
        prop_assert!(record.year_quarter.starts_with(&year));
        prop_assert!(record.dayofweek <= 6);
        prop_assert!((1..=4).contains(&record.quarter));
    }

    // ============================================
    // PIVOT PROPERTIES
    // ============================================

    /// Message counts add up to the number of records on any axis
    #[test]
    fn msg_total_equals_len(records in arb_records(40), x in arb_dimension()) {
        let table = aggregate(&records, x, Metric::Msg, None);
        prop_assert_eq!(table.total(), records.len() as f64);
    }

    /// Hue splits keep the message total
    #[test]
    fn hue_keeps_msg_total(
        records in arb_records(40),
        x in arb_dimension(),
        hue in arb_dimension(),
    ) {
        let table = aggregate(&records, x, Metric::Msg, Some(hue));
        prop_assert_eq!(table.total(), records.len() as f64);
    }

    /// Every row has one value per column
    #[test]
    fn table_is_dense(
        records in arb_records(40),
        x in arb_dimension(),
        y in arb_metric(),
        hue in prop::option::of(arb_dimension()),
    ) {
        let table = aggregate(&records, x, y, hue);
        prop_assert_eq!(table.values.len(), table.rows.len());
        for row in &table.values {
            prop_assert_eq!(row.len(), table.columns.len());
        }
        prop_assert!(table.values.iter().flatten().all(|v| *v >= 0.0));
    }

    /// Same records, same table
    #[test]
    fn aggregate_is_deterministic(
        records in arb_records(30),
        x in arb_dimension(),
        y in arb_metric(),
    ) {
        let a = aggregate(&records, x, y, Some(Dimension::Author));
        let b = aggregate(&records, x, y, Some(Dimension::Author));
        prop_assert_eq!(a, b);
    }

    /// Localizing changes labels only
    #[test]
    fn localize_preserves_values(
        records in arb_records(30),
        x in arb_dimension(),
        y in arb_metric(),
    ) {
        let table = aggregate(&records, x, y, Some(Dimension::Year));
        let localized = localize(&table, Locale::Es);
        prop_assert_eq!(&localized.values, &table.values);
        prop_assert_eq!(localized.columns.len(), table.columns.len());
        let keys: Vec<_> = table.columns.iter().map(|c| c.key.clone()).collect();
        let localized_keys: Vec<_> = localized.columns.iter().map(|c| c.key.clone()).collect();
        prop_assert_eq!(keys, localized_keys);
    }

    // ============================================
    // TRANSCRIPT PROPERTIES
    // ============================================

    /// Every attributable header line becomes one record, in file order
    #[test]
    fn transcript_roundtrip(
        messages in prop::collection::vec((arb_date(), arb_author(), arb_body()), 1..30),
        seed in any::<u64>(),
    ) {
        let transcript: String = messages
            .iter()
            .map(|(date, author, body)| {
                format!("{}, {} - {author}: {body}\n", date.format("%-d/%-m/%Y"), date.format("%H:%M"))
            })
            .collect();

        let collection = TranscriptParser::with_config(AnalyzerConfig::new().with_seed(seed))
            .parse_str(&transcript)
            .unwrap();

        prop_assert_eq!(collection.len(), messages.len());
        for (record, (date, author, body)) in collection.iter().zip(&messages) {
            prop_assert_eq!(&record.date, date);
            prop_assert_eq!(&record.author, author);
            prop_assert_eq!(&record.body, body);
        }
        prop_assert!(!collection.records()[0].starting);
    }

    /// Parsing never panics on arbitrary text
    #[test]
    fn parse_never_panics(text in "\\PC{0,200}") {
        let _ = TranscriptParser::new().parse_str(&text);
    }
}
