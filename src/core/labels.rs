//! Label mapping for pivot tables.
//!
//! Day-of-week and month axes are aggregated on their numeric keys and only
//! renamed afterwards, so sort order always follows the calendar and never
//! the alphabet of the display language.

use crate::core::pivot::{AxisEntry, PivotTable};
use crate::dimension::{Dimension, DimensionValue};
use crate::locale::Locale;

/// Display label for one key on a `dimension` axis, or `None` if the
/// dimension has no localized names.
///
/// Composite keys keep their year prefix: `2024-02` on a `year_month` axis
/// becomes `2024-February`.
pub fn key_label(dimension: Dimension, key: &DimensionValue, locale: Locale) -> Option<String> {
    match (dimension, key) {
        (Dimension::DayOfWeek, DimensionValue::Int(i)) => {
            locale.weekday_name(*i).map(str::to_string)
        }
        (Dimension::Month, DimensionValue::Int(m)) => locale.month_name(*m).map(str::to_string),
        (Dimension::YearDayOfWeek, DimensionValue::Key(k)) => {
            let (year, unit) = split_composite(k)?;
            locale.weekday_name(unit).map(|name| format!("{year}-{name}"))
        }
        (Dimension::YearMonth, DimensionValue::Key(k)) => {
            let (year, unit) = split_composite(k)?;
            locale.month_name(unit).map(|name| format!("{year}-{name}"))
        }
        _ => None,
    }
}

fn split_composite(key: &str) -> Option<(&str, i64)> {
    let (year, unit) = key.split_once('-')?;
    Some((year, unit.parse().ok()?))
}

fn relabel(entries: &mut [AxisEntry], dimension: Option<Dimension>, locale: Locale) {
    let Some(dimension) = dimension else {
        return;
    };
    for entry in entries {
        if let Some(label) = entry
            .key
            .as_ref()
            .and_then(|key| key_label(dimension, key, locale))
        {
            entry.label = label;
        }
    }
}

/// Returns a copy of `table` with human-readable labels in `locale`.
///
/// Keys, values and order are untouched. Columns are renamed according to
/// the x dimension, rows according to the hue; the single row of a table
/// without hue takes the x axis title.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use whatstat::core::labels::localize;
/// use whatstat::core::pivot::aggregate;
/// use whatstat::dimension::{Dimension, Metric};
/// use whatstat::locale::Locale;
/// use whatstat::message::MessageRecord;
///
/// // 2024-01-01 is a Monday, 2024-01-07 a Sunday
/// let records: Vec<MessageRecord> = [1, 7]
///     .iter()
///     .map(|&d| {
///         let date = NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(9, 0, 0).unwrap();
///         MessageRecord::from_parts(date, "A", "hi", false, false)
///     })
///     .collect();
///
/// let table = aggregate(&records, Dimension::DayOfWeek, Metric::Msg, None);
/// let es = localize(&table, Locale::Es);
/// assert_eq!(es.column_labels(), vec!["Lunes", "Domingo"]);
/// assert_eq!(es.row_labels(), vec!["Dia de la semana"]);
/// ```
pub fn localize(table: &PivotTable, locale: Locale) -> PivotTable {
    let mut localized = table.clone();
    relabel(&mut localized.columns, Some(table.x), locale);
    match table.hue {
        Some(hue) => relabel(&mut localized.rows, Some(hue), locale),
        None => {
            for row in localized.rows.iter_mut().filter(|r| r.key.is_none()) {
                row.label = table.x.label(locale).to_string();
            }
        }
    }
    localized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pivot::aggregate;
    use crate::dimension::Metric;
    use crate::message::MessageRecord;
    use chrono::NaiveDate;

    fn rec(y: i32, m: u32, d: u32) -> MessageRecord {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        MessageRecord::from_parts(date, "A", "hi", false, false)
    }

    #[test]
    fn test_weekday_order_survives_localization() {
        // Mon 1st .. Sun 7th, reversed input order
        let records: Vec<_> = (1..=7).rev().map(|d| rec(2024, 1, d)).collect();
        let table = aggregate(&records, Dimension::DayOfWeek, Metric::Msg, None);
        let en = localize(&table, Locale::En);
        assert_eq!(
            en.column_labels(),
            vec![
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
        assert_eq!(en.values, table.values);
    }

    #[test]
    fn test_month_names_sort_by_number() {
        let records = vec![rec(2024, 4, 1), rec(2024, 8, 1), rec(2024, 12, 1)];
        let table = aggregate(&records, Dimension::Month, Metric::Msg, None);
        let en = localize(&table, Locale::En);
        assert_eq!(en.column_labels(), vec!["April", "August", "December"]);
    }

    #[test]
    fn test_composite_keys_keep_year() {
        let records = vec![rec(2023, 12, 4), rec(2024, 2, 1)];
        let table = aggregate(&records, Dimension::YearMonth, Metric::Msg, None);
        let es = localize(&table, Locale::Es);
        assert_eq!(es.column_labels(), vec!["2023-Diciembre", "2024-Febrero"]);

        let table = aggregate(&records, Dimension::YearDayOfWeek, Metric::Msg, None);
        let en = localize(&table, Locale::En);
        assert_eq!(en.column_labels(), vec!["2023-Monday", "2024-Thursday"]);
    }

    #[test]
    fn test_hue_rows_localized() {
        let records = vec![rec(2024, 1, 1), rec(2024, 3, 1)];
        let table = aggregate(&records, Dimension::Year, Metric::Msg, Some(Dimension::Month));
        let es = localize(&table, Locale::Es);
        assert_eq!(es.row_labels(), vec!["Enero", "Marzo"]);
        assert_eq!(es.column_labels(), vec!["2024"]);
    }

    #[test]
    fn test_other_dimensions_pass_through() {
        assert_eq!(
            key_label(Dimension::Hour, &DimensionValue::Int(3), Locale::Es),
            None
        );
        assert_eq!(
            key_label(Dimension::DayOfWeek, &DimensionValue::Int(9), Locale::En),
            None
        );
    }
}
