//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::models::Collection;
use crate::core::pivot::PivotTable;
use crate::error::Result;

/// Writes the records as a pretty-printed JSON array.
///
/// Field names match [`Collection::COLUMNS`]; `date` is ISO 8601 without
/// offset and the flags are `0`/`1`.
pub fn write_json(collection: &Collection, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, collection.records())?;
    writer.flush()?;
    Ok(())
}

/// Renders the records as a pretty-printed JSON array.
pub fn to_json(collection: &Collection) -> Result<String> {
    Ok(serde_json::to_string_pretty(collection.records())?)
}

/// Renders a pivot table as JSON, keys and labels included.
pub fn pivot_to_json(table: &PivotTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pivot::aggregate;
    use crate::dimension::{Dimension, Metric};
    use crate::message::MessageRecord;
    use crate::parsing::{Clock, DateFormat, DateOrder, YearWidth};
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn collection() -> Collection {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        Collection::new(
            vec![MessageRecord::from_parts(date, "Alice", "Hello", false, false)],
            DateFormat::new(DateOrder::DayMonthYear, '/', YearWidth::Short, Clock::H24),
        )
    }

    #[test]
    fn test_write_json_basic() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_json(&collection(), path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let first = &parsed[0];
        assert_eq!(first["author"], "Alice");
        assert_eq!(first["date"], "2024-06-15T12:30:00");
        assert_eq!(first["year_month"], "2024-06");
        assert_eq!(first["media"], 0);
    }

    #[test]
    fn test_json_has_every_column() {
        let json = to_json(&collection()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = parsed[0].as_object().unwrap();
        for column in Collection::COLUMNS {
            assert!(object.contains_key(column), "missing {column}");
        }
    }

    #[test]
    fn test_pivot_json() {
        let table = aggregate(collection().records(), Dimension::Year, Metric::Msg, None);
        let json = pivot_to_json(&table).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["x"], "year");
        assert_eq!(parsed["y"], "msg");
        assert_eq!(parsed["columns"][0]["key"], 2024);
        assert_eq!(parsed["values"][0][0], 1.0);
    }
}
