//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::Collection;
use crate::core::pivot::PivotTable;
use crate::error::Result;
use crate::message::MessageRecord;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the record table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: [`Collection::COLUMNS`], in that order
/// - `date` as `YYYY-MM-DD HH:MM:SS`; `media` and `starting` as `0`/`1`
/// - Encoding: UTF-8
pub fn write_csv(collection: &Collection, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(collection, file)
}

/// Renders the record table as a CSV string.
pub fn to_csv(collection: &Collection) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(collection, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes a pivot table to CSV.
///
/// The first header cell is the metric key, followed by one cell per column
/// label. Each row starts with its label.
pub fn write_pivot_csv(table: &PivotTable, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_pivot(table, file)
}

/// Renders a pivot table as a CSV string.
pub fn pivot_to_csv(table: &PivotTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_pivot(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(collection: &Collection, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(Collection::COLUMNS)?;
    for record in collection {
        writer.write_record(build_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn write_pivot<W: Write>(table: &PivotTable, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push(table.y.as_str().to_string());
    header.extend(table.columns.iter().map(|c| c.label.clone()));
    writer.write_record(&header)?;

    for (row, values) in table.rows.iter().zip(&table.values) {
        let mut record = Vec::with_capacity(values.len() + 1);
        record.push(row.label.clone());
        record.extend(values.iter().map(f64::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV record for a single message, in [`Collection::COLUMNS`] order.
fn build_record(record: &MessageRecord) -> [String; 19] {
    [
        record.date.format(DATE_FORMAT).to_string(),
        record.author.clone(),
        record.body.clone(),
        record.year.to_string(),
        record.month.to_string(),
        record.day.to_string(),
        record.hour.to_string(),
        record.weekofyear.to_string(),
        record.quarter.to_string(),
        record.dayofweek.to_string(),
        record.year_month.clone(),
        record.year_day.clone(),
        record.year_hour.clone(),
        record.year_weekofyear.clone(),
        record.year_dayofweek.clone(),
        record.year_quarter.clone(),
        record.words.to_string(),
        u8::from(record.media).to_string(),
        u8::from(record.starting).to_string(),
    ]
}
