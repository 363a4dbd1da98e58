//! JSON Lines (JSONL) output writer.
//!
//! One record per line, so downstream tools can stream large transcripts
//! without loading the whole array.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::core::models::Collection;
use crate::core::pivot::PivotTable;
use crate::error::Result;

/// Writes the records in JSONL format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"date":"2024-01-01T09:00:00","author":"Alice","body":"Hello",...}
/// {"date":"2024-01-01T09:01:00","author":"Bob","body":"Hi",...}
/// ```
pub fn write_jsonl(collection: &Collection, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(collection, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Renders the records in JSONL format.
pub fn to_jsonl(collection: &Collection) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(collection, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// One pivot row; `columns` and `values` are parallel and keep the table order.
#[derive(Serialize)]
struct PivotLine<'a> {
    row: &'a str,
    columns: Vec<&'a str>,
    values: &'a [f64],
}

/// Renders a pivot table as one JSON object per row.
///
/// ```jsonl
/// {"row":"Alice","columns":["9","10","21"],"values":[1.0,0.0,2.0]}
/// ```
pub fn pivot_to_jsonl(table: &PivotTable) -> Result<String> {
    let columns: Vec<&str> = table.columns.iter().map(|c| c.label.as_str()).collect();
    let mut out = String::new();
    for (row, values) in table.rows.iter().zip(&table.values) {
        let line = PivotLine {
            row: &row.label,
            columns: columns.clone(),
            values,
        };
        out.push_str(&serde_json::to_string(&line)?);
        out.push('\n');
    }
    Ok(out)
}

fn write_lines<W: Write>(collection: &Collection, writer: &mut W) -> Result<()> {
    for record in collection {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
