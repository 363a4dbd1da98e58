//! Pivot aggregation.
//!
//! Groups records by an x dimension (and optionally a hue dimension), applies
//! the metric's aggregation to each group and lays the result out as a dense
//! matrix: one column per distinct x value, one row per distinct hue value.
//! Missing combinations are zero.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::dimension::{Dimension, DimensionValue, Metric};
use crate::error::Result;
use crate::locale::Locale;
use crate::message::MessageRecord;

/// One row or column of a [`PivotTable`].
///
/// `key` is the raw sort key; `label` is what gets displayed and starts out
/// as the key's textual form. The synthetic row of a table without hue has
/// no key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisEntry {
    pub key: Option<DimensionValue>,
    pub label: String,
}

impl AxisEntry {
    fn from_key(key: DimensionValue) -> Self {
        let label = key.to_string();
        Self {
            key: Some(key),
            label,
        }
    }
}

/// A dense 2-D table of aggregated metric values.
///
/// `values[row][column]` lines up with `rows[row]` and `columns[column]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotTable {
    pub x: Dimension,
    pub y: Metric,
    pub hue: Option<Dimension>,
    pub columns: Vec<AxisEntry>,
    pub rows: Vec<AxisEntry>,
    pub values: Vec<Vec<f64>>,
}

impl PivotTable {
    /// Value at `row`, `column`, if both are in range.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row)?.get(column).copied()
    }

    /// Looks a cell up by its row label and column label.
    pub fn get_by_label(&self, row: &str, column: &str) -> Option<f64> {
        let r = self.rows.iter().position(|e| e.label == row)?;
        let c = self.columns.iter().position(|e| e.label == column)?;
        self.get(r, c)
    }

    pub fn row_labels(&self) -> Vec<&str> {
        self.rows.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn column_labels(&self) -> Vec<&str> {
        self.columns.iter().map(|e| e.label.as_str()).collect()
    }

    /// Sum of every cell.
    pub fn total(&self) -> f64 {
        self.values.iter().flatten().sum()
    }

    /// `true` when there is no column to show.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Groups `records` and aggregates `y` per (hue, x) cell.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use whatstat::core::pivot::aggregate;
/// use whatstat::dimension::{Dimension, Metric};
/// use whatstat::message::MessageRecord;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let records = vec![
///     MessageRecord::from_parts(day.and_hms_opt(9, 0, 0).unwrap(), "A", "hello there", false, false),
///     MessageRecord::from_parts(day.and_hms_opt(9, 30, 0).unwrap(), "A", "ok", false, false),
///     MessageRecord::from_parts(day.and_hms_opt(21, 0, 0).unwrap(), "B", "bye", false, true),
/// ];
///
/// let table = aggregate(&records, Dimension::Hour, Metric::Msg, Some(Dimension::Year));
/// assert_eq!(table.column_labels(), vec!["9", "21"]);
/// assert_eq!(table.row_labels(), vec!["2024"]);
/// assert_eq!(table.values, vec![vec![2.0, 1.0]]);
/// ```
pub fn aggregate(
    records: &[MessageRecord],
    x: Dimension,
    y: Metric,
    hue: Option<Dimension>,
) -> PivotTable {
    let mut groups: BTreeMap<(Option<DimensionValue>, DimensionValue), Vec<f64>> = BTreeMap::new();
    let mut column_keys: BTreeSet<DimensionValue> = BTreeSet::new();
    let mut row_keys: BTreeSet<Option<DimensionValue>> = BTreeSet::new();

    for record in records {
        let column = x.value(record);
        let row = hue.map(|h| h.value(record));
        column_keys.insert(column.clone());
        row_keys.insert(row.clone());
        groups.entry((row, column)).or_default().push(y.value(record));
    }

    // a table without hue still has its one row, even with no records
    if hue.is_none() {
        row_keys.insert(None);
    }

    let aggregation = y.aggregation();
    let values: Vec<Vec<f64>> = row_keys
        .iter()
        .map(|row| {
            column_keys
                .iter()
                .map(|column| {
                    groups
                        .get(&(row.clone(), column.clone()))
                        .map_or(0.0, |group| aggregation.apply(group))
                })
                .collect()
        })
        .collect();

    let rows = row_keys
        .into_iter()
        .map(|key| match key {
            Some(key) => AxisEntry::from_key(key),
            None => AxisEntry {
                key: None,
                label: x.label(Locale::default()).to_string(),
            },
        })
        .collect();
    let columns = column_keys.into_iter().map(AxisEntry::from_key).collect();

    tracing::debug!(
        x = %x,
        y = %y,
        hue = hue.map(Dimension::as_str),
        groups = groups.len(),
        "aggregated pivot"
    );

    PivotTable {
        x,
        y,
        hue,
        columns,
        rows,
        values,
    }
}

/// A parsed `(x, y, hue)` request.
///
/// Front ends send string keys; parsing them up front turns a typo into an
/// `InvalidDimension` or `UnsupportedMetric` error before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotRequest {
    pub x: Dimension,
    pub y: Metric,
    pub hue: Option<Dimension>,
}

impl PivotRequest {
    pub fn new(x: Dimension, y: Metric) -> Self {
        Self { x, y, hue: None }
    }

    #[must_use]
    pub fn with_hue(mut self, hue: Dimension) -> Self {
        self.hue = Some(hue);
        self
    }

    /// Parses the string keys of a request. An empty hue means no hue.
    pub fn parse(x: &str, y: &str, hue: Option<&str>) -> Result<Self> {
        let hue = match hue {
            Some(h) if !h.is_empty() => Some(h.parse()?),
            _ => None,
        };
        Ok(Self {
            x: x.parse()?,
            y: y.parse()?,
            hue,
        })
    }

    /// Runs the request against `records`.
    pub fn run(&self, records: &[MessageRecord]) -> PivotTable {
        aggregate(records, self.x, self.y, self.hue)
    }
}
