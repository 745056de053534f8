//! Whitespace-delimited data table parsing.
//!
//! Chart data files are plain UTF-8 text: a header line naming each column,
//! then one line per sample. Fields are separated by one-or-more whitespace
//! characters. Parsing is a pure function of the file text; the same input
//! always yields the same table.

use thiserror::Error;

/// The distinguished horizontal-axis column of a data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKey {
    /// Training-curve files. Matched case-insensitively so `epoch`, `Epoch`
    /// and `EPOCH` all resolve.
    Epoch,
    /// Histogram files. Matched verbatim, like every other column.
    Hue,
}

impl AxisKey {
    /// Check whether a header column is this axis.
    pub fn matches(&self, column: &str) -> bool {
        match self {
            AxisKey::Epoch => column.eq_ignore_ascii_case("epoch"),
            AxisKey::Hue => column == "hue",
        }
    }

    /// Axis label shown on the chart.
    pub fn label(&self) -> &'static str {
        match self {
            AxisKey::Epoch => "Epoch",
            AxisKey::Hue => "Hue",
        }
    }
}

/// Errors produced while parsing a data file.
#[derive(Debug, Error)]
pub enum TableError {
    /// The file contained no text at all (after trimming blank lines).
    #[error("data file is empty")]
    Empty,
}

/// A parsed data file: column names from the header row plus one row of
/// values per data line, in file order.
///
/// Every row has exactly one value per column. Fields that failed to parse
/// as a number are stored as `NaN`; renderers skip those points rather than
/// invent values for them.
#[derive(Clone, Debug, Default)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

/// Parse the raw text of a data file.
///
/// Leading and trailing blank lines are ignored. The first remaining line is
/// the header; each further non-blank line becomes one record. Record order
/// is file order, which is semantically meaningful (the independent variable
/// progresses down the file).
pub fn parse_table(text: &str) -> Result<DataTable, TableError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TableError::Empty);
    }

    let mut lines = trimmed.lines();
    let Some(header) = lines.next() else {
        return Err(TableError::Empty);
    };

    let columns: Vec<String> = header.split_whitespace().map(str::to_string).collect();

    let mut rows = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        // One value per header column. A short line leaves the tail columns
        // NaN; extra fields past the header arity are ignored.
        let row: Vec<f64> = (0..columns.len())
            .map(|i| {
                fields
                    .get(i)
                    .and_then(|f| f.parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            })
            .collect();
        rows.push(row);
    }

    Ok(DataTable { columns, rows })
}

impl DataTable {
    /// Column names, in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the file had a header but no data lines.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a column by name. Non-axis lookups are verbatim; a series key
    /// that never appeared in the header resolves to `None`, which renders as
    /// an absent series rather than an error.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Resolve the distinguished axis column.
    pub fn axis_index(&self, axis: AxisKey) -> Option<usize> {
        self.columns.iter().position(|c| axis.matches(c))
    }

    /// Value at (row, column index).
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// A record view over row `index`, or `None` past the end.
    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        if index < self.rows.len() {
            Some(Record { table: self, row: index })
        } else {
            None
        }
    }

    /// All axis values in record order, or `None` when the axis column is
    /// missing from the header.
    pub fn axis_values(&self, axis: AxisKey) -> Option<Vec<f64>> {
        let idx = self.axis_index(axis)?;
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }

    /// Find the record whose axis value is closest to `target`.
    ///
    /// Assumes axis values increase down the file, which holds for every
    /// bundled data set (epochs and hue buckets are monotonic).
    pub fn nearest_record(&self, axis: AxisKey, target: f64) -> Option<usize> {
        let idx = self.axis_index(axis)?;
        if self.rows.is_empty() {
            return None;
        }

        let mut low = 0;
        let mut high = self.rows.len() - 1;
        while low < high {
            let mid = (low + high) / 2;
            if self.rows[mid][idx] < target {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        if low > 0 && (self.rows[low][idx] - target).abs() > (self.rows[low - 1][idx] - target).abs()
        {
            Some(low - 1)
        } else {
            Some(low)
        }
    }

    /// Plot points for one series, split into contiguous segments at NaN
    /// values so gaps stay gaps instead of being bridged by a line.
    ///
    /// Returns an empty vec when either the axis or the series key is absent.
    pub fn series_segments(&self, axis: AxisKey, key: &str) -> Vec<Vec<[f64; 2]>> {
        let Some(axis_idx) = self.axis_index(axis) else {
            return Vec::new();
        };
        let Some(series_idx) = self.column_index(key) else {
            return Vec::new();
        };

        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();
        for row in &self.rows {
            let x = row[axis_idx];
            let y = row[series_idx];
            if x.is_nan() || y.is_nan() {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            } else {
                current.push([x, y]);
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// Borrowed view of one record, keyed by column name.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    table: &'a DataTable,
    row: usize,
}

impl Record<'_> {
    /// Value for a column, `None` when the key is not in the header.
    /// A present-but-unparseable field is `Some(NaN)`.
    pub fn get(&self, key: &str) -> Option<f64> {
        let idx = self.table.column_index(key)?;
        self.table.value(self.row, idx)
    }

    /// Value of the distinguished axis column.
    pub fn axis(&self, axis: AxisKey) -> Option<f64> {
        let idx = self.table.axis_index(axis)?;
        self.table.value(self.row, idx)
    }
}
