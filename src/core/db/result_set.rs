/// Result Cursor Module
///
/// A `ResultSet` buffers every row of one query and walks them with a
/// cursor that starts before the first row. Accessors are 1-based and follow
/// the driver-style vocabulary (`get_double`, `get_int64`, ...), converting
/// between SQLite storage classes where that is lossless or conventional.

use crate::core::{Result, SqlConnError};
use rusqlite::types::Value;
use rusqlite::Statement;

/// Buffered rows of the most recent query, with a forward cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    /// `None` before the first row, `Some(rows.len())` after the last
    position: Option<usize>,
}

impl ResultSet {
    /// Creates a cursor over already materialized rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        ResultSet {
            columns,
            rows,
            position: None,
        }
    }

    /// Runs `stmt` with `params` and buffers every row it yields.
    pub(crate) fn from_statement<P: rusqlite::Params>(
        stmt: &mut Statement<'_>,
        params: P,
    ) -> rusqlite::Result<Self> {
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = columns.len();

        let mut rows = Vec::new();
        let mut cursor = stmt.query(params)?;
        while let Some(row) = cursor.next()? {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(Value::from(row.get_ref(i)?));
            }
            rows.push(values);
        }

        Ok(ResultSet::new(columns, rows))
    }

    /// Number of rows in the result, independent of the cursor position.
    pub fn rows_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns the 1-based index of the column called `name` (ASCII case-insensitive).
    pub fn find_column(&self, name: &str) -> Option<u32> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .map(|i| i as u32 + 1)
    }

    /// Advances the cursor; returns whether it now sits on a row.
    pub fn next_row(&mut self) -> bool {
        let next = match self.position {
            None => 0,
            Some(p) if p < self.rows.len() => p + 1,
            Some(p) => p,
        };
        self.position = Some(next);
        next < self.rows.len()
    }

    /// Moves the cursor back before the first row.
    pub fn before_first(&mut self) {
        self.position = None;
    }

    /// 0-based index of the current row, if the cursor is on one.
    pub fn row_index(&self) -> Option<usize> {
        self.position.filter(|&p| p < self.rows.len())
    }

    /// Every buffered row, regardless of the cursor.
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Raw value of a column on the current row.
    pub fn value(&self, column: u32) -> Result<&Value> {
        let row = self
            .row_index()
            .map(|p| &self.rows[p])
            .ok_or(SqlConnError::NoCurrentRow)?;
        let count = row.len();
        if column == 0 || column as usize > count {
            return Err(SqlConnError::ColumnOutOfRange { column, count });
        }
        Ok(&row[column as usize - 1])
    }

    pub fn is_null(&self, column: u32) -> Result<bool> {
        Ok(matches!(self.value(column)?, Value::Null))
    }

    /// Reads a column as a double. `NULL` reads as `0.0`.
    pub fn get_double(&self, column: u32) -> Result<f64> {
        match self.value(column)? {
            Value::Null => Ok(0.0),
            Value::Integer(i) => Ok(*i as f64),
            Value::Real(f) => Ok(*f),
            Value::Text(t) => parse_text(column, "f64", t),
            Value::Blob(_) => Err(blob_error(column, "f64")),
        }
    }

    /// Reads a column as a signed 64-bit integer. Reals are truncated.
    pub fn get_int64(&self, column: u32) -> Result<i64> {
        match self.value(column)? {
            Value::Null => Ok(0),
            Value::Integer(i) => Ok(*i),
            Value::Real(f) => truncate_real(column, "i64", *f, I64_MIN, I64_END)
                .map(|f| f as i64),
            Value::Text(t) => parse_text(column, "i64", t),
            Value::Blob(_) => Err(blob_error(column, "i64")),
        }
    }

    /// Reads a column as an unsigned 64-bit integer. Negative values fail.
    pub fn get_uint64(&self, column: u32) -> Result<u64> {
        match self.value(column)? {
            Value::Null => Ok(0),
            Value::Integer(i) => u64::try_from(*i).map_err(|e| SqlConnError::Conversion {
                column,
                target: "u64",
                reason: format!("{i}: {e}"),
            }),
            Value::Real(f) => truncate_real(column, "u64", *f, 0.0, U64_END)
                .map(|f| f as u64),
            Value::Text(t) => parse_text(column, "u64", t),
            Value::Blob(_) => Err(blob_error(column, "u64")),
        }
    }

    /// Reads a column as text. `NULL` reads as the empty string.
    pub fn get_string(&self, column: u32) -> Result<String> {
        match self.value(column)? {
            Value::Null => Ok(String::new()),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Real(f) => Ok(f.to_string()),
            Value::Text(t) => Ok(t.clone()),
            Value::Blob(b) => String::from_utf8(b.clone()).map_err(|e| SqlConnError::Conversion {
                column,
                target: "String",
                reason: e.to_string(),
            }),
        }
    }
}

fn parse_text<T>(column: u32, target: &'static str, text: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.trim().parse::<T>().map_err(|e| SqlConnError::Conversion {
        column,
        target,
        reason: format!("'{text}': {e}"),
    })
}

/// -2^63, exactly representable.
const I64_MIN: f64 = -9_223_372_036_854_775_808.0;
/// 2^63, the first double past `i64::MAX`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;
/// 2^64, the first double past `u64::MAX`.
const U64_END: f64 = 18_446_744_073_709_551_616.0;

/// Truncates `value` toward zero, requiring `min <= result < end`.
fn truncate_real(column: u32, target: &'static str, value: f64, min: f64, end: f64) -> Result<f64> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < min || truncated >= end {
        return Err(SqlConnError::Conversion {
            column,
            target,
            reason: format!("{value} is out of range"),
        });
    }
    Ok(truncated)
}

fn blob_error(column: u32, target: &'static str) -> SqlConnError {
    SqlConnError::Conversion {
        column,
        target,
        reason: "blob values are not numeric".to_string(),
    }
}
