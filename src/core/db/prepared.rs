/// Prepared Statement Module
///
/// A `PreparedStatement` is the caller-facing handle for a parameterized SQL
/// template. It records the template and the parameter values bound so far;
/// the compiled form lives in the driver's statement cache, keyed by the
/// template, so it survives for as long as the link does and is recompiled
/// after a reconnect.

use crate::core::{Result, SqlConnError};
use rusqlite::types::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedStatement {
    sql: String,
    /// One slot per placeholder, in placeholder order
    params: Vec<Value>,
}

impl PreparedStatement {
    pub(crate) fn new(sql: &str, parameter_count: usize) -> Self {
        PreparedStatement {
            sql: sql.to_string(),
            params: vec![Value::Null; parameter_count],
        }
    }

    /// The SQL template this statement was created from.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameter_count(&self) -> usize {
        self.params.len()
    }

    /// Values currently bound, in placeholder order. Unbound slots are `NULL`.
    pub fn parameters(&self) -> &[Value] {
        &self.params
    }

    /// Binds `value` to the 1-based placeholder `index`.
    ///
    /// # Errors
    ///
    /// Returns `SqlConnError::BindIndexOutOfRange` if the template has no
    /// placeholder at `index`.
    pub fn bind<V: Into<Value>>(&mut self, index: usize, value: V) -> Result<()> {
        let count = self.params.len();
        let slot = index
            .checked_sub(1)
            .and_then(|i| self.params.get_mut(i))
            .ok_or(SqlConnError::BindIndexOutOfRange { index, count })?;
        *slot = value.into();
        Ok(())
    }

    pub fn set_null(&mut self, index: usize) -> Result<()> {
        self.bind(index, Value::Null)
    }

    /// Resets every placeholder to `NULL`.
    pub fn clear_parameters(&mut self) {
        self.params.fill(Value::Null);
    }
}
