/// Error Module
///
/// This module defines the error taxonomy of a connection. Every public
/// operation of [`crate::Connection`] recovers these locally and reports them
/// as a boolean plus a log line; the last one is kept for callers that need
/// the cause.
use rusqlite::ErrorCode;
use thiserror::Error;

/// Error type for connection operations.
///
/// Covers the failure classes a connection can hit:
/// - Driver and execution failures (SQL errors, I/O, reconnect failures)
/// - Cardinality failures (a single row was required)
/// - Extraction failures (unsupported type, narrowing, bad column)
/// - Configuration loading
#[derive(Error, Debug)]
pub enum SqlConnError {
    /// Errors raised by the SQLite driver
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The query returned no rows where a value was required
    #[error("Query returned no rows")]
    NoRows,

    /// The query returned a row count other than exactly one
    #[error("Error rows count: {0}")]
    RowCount(usize),

    /// Extraction requested into a type the extractor does not support
    #[error("Unsupported type: {0}")]
    UnsupportedType(&'static str),

    /// A column value could not be converted into the requested type
    #[error("Cannot convert column {column} to {target}: {reason}")]
    Conversion {
        column: u32,
        target: &'static str,
        reason: String,
    },

    /// A 1-based column index outside the current row
    #[error("Column index {column} out of range (row has {count} columns)")]
    ColumnOutOfRange { column: u32, count: usize },

    /// Accessor called while the cursor is not positioned on a row
    #[error("Result cursor is not positioned on a row")]
    NoCurrentRow,

    /// Prepared-statement execution without a prepared statement
    #[error("No prepared statement has been created")]
    NoPreparedStatement,

    /// A 1-based parameter index outside the prepared statement
    #[error("Parameter index {index} out of range (statement has {count} parameters)")]
    BindIndexOutOfRange { index: usize, count: usize },

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SqlConnError {
    /// Extended result code reported by the driver, if this error came from it.
    pub fn driver_code(&self) -> Option<i32> {
        self.sqlite_error().map(|err| err.extended_code)
    }

    /// Symbolic driver state (the SQLite primary error code), if any.
    pub fn driver_state(&self) -> Option<ErrorCode> {
        self.sqlite_error().map(|err| err.code)
    }

    /// The raw SQLite error, whether raised while stepping or while
    /// compiling a statement.
    fn sqlite_error(&self) -> Option<&rusqlite::ffi::Error> {
        match self {
            SqlConnError::Database(rusqlite::Error::SqliteFailure(err, _)) => Some(err),
            SqlConnError::Database(rusqlite::Error::SqlInputError { error, .. }) => Some(error),
            _ => None,
        }
    }

    /// Whether this error came from the driver rather than from extraction.
    pub fn is_driver_error(&self) -> bool {
        matches!(self, SqlConnError::Database(_))
    }
}

/// Type alias for Result to use SqlConnError as the error type.
pub type Result<T> = std::result::Result<T, SqlConnError>;
