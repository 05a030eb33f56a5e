/// Database Module
///
/// This module provides the single-connection database layer, organized into
/// focused submodules.
///
/// ## Architecture
///
/// - **Connection** (`connection.rs`): owns the driver link, the prepared
///   statement and the result cursor; exposes the execution operations
/// - **Result Cursor** (`result_set.rs`): buffered rows of the last query
/// - **Type Extractor** (`extract.rs`): compile-time selection of the
///   column accessor for a requested type
/// - **Variadic Binder** (`binder.rs`): fills a tuple of outputs from
///   consecutive columns
/// - **Prepared Statements** (`prepared.rs`): template plus bound parameters
///
/// ## Error Handling
///
/// Internals return `Result<T, SqlConnError>`; the public operations of
/// `Connection` turn failures into a boolean and a log line.
pub mod binder;
pub mod connection;
pub mod extract;
pub mod prepared;
pub mod result_set;

pub use binder::BindColumns;
pub use connection::{Connection, ConnectionPool};
pub use extract::{extract, ColumnDecodable};
pub use prepared::PreparedStatement;
pub use result_set::ResultSet;
