// Core infrastructure modules
pub mod core;

pub mod config;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::config::{Config, Credentials, DriverOptions};
pub use crate::core::db::{
    BindColumns, ColumnDecodable, Connection, ConnectionPool, PreparedStatement, ResultSet,
};
pub use crate::core::{Result, SqlConnError};
pub use rusqlite::types::Value;
