/// Core Module
///
/// This module contains the connection and its supporting pieces: the error
/// taxonomy, the result cursor, and the typed extraction machinery.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{Result, SqlConnError};
