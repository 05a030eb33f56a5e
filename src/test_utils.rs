/// # Test Utilities Module
///
/// Shared fixtures for the unit tests: connections over private in-memory
/// databases, a standard sample schema, and log capture.

use crate::core::db::Connection;
use std::sync::Once;

const SAMPLE_SCHEMA: &str = "
    CREATE TABLE users (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        balance REAL,
        visits INTEGER,
        active BOOLEAN DEFAULT 1
    );
    INSERT INTO users VALUES (1, 'alice', 10.5, 3, 1);
    INSERT INTO users VALUES (2, 'bob', -4.25, 0, 1);
    INSERT INTO users VALUES (3, 'carol', 0.0, 7, 0);
";

/// Routes `tracing` output to the test harness so failures show their logs.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// A connection over a fresh in-memory database.
pub fn memory_connection() -> Connection {
    init_test_logging();
    Connection::new(None, 1, "localhost", "test", "", ":memory:")
        .expect("in-memory database should open")
}

/// A connection over an in-memory database holding the sample `users` table.
pub fn sample_connection() -> Connection {
    let mut conn = memory_connection();
    assert!(conn.execute_command(SAMPLE_SCHEMA), "sample schema should load");
    conn
}
