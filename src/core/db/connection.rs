/// Connection Module
///
/// This module provides `Connection`: one SQLite link plus its statement and
/// result state. Every execution entry point repairs the link before use,
/// recovers driver and extraction errors locally, and reports them as a
/// boolean (or a zero count) plus a log line.
///
/// ## Result cursor
///
/// A connection holds at most one [`ResultSet`]. Each query-producing call
/// empties the slot before it runs and installs the new cursor afterwards, so
/// a failed query leaves no cursor and a successful one never shows rows from
/// an earlier call.

use crate::config::{Config, Credentials, DriverOptions};
use crate::core::db::{BindColumns, ColumnDecodable, PreparedStatement, ResultSet};
use crate::core::{Result, SqlConnError};
use rusqlite::{params_from_iter, OpenFlags};
use std::any;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, error, trace, warn};

/// The pool or manager that owns a set of connections.
///
/// A connection keeps a weak reference to its owner so the pool can be
/// reached from it later; the connection itself never calls into the pool.
pub trait ConnectionPool: Send + Sync {}

/// A single database session with its statement and result state.
///
/// Not internally synchronized: operations take `&mut self`, so one instance
/// serves one caller at a time. The owning pool hands it out for a
/// request cycle and takes it back afterwards.
#[derive(Debug)]
pub struct Connection {
    conn_uuid: usize,
    credentials: Credentials,
    options: DriverOptions,
    /// Driver link (None after `disconnect` or a failed reconnect)
    link: Option<rusqlite::Connection>,
    prep_stmt: Option<PreparedStatement>,
    result: Option<ResultSet>,
    pool: Option<Weak<dyn ConnectionPool>>,
    last_error: Option<SqlConnError>,
}

impl Connection {
    /// Opens a connection with default driver options.
    ///
    /// # Arguments
    ///
    /// * `pool` - Optional back-reference to the owning pool
    /// * `conn_uuid` - Handle the pool uses to track this connection
    /// * `host`, `user`, `password` - Identity of the connection
    /// * `database` - Path to the SQLite database, or ":memory:"
    ///
    /// # Errors
    ///
    /// Returns `SqlConnError::Database` if the database cannot be opened.
    pub fn new(
        pool: Option<Weak<dyn ConnectionPool>>,
        conn_uuid: usize,
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Credentials::new(host, user, password, database);
        Self::with_options(pool, conn_uuid, credentials, DriverOptions::default())
    }

    /// Opens a connection with explicit driver options.
    pub fn with_options(
        pool: Option<Weak<dyn ConnectionPool>>,
        conn_uuid: usize,
        credentials: Credentials,
        options: DriverOptions,
    ) -> Result<Self> {
        let link = open_link(&credentials, &options)?;
        debug!(
            "Connection {} opened {} as {}@{}",
            conn_uuid, credentials.database, credentials.user, credentials.host
        );

        Ok(Connection {
            conn_uuid,
            credentials,
            options,
            link: Some(link),
            prep_stmt: None,
            result: None,
            pool,
            last_error: None,
        })
    }

    /// Opens a connection described by a loaded [`Config`].
    pub fn from_config(
        pool: Option<Weak<dyn ConnectionPool>>,
        conn_uuid: usize,
        config: &Config,
    ) -> Result<Self> {
        Self::with_options(
            pool,
            conn_uuid,
            config.connection.clone(),
            config.driver.clone().unwrap_or_default(),
        )
    }

    pub fn set_uuid(&mut self, conn_uuid: usize) {
        self.conn_uuid = conn_uuid;
    }

    pub fn get_uuid(&self) -> usize {
        self.conn_uuid
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The owning pool, if one was given and it is still alive.
    pub fn pool(&self) -> Option<Arc<dyn ConnectionPool>> {
        self.pool.as_ref().and_then(Weak::upgrade)
    }

    /// Cause of the most recent failed operation.
    ///
    /// Cleared whenever an operation starts, so it describes the last call
    /// only.
    pub fn last_error(&self) -> Option<&SqlConnError> {
        self.last_error.as_ref()
    }

    /// Whether the driver link is present and answers a trivial query.
    pub fn is_valid(&self) -> bool {
        self.link.as_ref().is_some_and(probe)
    }

    /// Drops the driver link. The next operation reopens it.
    pub fn disconnect(&mut self) {
        if self.link.take().is_some() {
            debug!("Connection {} disconnected", self.conn_uuid);
        }
    }

    /// Reopens the driver link from the stored credentials.
    pub fn reconnect(&mut self) -> bool {
        let target = self.credentials.database.clone();
        self.run(&target, |this| {
            this.link = None;
            this.link = Some(open_link(&this.credentials, &this.options)?);
            Ok(())
        })
        .is_some()
    }

    /// Executes one or more statements that produce no result set.
    ///
    /// # Returns
    ///
    /// `true` if the driver completed without error. The result cursor is
    /// left as it was.
    pub fn execute_command(&mut self, sql: &str) -> bool {
        self.run(sql, |this| {
            this.ensure_connected()?.execute_batch(sql)?;
            Ok(())
        })
        .is_some()
    }

    /// Executes a query and installs its result cursor.
    ///
    /// # Returns
    ///
    /// `true` if at least one row was returned. On zero rows the empty
    /// cursor stays installed.
    pub fn execute_query(&mut self, sql: &str) -> bool {
        self.run(sql, |this| Ok(this.install_query(sql)?.rows_count()))
            .is_some_and(|rows| rows > 0)
    }

    /// Executes a query and returns its row count, or 0 on failure.
    pub fn execute_query_count(&mut self, sql: &str) -> usize {
        self.run(sql, |this| Ok(this.install_query(sql)?.rows_count()))
            .unwrap_or(0)
    }

    /// Whether the query returns any row.
    pub fn execute_check_exist(&mut self, sql: &str) -> bool {
        self.execute_query_count(sql) > 0
    }

    /// The current result cursor, if the last query succeeded.
    pub fn get_result_set(&self) -> Option<&ResultSet> {
        self.result.as_ref()
    }

    /// Mutable access to the current cursor, for walking its rows.
    pub fn get_result_set_mut(&mut self) -> Option<&mut ResultSet> {
        self.result.as_mut()
    }

    /// Compiles a parameterized SQL template, replacing any previous one.
    ///
    /// Bind parameters through [`Connection::get_prep_stmt`] and run it with
    /// [`Connection::execute_prep_stmt_command`] or
    /// [`Connection::execute_prep_stmt_query`].
    pub fn create_prep_stmt(&mut self, sql: &str) -> bool {
        self.run(sql, |this| {
            this.prep_stmt = None;
            let link = this.ensure_connected()?;
            let parameter_count = link.prepare_cached(sql)?.parameter_count();
            this.prep_stmt = Some(PreparedStatement::new(sql, parameter_count));
            Ok(())
        })
        .is_some()
    }

    pub fn get_prep_stmt(&mut self) -> Option<&mut PreparedStatement> {
        self.prep_stmt.as_mut()
    }

    /// Executes the prepared statement as a command with its bound parameters.
    ///
    /// Any statement is accepted; rows it returns are stepped through and
    /// dropped without touching the result cursor.
    pub fn execute_prep_stmt_command(&mut self) -> bool {
        let sql = self.prepared_sql();
        self.run(&sql, |this| {
            let prep = this.prep_stmt.as_ref().ok_or(SqlConnError::NoPreparedStatement)?;
            let link = ensure_link(&mut this.link, &this.credentials, &this.options)?;
            let mut stmt = link.prepare_cached(prep.sql())?;
            // step to completion; rows a command happens to produce are discarded
            let mut rows = stmt.query(params_from_iter(prep.parameters()))?;
            let mut discarded = 0usize;
            while rows.next()?.is_some() {
                discarded += 1;
            }
            trace!("Prepared command done, {} rows discarded", discarded);
            Ok(())
        })
        .is_some()
    }

    /// Executes the prepared statement as a query and installs its cursor.
    ///
    /// # Returns
    ///
    /// `true` if at least one row was returned.
    pub fn execute_prep_stmt_query(&mut self) -> bool {
        let sql = self.prepared_sql();
        self.run(&sql, |this| {
            this.result = None;
            let prep = this.prep_stmt.as_ref().ok_or(SqlConnError::NoPreparedStatement)?;
            let link = ensure_link(&mut this.link, &this.credentials, &this.options)?;
            let mut stmt = link.prepare_cached(prep.sql())?;
            let rs = ResultSet::from_statement(&mut stmt, params_from_iter(prep.parameters()))?;
            Ok(this.result.insert(rs).rows_count())
        })
        .is_some_and(|rows| rows > 0)
    }

    /// Reads column 1 of every row into `out` as `T`.
    ///
    /// `out` is cleared once the query returns rows. Rows whose value does not
    /// convert are skipped.
    ///
    /// # Returns
    ///
    /// `true` if at least one row converted.
    pub fn execute_query_column<T: ColumnDecodable>(&mut self, sql: &str, out: &mut Vec<T>) -> bool {
        self.run(sql, |this| {
            let conn_uuid = this.conn_uuid;
            let rs = this.install_query(sql)?;
            if rs.is_empty() {
                return Err(SqlConnError::NoRows);
            }

            out.clear();
            let mut skipped = None;
            while rs.next_row() {
                match T::decode(rs, 1) {
                    Ok(value) => out.push(value),
                    Err(e) => {
                        warn!(
                            "Connection {} skipping row {} as {}: {}",
                            conn_uuid,
                            rs.row_index().unwrap_or_default(),
                            any::type_name::<T>(),
                            e
                        );
                        skipped = Some(e);
                    }
                }
            }

            match skipped {
                Some(e) if out.is_empty() => Err(e),
                _ => Ok(()),
            }
        })
        .is_some()
    }

    /// Reads column 1 of the query's only row into `out`.
    ///
    /// Fails unless the query returns exactly one row.
    pub fn execute_query_value<T: ColumnDecodable>(&mut self, sql: &str, out: &mut T) -> bool {
        self.run(sql, |this| {
            let rs = this.install_query(sql)?;
            single_row(rs)?;
            *out = T::decode(rs, 1)?;
            Ok(())
        })
        .is_some()
    }

    /// Reads consecutive columns of the query's only row into `outputs`.
    ///
    /// `outputs` is a tuple of mutable references; the first is filled from
    /// column 1, the second from column 2, and so on. Stops at the first
    /// column that fails to convert. See also [`crate::query_values!`].
    ///
    /// ```no_run
    /// # let mut conn = sqlconn::Connection::new(None, 1, "", "", "", ":memory:").unwrap();
    /// let (mut id, mut name) = (0i64, String::new());
    /// conn.execute_query_values("SELECT id, name FROM users LIMIT 1", (&mut id, &mut name));
    /// ```
    pub fn execute_query_values<B: BindColumns>(&mut self, sql: &str, outputs: B) -> bool {
        self.run(sql, |this| {
            let rs = this.install_query(sql)?;
            single_row(rs)?;
            outputs.bind_columns(rs, 1)
        })
        .is_some()
    }

    /// Runs `op`, recording and logging its failure.
    fn run<T>(&mut self, sql: &str, op: impl FnOnce(&mut Self) -> Result<T>) -> Option<T> {
        self.last_error = None;
        match op(self) {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(sql, &e);
                self.last_error = Some(e);
                None
            }
        }
    }

    fn report(&self, sql: &str, err: &SqlConnError) {
        match err {
            SqlConnError::NoRows => {
                debug!("Connection {} STMT: {} returned no rows", self.conn_uuid, sql);
            }
            SqlConnError::Database(_) => {
                error!(
                    conn_uuid = self.conn_uuid,
                    code = ?err.driver_code(),
                    state = ?err.driver_state(),
                    "STMT: {} # ERR: {}",
                    sql,
                    err
                );
            }
            _ => {
                error!(conn_uuid = self.conn_uuid, "STMT: {} # ERR: {}", sql, err);
            }
        }
    }

    fn ensure_connected(&mut self) -> Result<&rusqlite::Connection> {
        ensure_link(&mut self.link, &self.credentials, &self.options)
    }

    /// Replaces the cursor slot with the result of `sql`.
    fn install_query(&mut self, sql: &str) -> Result<&mut ResultSet> {
        self.result = None;
        let rs = {
            let link = self.ensure_connected()?;
            let mut stmt = link.prepare(sql)?;
            ResultSet::from_statement(&mut stmt, [])?
        };
        trace!("Connection {} query returned {} rows", self.conn_uuid, rs.rows_count());
        Ok(self.result.insert(rs))
    }

    fn prepared_sql(&self) -> String {
        self.prep_stmt
            .as_ref()
            .map(|p| p.sql().to_string())
            .unwrap_or_default()
    }
}

/// Returns a live link, reopening it in place when it is missing or dead.
fn ensure_link<'a>(
    link: &'a mut Option<rusqlite::Connection>,
    credentials: &Credentials,
    options: &DriverOptions,
) -> Result<&'a rusqlite::Connection> {
    let live = match link.take() {
        Some(conn) if probe(&conn) => conn,
        stale => {
            drop(stale);
            debug!("Reconnecting to {}", credentials.database);
            open_link(credentials, options)?
        }
    };
    Ok(link.insert(live))
}

fn probe(link: &rusqlite::Connection) -> bool {
    link.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)).is_ok()
}

fn open_link(credentials: &Credentials, options: &DriverOptions) -> Result<rusqlite::Connection> {
    let flags = if options.read_only.unwrap_or(false) {
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX
    } else {
        OpenFlags::default()
    };
    let link = rusqlite::Connection::open_with_flags(&credentials.database, flags)?;

    if let Some(ms) = options.busy_timeout_ms {
        link.busy_timeout(Duration::from_millis(ms))?;
    }
    if let Some(capacity) = options.statement_cache_capacity {
        link.set_prepared_statement_cache_capacity(capacity);
    }
    if let Some(enabled) = options.foreign_keys {
        link.pragma_update(None, "foreign_keys", enabled)?;
    }
    if let Some(mode) = &options.journal_mode {
        link.pragma_update(None, "journal_mode", mode.as_str())?;
    }

    Ok(link)
}

fn single_row(rs: &mut ResultSet) -> Result<()> {
    match rs.rows_count() {
        0 => Err(SqlConnError::NoRows),
        1 => {
            rs.next_row();
            Ok(())
        }
        n => Err(SqlConnError::RowCount(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{init_test_logging, memory_connection, sample_connection};

    #[test]
    fn test_execute_command() {
        let mut conn = memory_connection();
        assert!(conn.execute_command("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT)"));
        assert!(conn.execute_command("INSERT INTO t (name) VALUES ('a'); INSERT INTO t (name) VALUES ('b');"));
        assert!(conn.last_error().is_none());
        assert!(conn.get_result_set().is_none());
    }

    #[test]
    fn test_execute_command_reports_driver_error() {
        init_test_logging();
        let mut conn = memory_connection();
        assert!(!conn.execute_command("CREATE TABLE broken ("));

        let err = conn.last_error().expect("error should be recorded");
        assert!(err.is_driver_error());
        assert!(err.driver_code().is_some());

        // the next successful call clears it
        assert!(conn.execute_command("CREATE TABLE fine (x INTEGER)"));
        assert!(conn.last_error().is_none());
    }

    #[test]
    fn test_execute_query_installs_cursor() {
        let mut conn = sample_connection();
        assert!(conn.execute_query("SELECT id, name FROM users ORDER BY id"));

        let rs = conn.get_result_set_mut().unwrap();
        assert_eq!(rs.rows_count(), 3);
        assert!(rs.next_row());
        assert_eq!(rs.get_string(2).unwrap(), "alice");
    }

    #[test]
    fn test_execute_query_zero_rows_keeps_empty_cursor() {
        let mut conn = sample_connection();
        assert!(conn.execute_query("SELECT id FROM users"));
        assert!(!conn.execute_query("SELECT id FROM users WHERE id < 0"));

        let rs = conn.get_result_set().expect("empty cursor stays installed");
        assert!(rs.is_empty());
        assert!(conn.last_error().is_none());
    }

    #[test]
    fn test_failed_query_clears_previous_cursor() {
        let mut conn = sample_connection();
        assert!(conn.execute_query("SELECT id FROM users"));
        assert!(!conn.execute_query("SELECT * FROM no_such_table"));
        assert!(conn.get_result_set().is_none());
    }

    #[test]
    fn test_count_and_exist() {
        let mut conn = sample_connection();
        assert_eq!(conn.execute_query_count("SELECT * FROM users"), 3);
        assert_eq!(conn.execute_query_count("SELECT * FROM users WHERE active = 0"), 1);
        assert_eq!(conn.execute_query_count("SELECT * FROM nowhere"), 0);
        assert!(conn.execute_check_exist("SELECT 1 FROM users WHERE name = 'bob'"));
        assert!(!conn.execute_check_exist("SELECT 1 FROM users WHERE name = 'nobody'"));
    }

    #[test]
    fn test_query_value_supported_types() {
        let mut conn = sample_connection();

        let mut id = 0i32;
        assert!(conn.execute_query_value("SELECT id FROM users WHERE name = 'bob'", &mut id));
        assert_eq!(id, 2);

        let mut balance = 0f64;
        assert!(conn.execute_query_value("SELECT balance FROM users WHERE id = 1", &mut balance));
        assert_eq!(balance, 10.5);

        let mut small = 0f32;
        assert!(conn.execute_query_value("SELECT balance FROM users WHERE id = 1", &mut small));
        assert_eq!(small, 10.5f32);

        let mut visits = 0u64;
        assert!(conn.execute_query_value("SELECT visits FROM users WHERE id = 3", &mut visits));
        assert_eq!(visits, 7);

        let mut name = String::new();
        assert!(conn.execute_query_value("SELECT name FROM users WHERE id = 3", &mut name));
        assert_eq!(name, "carol");
    }

    #[test]
    fn test_query_value_requires_exactly_one_row() {
        let mut conn = sample_connection();
        let mut id = -1i64;

        assert!(!conn.execute_query_value("SELECT id FROM users", &mut id));
        assert!(matches!(conn.last_error(), Some(SqlConnError::RowCount(3))));

        assert!(!conn.execute_query_value("SELECT id FROM users WHERE id > 100", &mut id));
        assert!(matches!(conn.last_error(), Some(SqlConnError::NoRows)));
        assert_eq!(id, -1);
    }

    #[test]
    fn test_query_value_unsupported_type() {
        let mut conn = sample_connection();
        let mut active = false;
        assert!(!conn.execute_query_value("SELECT active FROM users WHERE id = 1", &mut active));
        assert!(matches!(conn.last_error(), Some(SqlConnError::UnsupportedType("bool"))));
    }

    #[test]
    fn test_query_values_binds_in_order() {
        let mut conn = sample_connection();
        let (mut id, mut name, mut balance, mut visits) = (0i64, String::new(), 0f64, 0u32);
        assert!(conn.execute_query_values(
            "SELECT id, name, balance, visits FROM users WHERE id = 2",
            (&mut id, &mut name, &mut balance, &mut visits),
        ));
        assert_eq!((id, name.as_str(), balance, visits), (2, "bob", -4.25, 0));
    }

    #[test]
    fn test_query_values_macro() {
        let mut conn = sample_connection();
        let (mut name, mut visits) = (String::new(), 0u8);
        assert!(crate::query_values!(
            conn,
            "SELECT name, visits FROM users WHERE id = 3",
            name,
            visits
        ));
        assert_eq!(name, "carol");
        assert_eq!(visits, 7);
    }

    #[test]
    fn test_query_values_short_circuits() {
        let mut conn = sample_connection();
        let (mut id, mut balance, mut name) = (0i64, 0u16, String::from("untouched"));
        assert!(!conn.execute_query_values(
            "SELECT id, balance, name FROM users WHERE id = 2",
            (&mut id, &mut balance, &mut name),
        ));
        assert_eq!(id, 2);
        assert_eq!(name, "untouched");
        assert!(matches!(
            conn.last_error(),
            Some(SqlConnError::Conversion { column: 2, .. })
        ));
    }

    #[test]
    fn test_query_column_skips_bad_rows() {
        let mut conn = sample_connection();
        conn.execute_command("CREATE TABLE mixed (v); INSERT INTO mixed VALUES (1), ('two'), (3), (-4);");

        let mut values: Vec<u32> = vec![99];
        assert!(conn.execute_query_column("SELECT v FROM mixed ORDER BY rowid", &mut values));
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn test_query_column_fails_when_no_row_converts() {
        let mut conn = sample_connection();
        let mut names: Vec<String> = vec!["keep".into()];
        assert!(!conn.execute_query_column("SELECT name FROM users WHERE id < 0", &mut names));
        assert_eq!(names, vec!["keep".to_string()]);

        let mut flags: Vec<bool> = Vec::new();
        assert!(!conn.execute_query_column("SELECT active FROM users", &mut flags));
        assert!(flags.is_empty());
        assert!(matches!(conn.last_error(), Some(SqlConnError::UnsupportedType("bool"))));
    }

    #[test]
    fn test_prepared_statement_round() {
        let mut conn = sample_connection();
        assert!(conn.create_prep_stmt("INSERT INTO users (id, name, balance, visits, active) VALUES (?1, ?2, ?3, ?4, 1)"));

        let prep = conn.get_prep_stmt().unwrap();
        assert_eq!(prep.parameter_count(), 4);
        prep.bind(1, 10i64).unwrap();
        prep.bind(2, "dave".to_string()).unwrap();
        prep.bind(3, 1.0f64).unwrap();
        prep.bind(4, 2i64).unwrap();
        assert!(conn.execute_prep_stmt_command());

        assert!(conn.create_prep_stmt("SELECT name FROM users WHERE id >= ?1 ORDER BY id"));
        conn.get_prep_stmt().unwrap().bind(1, 3i64).unwrap();
        assert!(conn.execute_prep_stmt_query());
        assert_eq!(conn.get_result_set().unwrap().rows_count(), 2);

        conn.get_prep_stmt().unwrap().bind(1, 100i64).unwrap();
        assert!(!conn.execute_prep_stmt_query());
        assert!(conn.get_result_set().unwrap().is_empty());
    }

    #[test]
    fn test_query_syntax_error_carries_driver_code() {
        let mut conn = sample_connection();
        assert!(!conn.execute_query("SELEC oops"));

        let err = conn.last_error().expect("error should be recorded");
        assert!(err.is_driver_error());
        assert_eq!(err.driver_code(), Some(1));
        assert!(err.driver_state().is_some());

        assert!(!conn.create_prep_stmt("SELEC oops"));
        assert!(conn.last_error().and_then(SqlConnError::driver_code).is_some());
    }

    #[test]
    fn test_prepared_command_accepts_row_returning_statement() {
        let mut conn = sample_connection();
        assert!(conn.execute_query("SELECT id FROM users"));

        assert!(conn.create_prep_stmt("UPDATE users SET visits = visits + 1 WHERE id = ?1 RETURNING visits"));
        conn.get_prep_stmt().unwrap().bind(1, 3i64).unwrap();
        assert!(conn.execute_prep_stmt_command());

        // the cursor from the earlier query is untouched
        assert_eq!(conn.get_result_set().unwrap().rows_count(), 3);

        let mut visits = 0u32;
        assert!(conn.execute_query_value("SELECT visits FROM users WHERE id = 3", &mut visits));
        assert_eq!(visits, 8);
    }

    #[test]
    fn test_prepared_statement_errors() {
        let mut conn = sample_connection();
        assert!(!conn.execute_prep_stmt_command());
        assert!(matches!(conn.last_error(), Some(SqlConnError::NoPreparedStatement)));

        assert!(conn.create_prep_stmt("SELECT ?1"));
        assert!(!conn.create_prep_stmt("SELEC nonsense"));
        assert!(conn.get_prep_stmt().is_none());
    }

    #[test]
    fn test_uuid_and_pool_reference() {
        struct Pool;
        impl ConnectionPool for Pool {}

        let pool: Arc<dyn ConnectionPool> = Arc::new(Pool);
        let mut conn = Connection::new(Some(Arc::downgrade(&pool)), 7, "localhost", "app", "pw", ":memory:").unwrap();
        assert_eq!(conn.get_uuid(), 7);
        conn.set_uuid(11);
        assert_eq!(conn.get_uuid(), 11);
        assert!(conn.pool().is_some());

        drop(pool);
        assert!(conn.pool().is_none());
    }

    #[test]
    fn test_disconnected_link_reopens_on_use() {
        let mut conn = memory_connection();
        assert!(conn.is_valid());
        conn.disconnect();
        assert!(!conn.is_valid());

        let mut one = 0i64;
        assert!(conn.execute_query_value("SELECT 1", &mut one));
        assert_eq!(one, 1);
        assert!(conn.is_valid());
    }

    #[test]
    fn test_connection_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Connection>();
    }
}
