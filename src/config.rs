use crate::core::{Result, SqlConnError};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub connection: Credentials,
    pub driver: Option<DriverOptions>,
}

/// Target and identity of a connection.
///
/// `database` is the SQLite database path (or `:memory:`). The remaining
/// fields identify the connection to its pool and in logs.
#[derive(Clone, Default, PartialEq, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
}

impl Credentials {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Credentials {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            database: database.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

/// Driver tuning applied every time the link is (re)opened.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DriverOptions {
    pub busy_timeout_ms: Option<u64>,
    pub read_only: Option<bool>,
    pub foreign_keys: Option<bool>,
    pub journal_mode: Option<String>,
    pub statement_cache_capacity: Option<usize>,
}

/// Parses configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    if config.connection.database.trim().is_empty() {
        return Err(SqlConnError::Config("connection.database must not be empty".to_string()));
    }
    Ok(config)
}

/// Loads configuration from a TOML file at the given path.
///
/// # Example
///
/// ```no_run
/// let config = sqlconn::config::load_config("sqlconn.toml").expect("Failed to load config");
/// println!("{:?}", config);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CONFIG: &str = r#"
[connection]
host = "localhost"
user = "reporting"
password = "s3cret"
database = "/var/lib/app/data.db"

[driver]
busy_timeout_ms = 2500
foreign_keys = true
journal_mode = "WAL"
statement_cache_capacity = 32
"#;

    #[test]
    fn test_parse_config_from_str() {
        let config = parse_config(SAMPLE_CONFIG).expect("Failed to parse sample config");
        assert_eq!(config.connection.host, "localhost");
        assert_eq!(config.connection.user, "reporting");
        assert_eq!(config.connection.database, "/var/lib/app/data.db");
        if let Some(driver) = config.driver {
            assert_eq!(driver.busy_timeout_ms, Some(2500));
            assert_eq!(driver.foreign_keys, Some(true));
            assert_eq!(driver.journal_mode.as_deref(), Some("WAL"));
            assert_eq!(driver.read_only, None);
            assert_eq!(driver.statement_cache_capacity, Some(32));
        } else {
            panic!("Driver configuration not found");
        }
    }

    #[test]
    fn test_driver_section_is_optional() {
        let config = parse_config("[connection]\ndatabase = \":memory:\"\n").unwrap();
        assert_eq!(config.connection.database, ":memory:");
        assert!(config.connection.user.is_empty());
        assert!(config.driver.is_none());
    }

    #[test]
    fn test_empty_database_is_rejected() {
        let result = parse_config("[connection]\ndatabase = \"  \"\n");
        assert!(matches!(result, Err(SqlConnError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = parse_config("[connection\ndatabase = 1");
        assert!(matches!(result, Err(SqlConnError::Toml(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CONFIG.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.connection.password, "s3cret");

        let missing = load_config("/nonexistent/sqlconn.toml");
        assert!(matches!(missing, Err(SqlConnError::Io(_))));
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::new("h", "u", "hunter2", "db");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("***"));
    }
}
