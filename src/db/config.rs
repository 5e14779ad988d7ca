//! # Database Configuration
//!
//! Connection settings built once at process start and passed into the
//! connection factory. Credentials carry no fallback values: startup fails
//! unless `SQL_USER` and `SQL_PASSWORD` are set.

use sqlx::postgres::PgSslMode;

use super::errors::DbError;

/// Database connection configuration
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database server host (default: "localhost")
    pub host: String,

    /// Database server port (default: 5432)
    pub port: u16,

    /// Database name (default: "cms")
    pub database: String,

    /// Username (required, no default)
    pub username: String,

    /// Password (required, no default)
    pub password: String,

    /// TLS mode for the connection (default: require)
    pub ssl_mode: PgSslMode,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_database() -> String {
    "cms".to_string()
}

impl DbConfig {
    /// Build the configuration from process environment variables.
    ///
    /// Recognized variables: `SQL_SERVER`, `SQL_PORT`, `SQL_DB`, `SQL_USER`,
    /// `SQL_PASSWORD`, `SQL_SSLMODE`.
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary lookup function.
    ///
    /// `from_env` delegates here; tests inject a map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SQL_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| DbError::InvalidEnv("SQL_PORT", raw))?,
            None => default_port(),
        };

        let ssl_mode = match lookup("SQL_SSLMODE") {
            Some(raw) => parse_ssl_mode(&raw)?,
            None => PgSslMode::Require,
        };

        Ok(Self {
            host: lookup("SQL_SERVER").unwrap_or_else(default_host),
            port,
            database: lookup("SQL_DB").unwrap_or_else(default_database),
            username: lookup("SQL_USER").ok_or(DbError::MissingEnv("SQL_USER"))?,
            password: lookup("SQL_PASSWORD").ok_or(DbError::MissingEnv("SQL_PASSWORD"))?,
            ssl_mode,
        })
    }
}

fn parse_ssl_mode(raw: &str) -> Result<PgSslMode, DbError> {
    match raw {
        "disable" => Ok(PgSslMode::Disable),
        "prefer" => Ok(PgSslMode::Prefer),
        "require" => Ok(PgSslMode::Require),
        "verify-ca" => Ok(PgSslMode::VerifyCa),
        "verify-full" => Ok(PgSslMode::VerifyFull),
        other => Err(DbError::InvalidEnv("SQL_SSLMODE", other.to_string())),
    }
}
