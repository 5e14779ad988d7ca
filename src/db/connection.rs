//! # Connection Factory
//!
//! Produces one live PostgreSQL connection per call. Handshake failures
//! propagate unmodified as [`DbError::Connection`] — no retry, no backoff.

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;

use super::config::DbConfig;
use super::errors::{DbError, DbResult};

/// Open a fresh connection to the configured database.
///
/// The caller owns the connection for the duration of one request and is
/// responsible for closing it; dropping the connection also releases it.
pub async fn connect(config: &DbConfig) -> DbResult<PgConnection> {
    connect_options(config)
        .connect()
        .await
        .map_err(DbError::Connection)
}

fn connect_options(config: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.username)
        .password(&config.password)
        .ssl_mode(config.ssl_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgSslMode;

    fn config() -> DbConfig {
        DbConfig {
            host: "db.internal".to_string(),
            port: 5433,
            database: "customers".to_string(),
            username: "cms".to_string(),
            password: "secret".to_string(),
            ssl_mode: PgSslMode::Require,
        }
    }

    #[test]
    fn test_connect_options_carry_config() {
        let options = connect_options(&config());
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("customers"));
        assert_eq!(options.get_username(), "cms");
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_connection_error() {
        // Port 1 on loopback is refused immediately rather than timing out.
        let config = DbConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..config()
        };
        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, DbError::Connection(_)));
    }
}
