//! Database connection management

use std::time::Duration;

use sqlx::{Error, PgPool, postgres::PgPoolOptions};

/// `undefined_table`: the relation has not been created in this deployment.
const UNDEFINED_TABLE: &str = "42P01";

/// `invalid_schema_name`: the schema itself is missing.
const INVALID_SCHEMA_NAME: &str = "3F000";

/// Create a `PostgreSQL` pool that connects on first use.
///
/// The pool is created once at start-up and handed to every service; an
/// unreachable server surfaces later as a per-request error instead of
/// aborting the process.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn connect_lazy(database_url: &str, acquire_timeout: Duration) -> Result<PgPool, Error> {
    PgPoolOptions::new()
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, Error> {
    PgPool::connect(database_url).await
}

/// Apply the bundled migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Whether an error means the store is unreachable or its schema is absent,
/// as opposed to the store rejecting a well-formed operation.
pub(crate) fn is_unconfigured(error: &Error) -> bool {
    match error {
        Error::Configuration(_)
        | Error::Io(_)
        | Error::Tls(_)
        | Error::PoolTimedOut
        | Error::PoolClosed => true,
        Error::Database(database_error) => matches!(
            database_error.code().as_deref(),
            Some(UNDEFINED_TABLE | INVALID_SCHEMA_NAME)
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn io_errors_are_unconfigured() {
        let error = Error::Io(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));

        assert!(is_unconfigured(&error));
    }

    #[test]
    fn pool_timeouts_are_unconfigured() {
        assert!(is_unconfigured(&Error::PoolTimedOut));
        assert!(is_unconfigured(&Error::PoolClosed));
    }

    #[test]
    fn row_not_found_is_not_unconfigured() {
        assert!(!is_unconfigured(&Error::RowNotFound));
    }
}
