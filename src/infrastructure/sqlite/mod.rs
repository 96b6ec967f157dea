pub mod account_repo;
pub mod filing_store;
pub mod migrations;
pub mod transaction_repo;

use crate::domain::error::DomainError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// One connection shared by every repository. Sharing keeps `:memory:`
/// databases coherent and lets foreign keys span tables.
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Opens (or creates) the database, enables WAL and foreign keys, and runs
/// migrations.
pub fn open_database(db_path: &str) -> Result<SharedConnection, DomainError> {
    let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| DomainError::Database(format!("Foreign key pragma error: {e}")))?;
    migrations::run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

pub(crate) fn lock(conn: &SharedConnection) -> Result<MutexGuard<'_, Connection>, DomainError> {
    conn.lock().map_err(|e| DomainError::Database(e.to_string()))
}

pub(crate) fn db_err(e: rusqlite::Error) -> DomainError {
    DomainError::Database(e.to_string())
}

/// `?{offset+1}, ?{offset+2}, ...` for an IN list of `n` values.
pub(crate) fn placeholders(offset: usize, n: usize) -> String {
    (0..n)
        .map(|i| format!("?{}", offset + i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn parse_date_col(idx: usize, s: &str) -> Result<chrono::NaiveDate, rusqlite::Error> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub(crate) fn parse_timestamp_col(
    idx: usize,
    s: &str,
) -> Result<chrono::DateTime<chrono::Utc>, rusqlite::Error> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
