//! SQLite-backed customer repository: connection ownership and setup.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use clientele_registry::RepositoryError;

use crate::migrations::run_migrations;

/// SQLite-backed customer repository.
///
/// A single connection sits behind a mutex; each operation holds the lock
/// for its whole read-check-write sequence, so operations never interleave.
pub struct SqliteCustomerRepository {
    conn: Mutex<rusqlite::Connection>,
}

impl SqliteCustomerRepository {
    /// Opens or creates a SQLite database at the given path.
    ///
    /// The parent directory is created if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| RepositoryError::Storage {
                message: format!("failed to create {}: {e}", parent.display()),
            })?;
        }
        let conn = rusqlite::Connection::open(path).map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "opened customer database");
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database (used by tests).
    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn =
            rusqlite::Connection::open_in_memory().map_err(|e| RepositoryError::Storage {
                message: e.to_string(),
            })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: rusqlite::Connection) -> Result<Self, RepositoryError> {
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquires the connection lock.
    ///
    /// A poisoned lock is taken over: a transaction left open by the
    /// panicking holder was rolled back when it was dropped.
    pub(crate) fn lock_conn(&self) -> MutexGuard<'_, rusqlite::Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering customer database lock after a panic");
            self.conn.clear_poison();
            PoisonError::into_inner(poisoned)
        })
    }
}
