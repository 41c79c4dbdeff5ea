//! Database schema migrations for the customer store.

use clientele_registry::RepositoryError;
use rusqlite::Connection;

/// Current schema version.
const SCHEMA_VERSION: u32 = 1;

/// Runs all pending migrations on the database.
pub fn run_migrations(conn: &Connection) -> Result<(), RepositoryError> {
    let current = get_schema_version(conn)?;

    if current < 1 {
        migrate_v1(conn)?;
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

/// Creates the initial schema (v1).
fn migrate_v1(conn: &Connection) -> Result<(), RepositoryError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS customers (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL CHECK (length(trim(name)) > 0),
            email      TEXT,
            phone      TEXT,
            status     TEXT NOT NULL DEFAULT 'active'
                       CHECK (status IN ('active', 'disabled')),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_customers_status ON customers(status);
        CREATE INDEX IF NOT EXISTS idx_customers_email ON customers(email);
        CREATE INDEX IF NOT EXISTS idx_customers_name ON customers(name);",
    )
    .map_err(|e| RepositoryError::Storage {
        message: format!("migration v1 failed: {e}"),
    })
}

/// Reads the current schema version from PRAGMA user_version.
fn get_schema_version(conn: &Connection) -> Result<u32, RepositoryError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to read schema version: {e}"),
        })
}

/// Sets the schema version via PRAGMA user_version.
fn set_schema_version(conn: &Connection, version: u32) -> Result<(), RepositoryError> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to set schema version: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_on_fresh_db() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        run_migrations(&conn).expect("migrations should succeed");

        let version = get_schema_version(&conn).expect("version");
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        run_migrations(&conn).expect("first run");
        run_migrations(&conn).expect("second run should also succeed");
    }

    #[test]
    fn status_check_constraint_enforced() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        run_migrations(&conn).expect("migrate");
        let result = conn.execute(
            "INSERT INTO customers (name, status, created_at, updated_at) \
             VALUES ('x', 'archived', '', '')",
            [],
        );
        assert!(result.is_err());
    }
}
