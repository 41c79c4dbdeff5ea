//! `CustomerRepository` trait implementation for `SqliteCustomerRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use clientele_registry::{CustomerQuery, CustomerRepository, RepositoryError};
use clientele_types::{
    Customer, CustomerId, CustomerPatch, CustomerStats, CustomerStatus, NewCustomer,
};

use crate::query_builder::build_list_query;
use crate::repository::SqliteCustomerRepository;
use crate::row_mapping::{encode_timestamp, row_to_customer};

/// Column list shared across all SELECT queries.
pub(crate) const COLS: &str = "id, name, email, phone, status, created_at, updated_at";

/// Maps a `rusqlite::Error` to a `RepositoryError::Storage`.
fn map_sqlite_err(e: rusqlite::Error) -> RepositoryError {
    RepositoryError::Storage {
        message: e.to_string(),
    }
}

fn fetch(conn: &Connection, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
    let sql = format!("SELECT {COLS} FROM customers WHERE id = ?1");
    conn.query_row(&sql, params![id.get()], row_to_customer)
        .optional()
        .map_err(map_sqlite_err)
}

fn fetch_existing(conn: &Connection, id: CustomerId) -> Result<Customer, RepositoryError> {
    fetch(conn, id)?.ok_or(RepositoryError::NotFound { id })
}

/// Next `updated_at` for a record: now, but never earlier than the previous stamp.
fn touch(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        let conn = self.lock_conn();
        fetch_existing(&conn, id)
    }

    async fn list(&self, query: CustomerQuery) -> Result<Vec<Customer>, RepositoryError> {
        let status = query.status_filter()?;
        let conn = self.lock_conn();
        let (sql, param_values) = build_list_query(status);
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let customers = stmt
            .query_map(params_refs.as_slice(), row_to_customer)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        tracing::debug!(count = customers.len(), ?status, "listed customers");
        Ok(customers)
    }

    async fn add(&self, input: NewCustomer) -> Result<Customer, RepositoryError> {
        let name = input.validated_name()?;
        let mut conn = self.lock_conn();
        let tx = conn.transaction().map_err(map_sqlite_err)?;
        let now = encode_timestamp(Utc::now());
        tx.execute(
            "INSERT INTO customers (name, email, phone, status, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![
                name,
                input.email,
                input.phone,
                CustomerStatus::Active.as_str(),
                now,
            ],
        )
        .map_err(map_sqlite_err)?;
        let id = CustomerId::new(tx.last_insert_rowid());
        let customer = fetch_existing(&tx, id)?;
        tx.commit().map_err(map_sqlite_err)?;
        tracing::info!(%id, name = %customer.name, "added customer");
        Ok(customer)
    }

    async fn update(
        &self,
        id: CustomerId,
        patch: CustomerPatch,
    ) -> Result<Customer, RepositoryError> {
        let mut conn = self.lock_conn();
        let tx = conn.transaction().map_err(map_sqlite_err)?;
        let existing = fetch_existing(&tx, id)?;
        let patch = patch.validated()?;
        tx.execute(
            "UPDATE customers SET name = COALESCE(?2, name), email = COALESCE(?3, email), \
             phone = COALESCE(?4, phone), updated_at = ?5 WHERE id = ?1",
            params![
                id.get(),
                patch.name,
                patch.email,
                patch.phone,
                encode_timestamp(touch(existing.updated_at)),
            ],
        )
        .map_err(map_sqlite_err)?;
        let customer = fetch_existing(&tx, id)?;
        tx.commit().map_err(map_sqlite_err)?;
        tracing::info!(%id, "updated customer");
        Ok(customer)
    }

    async fn set_status(
        &self,
        id: CustomerId,
        status: CustomerStatus,
    ) -> Result<Customer, RepositoryError> {
        let mut conn = self.lock_conn();
        let tx = conn.transaction().map_err(map_sqlite_err)?;
        let existing = fetch_existing(&tx, id)?;
        tx.execute(
            "UPDATE customers SET status = ?2, updated_at = ?3 WHERE id = ?1",
            params![
                id.get(),
                status.as_str(),
                encode_timestamp(touch(existing.updated_at)),
            ],
        )
        .map_err(map_sqlite_err)?;
        let customer = fetch_existing(&tx, id)?;
        tx.commit().map_err(map_sqlite_err)?;
        tracing::info!(%id, %status, "changed customer status");
        Ok(customer)
    }

    async fn stats(&self) -> Result<CustomerStats, RepositoryError> {
        let conn = self.lock_conn();
        conn.query_row(
            "SELECT COUNT(*), \
             COALESCE(SUM(status = 'active'), 0), \
             COALESCE(SUM(status = 'disabled'), 0) FROM customers",
            [],
            |row| {
                Ok(CustomerStats {
                    total: row.get::<_, i64>(0)? as u64,
                    active: row.get::<_, i64>(1)? as u64,
                    disabled: row.get::<_, i64>(2)? as u64,
                })
            },
        )
        .map_err(map_sqlite_err)
    }
}
