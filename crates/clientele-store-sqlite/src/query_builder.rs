//! SQL query builder for customer listings.

use clientele_types::CustomerStatus;

use crate::repository_impl::COLS;

/// Builds the SQL and parameters for `list`.
pub(crate) fn build_list_query(
    status: Option<CustomerStatus>,
) -> (String, Vec<Box<dyn rusqlite::types::ToSql>>) {
    let mut sql = format!("SELECT {COLS} FROM customers");
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
    if let Some(status) = status {
        sql.push_str(" WHERE status = ?");
        params.push(Box::new(status.as_str()));
    }
    sql.push_str(" ORDER BY name ASC, id ASC");
    (sql, params)
}
