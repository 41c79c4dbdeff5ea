//! Row-to-domain mapping for the SQLite customer store.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;

use clientele_types::{Customer, CustomerId, CustomerStatus};

/// Renders a timestamp for storage (RFC 3339, microsecond precision).
pub(crate) fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Maps a SQLite row (selected with `COLS`) to a `Customer`.
pub(crate) fn row_to_customer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Customer> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let email: Option<String> = row.get(2)?;
    let phone: Option<String> = row.get(3)?;
    let status_str: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    // A corrupt status column surfaces as a storage fault, never as a default.
    let status: CustomerStatus = status_str
        .parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Customer {
        id: CustomerId::new(id),
        name,
        email,
        phone,
        status,
        created_at: decode_timestamp(5, &created_at)?,
        updated_at: decode_timestamp(6, &updated_at)?,
    })
}
