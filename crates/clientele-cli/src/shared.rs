//! Shared helpers used across CLI commands.

use std::net::SocketAddr;
use std::sync::Arc;

use clientele_store_sqlite::SqliteCustomerRepository;

/// Opens the SQLite customer store at `path`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the database file cannot be created or opened.
pub fn open_repository(path: &str) -> anyhow::Result<Arc<SqliteCustomerRepository>> {
    let repo =
        SqliteCustomerRepository::open(path).map_err(|e| anyhow::anyhow!("store error: {e}"))?;
    Ok(Arc::new(repo))
}

/// Resolves `host:port` to the first matching socket address.
///
/// # Errors
///
/// Returns an error if the host cannot be resolved.
pub async fn resolve_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    tokio::net::lookup_host((host, port))
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("no address found for {host}:{port}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_repository_creates_parent_dir() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("nested").join("customers.db");
        let repo = open_repository(db.to_str().expect("utf8"));
        assert!(repo.is_ok());
        assert!(db.exists());
    }

    #[tokio::test]
    async fn resolve_ip_literal() {
        let addr = resolve_addr("127.0.0.1", 8080).await.expect("addr");
        assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().expect("parse"));
    }
}
