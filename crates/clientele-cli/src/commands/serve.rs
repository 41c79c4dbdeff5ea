//! `clientele serve` command.
//!
//! Opens the customer store and serves MCP over HTTP until Ctrl-C.

use std::sync::Arc;

use clap::Args;

use clientele_config::ClienteleConfig;
use clientele_mcp::McpHandler;
use clientele_registry::CustomerRepository;
use clientele_transport_http::HttpServer;

use crate::shared;

/// Start the MCP HTTP server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,
    /// TCP port (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
    /// Database path (overrides `storage.database_path`).
    #[arg(long)]
    pub db: Option<String>,
}

impl ServeArgs {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn effective(&self, config: &ClienteleConfig) -> ClienteleConfig {
        let mut merged = config.clone();
        if let Some(host) = &self.host {
            merged.server.host = host.clone();
        }
        if let Some(port) = self.port {
            merged.server.port = port;
        }
        if let Some(db) = &self.db {
            merged.storage.database_path = db.clone();
        }
        merged
    }
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &ClienteleConfig) -> anyhow::Result<()> {
    let config = args.effective(config);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    let repo = shared::open_repository(&config.storage.database_path)?;
    if config.storage.seed_sample_data {
        repo.seed_if_empty()
            .await
            .map_err(|e| anyhow::anyhow!("seeding failed: {e}"))?;
    }
    let stats = repo
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("store query: {e}"))?;
    tracing::info!(
        db = %config.storage.database_path,
        total = stats.total,
        active = stats.active,
        disabled = stats.disabled,
        "customer store ready"
    );

    let addr = shared::resolve_addr(&config.server.host, config.server.port).await?;
    let handler = Arc::new(McpHandler::new(repo));
    let server = HttpServer::new(handler, addr);
    server
        .run_until(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutdown signal received");
            }
        })
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))?;

    tracing::info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(9000),
            db: Some("/tmp/x.db".to_string()),
        };
        let merged = args.effective(&ClienteleConfig::default());
        assert_eq!(merged.server.host, "127.0.0.1");
        assert_eq!(merged.server.port, 9000);
        assert_eq!(merged.storage.database_path, "/tmp/x.db");
    }

    #[test]
    fn absent_flags_keep_config() {
        let args = ServeArgs {
            host: None,
            port: None,
            db: None,
        };
        let merged = args.effective(&ClienteleConfig::default());
        assert_eq!(merged.server.port, 8080);
        assert_eq!(merged.storage.database_path, "data/customers.db");
    }

    #[tokio::test]
    async fn port_zero_flag_is_rejected() {
        let dir = tempfile::tempdir().expect("tmp");
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(0),
            db: Some(dir.path().join("c.db").to_str().expect("u").to_string()),
        };
        let err = execute(&args, &ClienteleConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }
}
