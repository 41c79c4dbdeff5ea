//! `clientele status` command.
//!
//! Displays customer store statistics.

use clap::Args;

use clientele_config::ClienteleConfig;
use clientele_registry::CustomerRepository;

use crate::shared;

/// Show customer store statistics.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Database path (overrides `storage.database_path`).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the status command.
pub async fn execute(args: &StatusArgs, config: &ClienteleConfig) -> anyhow::Result<()> {
    let db_path = args
        .db
        .clone()
        .unwrap_or_else(|| config.storage.database_path.clone());
    let repo = shared::open_repository(&db_path)?;
    let stats = repo
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("store query: {e}"))?;

    println!("Clientele Status");
    println!("{}", "─".repeat(40));
    println!("  Version  : {}", env!("CARGO_PKG_VERSION"));
    println!("  Database : {db_path}");
    println!("  Listen   : {}", config.bind_address());
    println!();
    println!("Customers");
    println!("  Total    : {}", stats.total);
    println!("  Active   : {}", stats.active);
    println!("  Disabled : {}", stats.disabled);

    Ok(())
}
