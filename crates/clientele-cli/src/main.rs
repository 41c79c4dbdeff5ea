//! Clientele CLI - customer records over MCP.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

use clientele_config::{load_config, LogFormat};

mod commands;
pub(crate) mod shared;

/// Clientele - customer record management exposed as MCP tools.
#[derive(Debug, Parser)]
#[command(name = "clientele", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv). Overrides `logging.level`.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain or json. Overrides `logging.format`.
    #[arg(long, global = true, value_parser = ["plain", "json"])]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the MCP server over HTTP.
    Serve(commands::serve::ServeArgs),
    /// Show customer store statistics.
    Status(commands::status::StatusArgs),
    /// Print the tool catalog advertised to MCP clients.
    Tools(commands::tools::ToolsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // Initialize tracing.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let format = match cli.log_format.as_deref() {
        Some("json") => LogFormat::Json,
        Some(_) => LogFormat::Plain,
        None => config.logging.format,
    };
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        LogFormat::Plain => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!("clientele starting with config: {:?}", cli.config);

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Status(args) => commands::status::execute(args, &config).await,
        Commands::Tools(args) => commands::tools::execute(args),
    }
}
