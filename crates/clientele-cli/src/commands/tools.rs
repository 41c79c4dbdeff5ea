//! `clientele tools` command.

use clap::Args;

use clientele_mcp::TOOLS;

/// Print the tool catalog as JSON.
#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Print only tool names, one per line.
    #[arg(long)]
    pub names: bool,
}

/// Renders the catalog the way `tools/list` reports it.
pub fn render(args: &ToolsArgs) -> anyhow::Result<String> {
    if args.names {
        let names: Vec<&str> = TOOLS.iter().map(|t| t.name).collect();
        return Ok(names.join("\n"));
    }
    let definitions: Vec<_> = TOOLS.iter().map(|t| t.definition()).collect();
    Ok(serde_json::to_string_pretty(&definitions)?)
}

/// Executes the tools command.
pub fn execute(args: &ToolsArgs) -> anyhow::Result<()> {
    println!("{}", render(args)?);
    Ok(())
}
