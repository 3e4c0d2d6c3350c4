//! MCP Context Browser binary entry point.
//!
//! Boots the semantic memory engine and serves the `memory_<verb>` tool
//! surface over an MCP transport. Logging is always routed to stderr —
//! stdout is reserved for the JSON-RPC stream when running under the
//! stdio transport.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use rmcp::transport::io::stdio;

use mcb_server::McbMcpServer;

/// MCP Context Browser — a Model Context Protocol server for semantic agent
/// memory.
#[derive(Parser)]
#[command(name = "mcb")]
#[command(about = "MCP Context Browser - semantic agent memory over MCP")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the memory engine's MCP tool surface.
    Serve {
        /// Transport to serve over. Only `stdio` is currently supported.
        #[arg(long, default_value = "stdio")]
        transport: String,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { transport } => match transport.as_str() {
            "stdio" => serve_stdio().await?,
            other => anyhow::bail!("unsupported transport: {other} (only 'stdio' is supported)"),
        },
    }

    Ok(())
}

async fn serve_stdio() -> Result<()> {
    tracing::info!(transport = "stdio", "starting mcb memory engine");
    let server = McbMcpServer::new();
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
