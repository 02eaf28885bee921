// ABOUTME: Server binary wiring configuration, logging, and the stdio transport
// ABOUTME: Starts the Strava segments MCP server on stdin/stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Strava Segments MCP Server Binary
//!
//! Loads configuration from the environment, wires the provider clients, and
//! serves MCP over stdio until the client disconnects.

use anyhow::Result;
use clap::Parser;
use strava_mcp_server::{
    config::ServerConfig,
    logging,
    mcp::{stdio::StdioTransport, ServerResources},
};
use tracing::info;

#[derive(Parser)]
#[command(name = "strava-mcp-server")]
#[command(about = "MCP server for Strava segment discovery and climb-attempt analytics")]
struct Args {
    /// Override the Strava website base URL (for testing against a local fixture server)
    #[arg(long)]
    web_base: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(web_base) = args.web_base {
        config.scraper.web_base_url = web_base;
    }

    info!("Starting Strava segments MCP server");
    info!("{}", config.summary());

    let resources = ServerResources::from_config(&config)?;
    StdioTransport::new(resources).run().await
}
