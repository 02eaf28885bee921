// ABOUTME: Stdio transport running newline-delimited JSON-RPC over stdin/stdout
// ABOUTME: One request per line in, one response per line out, logs on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stdio transport
//!
//! Reads newline-delimited JSON-RPC from stdin and writes responses to
//! stdout. Notifications get no response; lines that are not valid JSON get
//! a `PARSE_ERROR` response with a null id. The loop ends when stdin closes.

use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::protocol::ProtocolHandler;
use crate::mcp::ServerResources;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Stdio transport for the MCP server
pub struct StdioTransport {
    resources: ServerResources,
}

impl StdioTransport {
    /// Bind the transport to its resources
    #[must_use]
    pub fn new(resources: ServerResources) -> Self {
        Self { resources }
    }

    /// Serve until stdin closes.
    ///
    /// # Errors
    ///
    /// Returns an error when stdin cannot be read or stdout cannot be
    /// written; per-request failures are answered in-band instead.
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        info!("MCP stdio transport ready");

        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(trimmed) {
                Ok(request) => {
                    debug!("Request: {}", request.method);
                    ProtocolHandler::handle(request, &self.resources).await
                }
                Err(e) => {
                    warn!("Unparsable request line: {e}");
                    Some(JsonRpcResponse::error(
                        None,
                        error_codes::PARSE_ERROR,
                        format!("Parse error: {e}"),
                    ))
                }
            };

            if let Some(response) = response {
                let mut serialized = serde_json::to_string(&response)?;
                serialized.push('\n');
                stdout.write_all(serialized.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }
}
