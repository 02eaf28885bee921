// ABOUTME: MCP protocol implementation: schema, handlers, resources, stdio transport
// ABOUTME: Everything needed to serve the tool and prompt surface over stdin/stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCP protocol layer

pub mod protocol;
pub mod resources;
pub mod schema;
pub mod stdio;

pub use resources::ServerResources;
