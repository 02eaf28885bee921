// ABOUTME: MCP tool surface: schemas and implementations
// ABOUTME: Registry advertises tools, handlers execute them over the provider seams
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool layer

pub mod handlers;
pub mod registry;

pub use registry::get_tools;
