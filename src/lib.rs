// ABOUTME: Main library entry point for the Strava segments MCP server
// ABOUTME: Exposes segment discovery, leaderboard scraping, and geocoding tools over MCP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Strava Segments MCP Server
//!
//! A Model Context Protocol (MCP) server exposing geographic and
//! activity-analytics queries over Strava as callable tools.
//!
//! The interesting part lives in [`scraper`]: the public Strava API has no
//! leaderboard-history endpoint, so climb-attempt counts are produced by
//! fetching the year-scoped leaderboard page, parsing its table into typed
//! entries, and aggregating attempt dates against an injected clock. The
//! remaining tools (segment explore, segment detail, address geocoding,
//! bounding-box construction) are thin JSON clients and pure geometry.
//!
//! ## Tool surface
//!
//! - `get_latitude_and_longitude`: geocode a street address via Nominatim
//! - `define_rectangular_area`: build a search bounding box around a point
//! - `get_nearby_segments`: Strava segment explore within a bounding box
//! - `get_number_of_climb_attempts_on_the_year`: leaderboard scrape plus
//!   per-month and year-to-date attempt counts

/// Environment-based configuration for the server and its HTTP clients
pub mod config;
/// Protocol, endpoint, and tool-name constants
pub mod constants;
/// Error types shared across the scraping and provider layers
pub mod errors;
/// Bounding-box geometry helpers
pub mod geo;
/// JSON-RPC 2.0 message types
pub mod jsonrpc;
/// Logging configuration and initialization
pub mod logging;
/// MCP protocol schema, handlers, and stdio transport
pub mod mcp;
/// Data types for leaderboard entries, attempt counts, and segments
pub mod models;
/// MCP prompt definitions
pub mod prompts;
/// External API clients (Strava JSON API, Nominatim)
pub mod providers;
/// Leaderboard page fetching, table parsing, and attempt aggregation
pub mod scraper;
/// MCP tool schemas and implementations
pub mod tools;
