// ABOUTME: Configuration module for environment-based server settings
// ABOUTME: Re-exports the environment configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server configuration

pub mod environment;

pub use environment::{DateMatchMode, NominatimConfig, ScraperConfig, ServerConfig, StravaApiConfig};
