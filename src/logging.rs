// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Routes all tracing output to stderr so stdout stays a clean JSON-RPC channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging setup
//!
//! The stdio transport owns stdout, so every log line goes to stderr.
//! `RUST_LOG` controls the filter; `LOG_FORMAT=compact` switches off the
//! default pretty formatting.

use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Read the format from `LOG_FORMAT`, defaulting to pretty
    #[must_use]
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT").as_deref() {
            Ok("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Initialize the global tracing subscriber from environment variables.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    match LogFormat::from_env() {
        LogFormat::Compact => builder
            .compact()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
        LogFormat::Pretty => builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
    }

    Ok(())
}
