// ABOUTME: Leaderboard scraping subsystem: fetch, parse, aggregate
// ABOUTME: The only component extracting data without help from a documented API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leaderboard scraping
//!
//! Strava's public API exposes no leaderboard history, so attempt counts come
//! from the segment page itself: [`fetch`] retrieves the year-scoped
//! leaderboard markup, [`parse`] turns the table into ordered
//! [`crate::models::LeaderboardEntry`] records, and [`attempts`] reduces them
//! to rolling counts against an injected reference instant.

pub mod attempts;
pub mod fetch;
pub mod parse;

pub use attempts::count_attempts;
pub use fetch::LeaderboardFetcher;
pub use parse::parse_leaderboard;
