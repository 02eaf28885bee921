// ABOUTME: Attempt aggregation over parsed leaderboard entries
// ABOUTME: Rolling month and year-to-date counts against an injected reference instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attempt aggregator
//!
//! Reduces a parsed entry sequence to two counts: attempts in the current
//! calendar month and attempts since the start of the current calendar year,
//! both relative to an injected `now` (never the wall clock; tests pin it).
//!
//! The default [`DateMatchMode::Substring`] reproduces the source behavior:
//! an entry counts when its free-text date contains the abbreviated month
//! name or the four-digit year of `now`. That overcounts when those strings
//! appear in the date text for unrelated reasons; the opt-in
//! [`DateMatchMode::CalendarRange`] parses the date and compares real
//! calendar fields instead.

use crate::config::DateMatchMode;
use crate::models::{AttemptCounts, LeaderboardEntry};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Date renderings observed on leaderboard pages
const DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d", "%d %b %Y"];

/// Count attempts in the current month and since the start of the year,
/// relative to `now`. An empty entry sequence yields zero counts; "no data"
/// and "legitimately zero" are indistinguishable here.
#[must_use]
pub fn count_attempts(
    entries: &[LeaderboardEntry],
    now: DateTime<Utc>,
    mode: DateMatchMode,
) -> AttemptCounts {
    match mode {
        DateMatchMode::Substring => count_by_substring(entries, now),
        DateMatchMode::CalendarRange => count_by_calendar(entries, now),
    }
}

fn count_by_substring(entries: &[LeaderboardEntry], now: DateTime<Utc>) -> AttemptCounts {
    // Fixed English locale, matching the source page's month rendering.
    let month_abbr = now.format("%b").to_string();
    let year = now.format("%Y").to_string();

    let last_month_attempts = entries
        .iter()
        .filter(|entry| entry.date.contains(&month_abbr))
        .count() as u32;
    let year_to_date_attempts = entries
        .iter()
        .filter(|entry| entry.date.contains(&year))
        .count() as u32;

    AttemptCounts {
        last_month_attempts,
        year_to_date_attempts,
    }
}

fn count_by_calendar(entries: &[LeaderboardEntry], now: DateTime<Utc>) -> AttemptCounts {
    let mut last_month_attempts = 0;
    let mut year_to_date_attempts = 0;

    for entry in entries {
        let Some(date) = parse_entry_date(&entry.date) else {
            continue;
        };
        if date.year() == now.year() {
            year_to_date_attempts += 1;
            if date.month() == now.month() {
                last_month_attempts += 1;
            }
        }
    }

    AttemptCounts {
        last_month_attempts,
        year_to_date_attempts,
    }
}

/// Try the known page date formats in order; `None` when nothing matches
fn parse_entry_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
