// ABOUTME: Integration tests for attempt aggregation with an injected clock
// ABOUTME: Covers substring matching, calendar-range matching, and the regression fixture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::page_with_dates;
use strava_mcp_server::config::DateMatchMode;
use strava_mcp_server::models::AttemptCounts;
use strava_mcp_server::scraper::{count_attempts, parse_leaderboard};

fn mid_august_2026() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap()
}

#[test]
fn empty_entries_yield_zero_counts() {
    let counts = count_attempts(&[], mid_august_2026(), DateMatchMode::Substring);
    assert_eq!(counts, AttemptCounts::zero());
}

#[test]
fn single_entry_matching_month_and_year_counts_once_in_both() {
    let html = page_with_dates(&["Aug 5, 2026"]);
    let entries = parse_leaderboard(&html);
    let counts = count_attempts(&entries, mid_august_2026(), DateMatchMode::Substring);
    assert_eq!(counts.last_month_attempts, 1);
    assert_eq!(counts.year_to_date_attempts, 1);
}

#[test]
fn entries_from_other_months_count_only_toward_the_year() {
    let html = page_with_dates(&["Aug 5, 2026", "Jul 2, 2026", "Mar 9, 2026"]);
    let entries = parse_leaderboard(&html);
    let counts = count_attempts(&entries, mid_august_2026(), DateMatchMode::Substring);
    assert_eq!(counts.last_month_attempts, 1);
    assert_eq!(counts.year_to_date_attempts, 3);
}

#[test]
fn substring_mode_overcounts_month_matches_from_other_years() {
    // The documented source behavior: "Aug 2, 2019" contains "Aug" and is
    // counted toward the current month even though the year differs.
    let html = page_with_dates(&["Aug 2, 2019"]);
    let entries = parse_leaderboard(&html);

    let substring = count_attempts(&entries, mid_august_2026(), DateMatchMode::Substring);
    assert_eq!(substring.last_month_attempts, 1);
    assert_eq!(substring.year_to_date_attempts, 0);

    let calendar = count_attempts(&entries, mid_august_2026(), DateMatchMode::CalendarRange);
    assert_eq!(calendar.last_month_attempts, 0);
    assert_eq!(calendar.year_to_date_attempts, 0);
}

#[test]
fn calendar_mode_counts_by_real_month_and_year() {
    let html = page_with_dates(&["Aug 5, 2026", "August 12, 2026", "Jul 2, 2026", "Dec 31, 2025"]);
    let entries = parse_leaderboard(&html);
    let counts = count_attempts(&entries, mid_august_2026(), DateMatchMode::CalendarRange);
    assert_eq!(counts.last_month_attempts, 2);
    assert_eq!(counts.year_to_date_attempts, 3);
}

#[test]
fn calendar_mode_skips_unparsable_dates() {
    let html = page_with_dates(&["sometime in Aug 2026", "Aug 5, 2026"]);
    let entries = parse_leaderboard(&html);

    let calendar = count_attempts(&entries, mid_august_2026(), DateMatchMode::CalendarRange);
    assert_eq!(calendar.last_month_attempts, 1);
    assert_eq!(calendar.year_to_date_attempts, 1);

    // Substring mode happily counts the free-text date.
    let substring = count_attempts(&entries, mid_august_2026(), DateMatchMode::Substring);
    assert_eq!(substring.last_month_attempts, 2);
    assert_eq!(substring.year_to_date_attempts, 2);
}

#[test]
fn aggregation_uses_injected_clock_not_wall_clock() {
    let html = page_with_dates(&["Feb 1, 1999"]);
    let entries = parse_leaderboard(&html);
    let february_1999 = Utc.with_ymd_and_hms(1999, 2, 10, 0, 0, 0).unwrap();
    let counts = count_attempts(&entries, february_1999, DateMatchMode::Substring);
    assert_eq!(counts.last_month_attempts, 1);
    assert_eq!(counts.year_to_date_attempts, 1);
}

#[test]
fn segment_7037936_regression_fixture() {
    // Historical count pair for segment 7037936, pinned via fixture markup
    // and a fixed reference date: 5 attempts in the reference month, 6 since
    // the start of the reference year.
    common::init_test_logging();
    let html = page_with_dates(&[
        "Aug 2, 2026",
        "Aug 5, 2026",
        "Aug 9, 2026",
        "Aug 12, 2026",
        "Aug 14, 2026",
        "Mar 21, 2026",
    ]);
    let entries = parse_leaderboard(&html);
    assert_eq!(entries.len(), 6);

    let counts = count_attempts(&entries, mid_august_2026(), DateMatchMode::Substring);
    assert_eq!(counts.last_month_attempts, 5);
    assert_eq!(counts.year_to_date_attempts, 6);
}
