// ABOUTME: Integration tests for the leaderboard table parser
// ABOUTME: Covers header-driven schema, malformed-row drops, and absent-value handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{page_with_rows, standard_page, RowFixture, STANDARD_COLUMNS};
use strava_mcp_server::scraper::parse_leaderboard;

#[test]
fn header_only_page_yields_no_entries() {
    common::init_test_logging();
    let html = page_with_rows(STANDARD_COLUMNS, &[]);
    assert!(parse_leaderboard(&html).is_empty());
}

#[test]
fn page_without_table_yields_no_entries() {
    assert!(parse_leaderboard("<html><body><p>nothing here</p></body></html>").is_empty());
    assert!(parse_leaderboard("").is_empty());
}

#[test]
fn complete_row_is_fully_populated() {
    let html = standard_page(&[RowFixture::complete("Aug 5, 2026")]);
    let entries = parse_leaderboard(&html);
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.rank, 1);
    assert_eq!(entry.athlete_name, "Jane Climber");
    assert_eq!(entry.athlete_id, "12345");
    assert_eq!(entry.date, "Aug 5, 2026");
    assert_eq!(entry.effort_id, "987654");
    assert_eq!(entry.speed_kmh, Some(32.4));
    assert_eq!(entry.heart_rate_bpm, Some(165.0));
    assert_eq!(entry.power_watts, Some(280.0));
    assert_eq!(entry.vam, None);
    assert_eq!(entry.time, "4:31");
}

#[test]
fn short_rows_are_dropped() {
    let rows = vec![
        "<tr><td>1</td><td>partial</td></tr>".to_owned(),
        "<tr><td>2</td><td><a href=\"/athletes/7\">Bo</a></td>\
         <td><a href=\"/segment_efforts/8\">Aug 6, 2026</a></td>\
         <td>30 km/h</td><td>150 bpm</td><td>250 W</td><td>5:00</td></tr>"
            .to_owned(),
    ];
    let html = page_with_rows(STANDARD_COLUMNS, &rows);
    let entries = parse_leaderboard(&html);
    // Output length is bounded by the candidate row count, minus the short row.
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].athlete_name, "Bo");
}

#[test]
fn styled_rows_are_not_candidates() {
    let styled = "<tr class=\"promo\"><td>x</td><td>y</td><td>z</td><td>a</td><td>b</td><td>c</td><td>d</td></tr>".to_owned();
    let html = page_with_rows(STANDARD_COLUMNS, &[styled]);
    assert!(parse_leaderboard(&html).is_empty());
}

#[test]
fn placeholder_dash_power_is_absent_not_zero() {
    let mut row = RowFixture::complete("Aug 5, 2026");
    row.power = "-";
    let html = standard_page(&[row]);
    let entries = parse_leaderboard(&html);
    assert_eq!(entries[0].power_watts, None);
}

#[test]
fn unparsable_numbers_become_absent() {
    let mut row = RowFixture::complete("Aug 5, 2026");
    row.speed = "fast";
    row.heart_rate = "";
    let html = standard_page(&[row]);
    let entries = parse_leaderboard(&html);
    assert_eq!(entries[0].speed_kmh, None);
    assert_eq!(entries[0].heart_rate_bpm, None);
}

#[test]
fn missing_athlete_link_yields_empty_strings() {
    let mut row = RowFixture::complete("Aug 5, 2026");
    row.athlete = None;
    let html = standard_page(&[row]);
    let entries = parse_leaderboard(&html);
    assert_eq!(entries[0].athlete_name, "");
    assert_eq!(entries[0].athlete_id, "");
}

#[test]
fn missing_effort_link_yields_empty_date_and_effort_id() {
    let mut row = RowFixture::complete("Aug 5, 2026");
    row.effort = None;
    let html = standard_page(&[row]);
    let entries = parse_leaderboard(&html);
    assert_eq!(entries[0].date, "");
    assert_eq!(entries[0].effort_id, "");
}

#[test]
fn vam_column_is_read_by_header_position() {
    let columns = ["Rank", "Athlete", "Date", "Speed", "HR", "Power", "VAM", "Time"];
    let row = "<tr><td>1</td>\
               <td><a href=\"/athletes/12345\">Jane Climber</a></td>\
               <td><a href=\"/segment_efforts/987654\">Aug 5, 2026</a></td>\
               <td>32.4 km/h</td><td>165 bpm</td><td>280 W</td>\
               <td>1450</td><td>4:31</td></tr>"
        .to_owned();
    let html = page_with_rows(&columns, &[row]);
    let entries = parse_leaderboard(&html);
    assert_eq!(entries[0].vam, Some(1450.0));
    // Time still comes from the last header-indexed cell.
    assert_eq!(entries[0].time, "4:31");
}

#[test]
fn time_is_taken_from_last_column_even_when_mislabeled() {
    let columns = ["Rank", "Athlete", "Date", "Speed", "HR", "Power", "Result"];
    let row = "<tr><td>1</td>\
               <td><a href=\"/athletes/12345\">Jane Climber</a></td>\
               <td><a href=\"/segment_efforts/987654\">Aug 5, 2026</a></td>\
               <td>32.4 km/h</td><td>165 bpm</td><td>280 W</td><td>4:31</td></tr>"
        .to_owned();
    let html = page_with_rows(&columns, &[row]);
    assert_eq!(parse_leaderboard(&html)[0].time, "4:31");
}

#[test]
fn row_order_is_preserved() {
    let mut first = RowFixture::complete("Aug 1, 2026");
    first.rank = "1";
    let mut second = RowFixture::complete("Aug 2, 2026");
    second.rank = "2";
    let mut third = RowFixture::complete("Aug 3, 2026");
    third.rank = "3";
    let html = standard_page(&[first, second, third]);
    let ranks: Vec<u32> = parse_leaderboard(&html).iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn parsing_is_idempotent() {
    let html = standard_page(&[
        RowFixture::complete("Aug 5, 2026"),
        RowFixture::complete("Jul 2, 2026"),
    ]);
    assert_eq!(parse_leaderboard(&html), parse_leaderboard(&html));
}
