// ABOUTME: Leaderboard HTML table parser producing typed entry records
// ABOUTME: Header-driven schema with fixed cell positions and silent malformed-row drops
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leaderboard table parser
//!
//! The page's `<th>` cells define the column schema. Body rows are the `<tr>`
//! elements carrying no class attribute (header and marker rows are styled);
//! this selector mirrors the observed page structure and is a compatibility
//! contract with the site. A row is kept only when it has at least as many
//! cells as there are header columns; anything shorter is dropped without
//! comment. Fixed cell positions: rank, athlete link, effort link, speed,
//! heart rate, power. VAM is looked up by header name when present. The last
//! header-indexed cell is always elapsed time, whatever its label says.
//!
//! The parser never fails: unparsable markup simply yields fewer (or zero)
//! entries.

use crate::models::LeaderboardEntry;
use scraper::{ElementRef, Html, Selector};

/// Parse leaderboard markup into ordered entry records.
///
/// Returns an empty vec when the structural markers (header cells, body rows)
/// are absent. Row order from the page is preserved.
#[must_use]
pub fn parse_leaderboard(html: &str) -> Vec<LeaderboardEntry> {
    let (Ok(th_sel), Ok(tr_sel), Ok(td_sel), Ok(a_sel)) = (
        Selector::parse("th"),
        Selector::parse("tr"),
        Selector::parse("td"),
        Selector::parse("a"),
    ) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);

    let column_names: Vec<String> = document.select(&th_sel).map(|th| cell_text(&th)).collect();
    if column_names.is_empty() {
        return Vec::new();
    }
    let vam_index = column_names.iter().position(|name| name == "VAM");
    let time_index = column_names.len() - 1;

    let mut entries = Vec::new();
    for row in document.select(&tr_sel) {
        // Styled rows are headers or special markers, never attempt records.
        if row
            .value()
            .attr("class")
            .is_some_and(|class| !class.trim().is_empty())
        {
            continue;
        }

        let cells: Vec<ElementRef<'_>> = row.select(&td_sel).collect();
        if cells.len() < column_names.len() {
            continue;
        }

        let athlete_link = cells.get(1).and_then(|cell| cell.select(&a_sel).next());
        let effort_link = cells.get(2).and_then(|cell| cell.select(&a_sel).next());

        let rank = cells
            .first()
            .and_then(|cell| cell_text(cell).parse::<u32>().ok())
            .unwrap_or(entries.len() as u32 + 1);

        entries.push(LeaderboardEntry {
            rank,
            athlete_name: athlete_link.map(|a| cell_text(&a)).unwrap_or_default(),
            athlete_id: athlete_link.map(link_id).unwrap_or_default(),
            date: effort_link.map(|a| cell_text(&a)).unwrap_or_default(),
            effort_id: effort_link.map(link_id).unwrap_or_default(),
            speed_kmh: numeric_cell(cells.get(3), &[" km/h"]),
            heart_rate_bpm: numeric_cell(cells.get(4), &[" bpm"]),
            power_watts: numeric_cell(cells.get(5), &[" W", "-"]),
            vam: vam_index.and_then(|idx| numeric_cell(cells.get(idx), &[])),
            time: cells.get(time_index).map(cell_text).unwrap_or_default(),
        });
    }

    entries
}

/// Concatenated, whitespace-stripped text of an element's text nodes
fn cell_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Last path segment of a link's href, used for athlete and effort ids
fn link_id(link: ElementRef<'_>) -> String {
    link.value()
        .attr("href")
        .and_then(|href| href.split('/').next_back())
        .unwrap_or_default()
        .to_owned()
}

/// Numeric value of a cell after stripping fixed unit suffixes and
/// placeholder dashes. Anything that still fails to parse is absent, not
/// zero.
fn numeric_cell(cell: Option<&ElementRef<'_>>, strip: &[&str]) -> Option<f64> {
    let cell = cell?;
    let mut text = cell_text(cell);
    for pattern in strip {
        text = text.replace(pattern, "");
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
