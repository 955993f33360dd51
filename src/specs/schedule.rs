// src/specs/schedule.rs

//! Scraping spec for the team schedule page.
//!
//! The results live in the single `<tbody class="Table__TBODY">` block. Two
//! header-styled rows precede the data: the first is a decorative section
//! label, the second carries the column names (DATE, OPPONENT, TIME, TV,
//! tickets). That off-by-one convention is the page's contract and is
//! preserved exactly; rows seen before both header rows are ignored.

use crate::core::html::{class_tokens, next_tag_block_ci, opener, opener_has_class, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::error::Error;
use crate::params::{
    HEADER_ROW_CLASS, NETWORK_MARKER_PREFIX, SCHEDULE_URL_BASE, TABLE_BODY_CLASS,
};
use crate::teams::TeamInfo;

/// One data row, cells aligned to the header row's column labels.
pub struct RawRow {
    pub cols: Vec<(String, String)>,
    /// `network-*` class tokens lifted from `<figure>` icons in the TV
    /// cell; consulted by the normalizer when the cell text is empty.
    pub tv_markers: Vec<String>,
}

impl RawRow {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.cols
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

pub async fn fetch(team: &TeamInfo) -> Result<Vec<RawRow>, Error> {
    let url = format!("{}{}", SCHEDULE_URL_BASE, team.espn);
    let doc = net::http_get(&url).await?;
    let t = std::time::Instant::now();
    let rows = parse_doc(&doc)?;
    tracing::debug!(team = team.acronym, rows = rows.len(), elapsed = ?t.elapsed(), "parsed schedule page");
    Ok(rows)
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> Result<Vec<RawRow>, Error> {
    let tbody = find_results_tbody(doc).ok_or(Error::MissingTable)?;

    let mut labels: Vec<String> = Vec::new();
    let mut decorative_header_seen = false;
    let mut out: Vec<RawRow> = Vec::new();

    let mut tr_pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(tbody, "<tr", "</tr>", tr_pos) {
        let tr = &tbody[tr_s..tr_e];
        tr_pos = tr_e;

        let tds = td_blocks(tr);

        if labels.is_empty() {
            let is_header = tds
                .first()
                .map(|td| opener_has_class(td, HEADER_ROW_CLASS))
                .unwrap_or(false);
            if is_header {
                if !decorative_header_seen {
                    decorative_header_seen = true;
                } else {
                    labels = tds.iter().map(|td| cell_text(td)).collect();
                }
            }
            continue;
        }

        // Data row: positional alignment, extra cells dropped.
        let cols: Vec<(String, String)> = labels
            .iter()
            .cloned()
            .zip(tds.iter().map(|td| cell_text(td)))
            .collect();

        let tv_markers = match labels.iter().position(|l| l == "TV") {
            Some(i) => tds.get(i).map(|td| network_markers(td)).unwrap_or_default(),
            None => Vec::new(),
        };

        out.push(RawRow { cols, tv_markers });
    }

    Ok(out)
}

fn find_results_tbody(doc: &str) -> Option<&str> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<tbody", "</tbody>", pos) {
        let block = &doc[s..e];
        if opener_has_class(block, TABLE_BODY_CLASS) {
            return Some(block);
        }
        pos = e;
    }
    None
}

fn td_blocks(tr: &str) -> Vec<&str> {
    let mut tds: Vec<&str> = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        tds.push(&tr[s..e]);
        pos = e;
    }
    tds
}

fn cell_text(td: &str) -> String {
    strip_tags(normalize_entities(td))
}

/// First `network-*` class token of each `<figure>` icon in the cell.
/// Figures without one carry no network information and are skipped.
fn network_markers(td: &str) -> Vec<String> {
    let mut markers: Vec<String> = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(td, "<figure", "</figure>", pos) {
        let fig = &td[s..e];
        if let Some(tok) = class_tokens(opener(fig))
            .into_iter()
            .find(|t| t.starts_with(NETWORK_MARKER_PREFIX))
        {
            markers.push(s!(tok));
        }
        pos = e;
    }
    markers
}
