// src/specs/standings.rs

//! Scraping spec for the league standings page.
//!
//! The page renders each conference as a pair of tables: a left table of
//! team rows (with `/nba/team/_/name/<code>/…` links) and a stats table
//! whose rows lead with the win and loss counts. Both pairs appear in the
//! same document order, so team rows and stat rows are collected into two
//! queues and zipped. Resolution is best-effort per row; an unrecognized
//! layout yields an empty map rather than an error.

use std::collections::HashMap;

use crate::core::html::{attr_value, next_tag_block_ci, opener, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::error::Error;
use crate::params::{STANDINGS_URL, TEAM_LINK_PREFIX};
use crate::teams;

/// Win–loss record strings keyed by league acronym, e.g. `"BOS" → "64-18"`.
pub async fn fetch() -> Result<HashMap<String, String>, Error> {
    let doc = net::http_get(STANDINGS_URL).await?;
    let t = std::time::Instant::now();
    let records = parse_doc(&doc);
    tracing::debug!(records = records.len(), elapsed = ?t.elapsed(), "parsed standings page");
    Ok(records)
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> HashMap<String, String> {
    let mut codes: Vec<String> = Vec::new();
    let mut recs: Vec<String> = Vec::new();

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        pos = tr_e;

        if let Some(code) = team_link_code(tr) {
            codes.push(code);
        } else if let Some((w, l)) = leading_win_loss(tr) {
            recs.push(format!("{}-{}", w, l));
        }
    }

    codes
        .iter()
        .zip(recs)
        .filter_map(|(code, re)| teams::by_espn_code(code).map(|t| (s!(t.acronym), re)))
        .collect()
}

/// Site team code from the first team link in the row.
fn team_link_code(tr: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((a_s, a_e)) = next_tag_block_ci(tr, "<a", "</a>", pos) {
        let a_open = opener(&tr[a_s..a_e]);
        pos = a_e;
        let Some(href) = attr_value(a_open, "href") else {
            continue;
        };
        if let Some(idx) = href.find(TEAM_LINK_PREFIX) {
            let tail = &href[idx + TEAM_LINK_PREFIX.len()..];
            let code: String = tail
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect();
            if !code.is_empty() {
                return Some(code);
            }
        }
    }
    None
}

/// Wins and losses when the row's first two cells are plain integers.
fn leading_win_loss(tr: &str) -> Option<(u32, u32)> {
    let mut cells: Vec<String> = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        cells.push(strip_tags(normalize_entities(&tr[td_s..td_e])));
        pos = td_e;
        if cells.len() == 2 {
            break;
        }
    }
    let w: u32 = cells.first()?.parse().ok()?;
    let l: u32 = cells.get(1)?.parse().ok()?;
    Some((w, l))
}
