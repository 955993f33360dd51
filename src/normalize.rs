// src/normalize.rs

//! Row normalization.
//!
//! Pure per-row pipeline from aligned cell text to a [`NormalizedGame`]:
//! network-marker resolution, channel canonicalization, year roll-forward,
//! Eastern→UTC conversion, home/away split. No markup traversal and no
//! networking; callers hand in a [`RawRow`] and a reference `today` date.
//!
//! The channel strings and the first-token opponent rule reproduce the
//! upstream consumers' expectations exactly, trailing spaces included.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::US::Eastern;
use serde::Serialize;

use crate::error::Error;
use crate::params::NETWORK_MARKER_PREFIX;
use crate::specs::schedule::RawRow;

/// Broadcast slot for one game. The serialized forms are a fixed external
/// vocabulary; `Abc`/`Espn`/`Nbc` carry a trailing space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Channel {
    #[serde(rename = "ABC ")]
    Abc,
    #[serde(rename = "ESPN ")]
    Espn,
    #[serde(rename = "NBC ")]
    Nbc,
    Peacock,
    #[serde(rename = "Prime Video")]
    PrimeVideo,
    #[serde(rename = "NBA TV")]
    NbaTv,
    #[serde(rename = "League Pass")]
    LeaguePass,
}

impl Channel {
    /// First match wins; case-sensitive substring tests, then the two exact
    /// pass-throughs, then the exhaustive default. Total over any input.
    pub fn resolve(tv: &str) -> Channel {
        if tv.contains("ABC") {
            Channel::Abc
        } else if tv.contains("ESPN") {
            Channel::Espn
        } else if tv.contains("NBC") {
            Channel::Nbc
        } else if tv.contains("Peacock") {
            Channel::Peacock
        } else if tv == "Prime Video" {
            Channel::PrimeVideo
        } else if tv == "NBA TV" {
            Channel::NbaTv
        } else {
            Channel::LeaguePass
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Abc => "ABC ",
            Channel::Espn => "ESPN ",
            Channel::Nbc => "NBC ",
            Channel::Peacock => "Peacock",
            Channel::PrimeVideo => "Prime Video",
            Channel::NbaTv => "NBA TV",
            Channel::LeaguePass => "League Pass",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalizedGame {
    pub opponent_city: String,
    pub is_home: bool,
    #[serde(serialize_with = "ser_utc_stamp")]
    pub date_time_utc: DateTime<Utc>,
    pub channel: Channel,
}

pub const UTC_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

fn ser_utc_stamp<S: serde::Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&dt.format(UTC_STAMP_FORMAT).to_string())
}

/// Nationally televised games often ship an empty TV cell with the network
/// riding in on `network-<code>` icon classes; strip the marker prefix,
/// uppercase, and append each code. Non-empty cell text wins as-is.
pub fn resolve_network(text: &str, markers: &[String]) -> String {
    if !text.is_empty() {
        return s!(text);
    }
    let mut tv = s!();
    for m in markers {
        if let Some(code) = m.strip_prefix(NETWORK_MARKER_PREFIX) {
            tv.push_str(&code.to_uppercase());
        }
    }
    tv
}

/// Resolve a year-less schedule date against `today`'s year; a date already
/// in the past belongs to next season's calendar year. Renders `%m/%d/%Y`.
///
/// The printed weekday reflects the year the site meant, not necessarily
/// `today`'s year, so it is dropped rather than validated.
pub fn convert_date(date_str: &str, today: NaiveDate) -> Result<String, Error> {
    let month_day = match date_str.split_once(',') {
        Some((_weekday, rest)) => rest.trim(),
        None => date_str.trim(),
    };
    let with_year = format!("{} {}", month_day, today.year());
    let candidate = NaiveDate::parse_from_str(&with_year, "%b %d %Y")
        .map_err(|_| Error::BadDateTime(s!(date_str)))?;

    let resolved = if candidate < today {
        candidate
            .with_year(today.year() + 1)
            .ok_or_else(|| Error::BadDateTime(s!(date_str)))?
    } else {
        candidate
    };
    Ok(resolved.format("%m/%d/%Y").to_string())
}

/// Combine a resolved `%m/%d/%Y` date with an `%I:%M %p` time, localize as
/// US Eastern, and convert to UTC. The offset follows the tz database for
/// the resolved date, so winter and summer games convert differently.
pub fn convert_to_utc(date_str: &str, time_str: &str) -> Result<DateTime<Utc>, Error> {
    let stamp = format!("{} {}", date_str, time_str);
    let local = NaiveDateTime::parse_from_str(&stamp, "%m/%d/%Y %I:%M %p")
        .map_err(|_| Error::BadDateTime(stamp.clone()))?;
    Eastern
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(Error::BadDateTime(stamp))
}

/// Today in US Eastern, the reference date for the year roll-forward.
pub fn today_eastern() -> NaiveDate {
    Utc::now().with_timezone(&Eastern).date_naive()
}

pub fn normalize_row(row: &RawRow, today: NaiveDate) -> Result<NormalizedGame, Error> {
    let tv_text = row.get("TV").ok_or(Error::MissingColumn("TV"))?;
    let channel = Channel::resolve(&resolve_network(tv_text, &row.tv_markers));

    let date_str = row.get("DATE").ok_or(Error::MissingColumn("DATE"))?;
    let date = convert_date(date_str, today)?;

    let time_str = row.get("TIME").ok_or(Error::MissingColumn("TIME"))?;
    let date_time_utc = convert_to_utc(&date, time_str)?;

    let opponent = row.get("OPPONENT").ok_or(Error::MissingColumn("OPPONENT"))?;
    let is_home = !opponent.starts_with('@');
    // First token is the venue marker ("@" or "vs"); drop it either way.
    let opponent_city = opponent.split(' ').skip(1).collect::<Vec<_>>().join(" ");

    Ok(NormalizedGame {
        opponent_city,
        is_home,
        date_time_utc,
        channel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(date: &str, time: &str, opponent: &str, tv: &str, markers: &[&str]) -> RawRow {
        RawRow {
            cols: vec![
                (s!("DATE"), s!(date)),
                (s!("OPPONENT"), s!(opponent)),
                (s!("TIME"), s!(time)),
                (s!("TV"), s!(tv)),
                (s!("tickets"), s!("Tickets as low as $37")),
            ],
            tv_markers: markers.iter().map(|m| s!(*m)).collect(),
        }
    }

    #[test]
    fn future_date_keeps_current_year() {
        // Dec 31 has not passed on Jan 15, no roll.
        assert_eq!(
            convert_date("Wed, Dec 31", day(2025, 1, 15)).unwrap(),
            "12/31/2025"
        );
    }

    #[test]
    fn passed_date_rolls_forward_one_year() {
        assert_eq!(
            convert_date("Sat, Jan 10", day(2025, 11, 30)).unwrap(),
            "01/10/2026"
        );
        // Weekday printed for the rolled year parses fine against this year.
        assert_eq!(
            convert_date("Thu, Jan 15", day(2025, 12, 1)).unwrap(),
            "01/15/2026"
        );
    }

    #[test]
    fn bare_month_day_fallback() {
        assert_eq!(
            convert_date("Nov 21", day(2025, 10, 1)).unwrap(),
            "11/21/2025"
        );
    }

    #[test]
    fn garbage_date_is_an_error() {
        assert!(convert_date("sometime soon", day(2025, 10, 1)).is_err());
    }

    #[test]
    fn winter_games_convert_at_minus_five() {
        let utc = convert_to_utc("01/15/2026", "7:30 PM").unwrap();
        assert_eq!(
            utc.format(UTC_STAMP_FORMAT).to_string(),
            "2026-01-16 00:30:00 UTC"
        );
    }

    #[test]
    fn summer_games_convert_at_minus_four() {
        let utc = convert_to_utc("07/04/2026", "7:30 PM").unwrap();
        assert_eq!(
            utc.format(UTC_STAMP_FORMAT).to_string(),
            "2026-07-04 23:30:00 UTC"
        );
    }

    #[test]
    fn garbage_time_is_an_error() {
        assert!(convert_to_utc("01/15/2026", "tip-off-ish").is_err());
    }

    #[test]
    fn channel_cascade_first_match_wins() {
        assert_eq!(Channel::resolve("ESPN/ABC"), Channel::Abc);
        assert_eq!(Channel::resolve("ESPN2"), Channel::Espn);
        assert_eq!(Channel::resolve("NBC Sports"), Channel::Nbc);
        assert_eq!(Channel::resolve("Peacock"), Channel::Peacock);
        assert_eq!(Channel::resolve("Prime Video"), Channel::PrimeVideo);
        assert_eq!(Channel::resolve("NBA TV"), Channel::NbaTv);
        // Exact matches only for the pass-throughs.
        assert_eq!(Channel::resolve("Prime Video "), Channel::LeaguePass);
        assert_eq!(Channel::resolve(""), Channel::LeaguePass);
        assert_eq!(Channel::resolve("Spectrum SportsNet"), Channel::LeaguePass);
    }

    #[test]
    fn channel_resolution_is_idempotent_over_its_outputs() {
        for tv in [
            "ABC ",
            "ESPN ",
            "NBC ",
            "Peacock",
            "Prime Video",
            "NBA TV",
            "League Pass",
        ] {
            assert_eq!(Channel::resolve(tv).as_str(), tv);
        }
    }

    #[test]
    fn empty_tv_cell_resolves_from_icon_markers() {
        assert_eq!(resolve_network("", &[s!("network-espn")]), "ESPN");
        assert_eq!(
            resolve_network("", &[s!("network-nba-tv")]),
            "NBA-TV"
        );
        // Visible text wins over markers.
        assert_eq!(resolve_network("TNT", &[s!("network-espn")]), "TNT");
        assert_eq!(resolve_network("", &[]), "");
    }

    #[test]
    fn away_marker_sets_polarity_and_is_stripped() {
        let g = normalize_row(
            &row("Fri, Nov 21", "7:30 PM", "@ Boston Celtics", "TNT", &[]),
            day(2025, 10, 1),
        )
        .unwrap();
        assert!(!g.is_home);
        assert_eq!(g.opponent_city, "Boston Celtics");
    }

    #[test]
    fn home_marker_is_stripped_too() {
        let g = normalize_row(
            &row("Fri, Nov 21", "7:30 PM", "vs Miami", "", &[]),
            day(2025, 10, 1),
        )
        .unwrap();
        assert!(g.is_home);
        assert_eq!(g.opponent_city, "Miami");
        assert_eq!(g.channel, Channel::LeaguePass);
    }

    #[test]
    fn normalized_game_serializes_with_fixed_stamp() {
        let g = normalize_row(
            &row("Fri, Nov 21", "7:30 PM", "@ Boston", "", &["network-espn"]),
            day(2025, 10, 1),
        )
        .unwrap();
        let v = serde_json::to_value(&g).unwrap();
        assert_eq!(v["channel"], "ESPN ");
        assert_eq!(v["is_home"], false);
        assert_eq!(v["opponent_city"], "Boston");
        // Nov 21 is past the DST end, -05:00 applies.
        assert_eq!(v["date_time_utc"], "2025-11-22 00:30:00 UTC");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let mut r = row("Fri, Nov 21", "7:30 PM", "@ Boston", "", &[]);
        r.cols.retain(|(l, _)| l != "TIME");
        assert!(matches!(
            normalize_row(&r, day(2025, 10, 1)),
            Err(Error::MissingColumn("TIME"))
        ));
    }
}
