// src/nbapi.rs

//! Reshape a normalized schedule into the NBA stats API scoreboard schema:
//! short cryptic keys, a `gscd` envelope for the serving team, one object
//! per game with nested home (`h`) / visitor (`v`) team sub-objects. Field
//! names and order mirror the external schema, not this crate's taste.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::normalize::NormalizedGame;
use crate::teams::{self, TeamInfo};

/// Synthetic game-id prefix; the suffix is the 1-based schedule position.
const GID_PREFIX: &str = "00125000";

#[derive(Serialize)]
pub struct Scoreboard {
    pub gscd: ScheduleEnvelope,
}

#[derive(Serialize)]
pub struct ScheduleEnvelope {
    pub tid: i64,
    pub g: Vec<Game>,
    pub ta: String,
    pub tn: String,
    pub tc: String,
}

#[derive(Serialize)]
pub struct Game {
    pub gid: String,
    pub gcode: String,
    pub seri: String,
    pub is: u8,
    pub gdte: String,
    pub htm: String,
    pub vtm: String,
    pub etm: String,
    pub an: String,
    pub ac: String,
    pub r#as: String,
    pub st: String,
    pub stt: String,
    pub bd: Broadcast,
    pub v: Side,
    pub h: Side,
    pub gdtutc: String,
    pub utctm: String,
    pub ppdst: String,
}

#[derive(Serialize)]
pub struct Broadcast {
    pub b: Vec<serde_json::Value>,
}

#[derive(Serialize)]
pub struct Side {
    /// League team id; the unresolved-opponent stub serializes it as `""`.
    #[serde(serialize_with = "ser_tid")]
    pub tid: Option<i64>,
    pub re: String,
    pub ta: String,
    pub tn: String,
    pub tc: String,
    pub s: String,
}

fn ser_tid<S: Serializer>(tid: &Option<i64>, s: S) -> Result<S::Ok, S::Error> {
    match tid {
        Some(id) => s.serialize_i64(*id),
        None => s.serialize_str(""),
    }
}

impl Side {
    fn known(team: &TeamInfo, records: &HashMap<String, String>) -> Self {
        Side {
            tid: Some(team.tid),
            re: records.get(team.acronym).cloned().unwrap_or_default(),
            ta: s!(team.acronym),
            tn: s!(team.nickname),
            tc: s!(team.city),
            s: s!(),
        }
    }

    fn stub(city: &str) -> Self {
        Side {
            tid: None,
            re: s!(),
            ta: s!(),
            tn: s!(),
            tc: s!(city),
            s: s!(),
        }
    }
}

pub fn to_nba_api(
    games: &[NormalizedGame],
    team: &'static TeamInfo,
    records: &HashMap<String, String>,
) -> Scoreboard {
    let g = games
        .iter()
        .enumerate()
        .map(|(i, game)| build_game(i, game, team, records))
        .collect();

    Scoreboard {
        gscd: ScheduleEnvelope {
            tid: team.tid,
            g,
            ta: s!(team.acronym),
            tn: s!(team.nickname),
            tc: s!(team.city),
        },
    }
}

fn build_game(
    i: usize,
    game: &NormalizedGame,
    team: &'static TeamInfo,
    records: &HashMap<String, String>,
) -> Game {
    let gdte = game.date_time_utc.format("%Y-%m-%d").to_string();
    let utctm = game.date_time_utc.format("%H:%M").to_string();
    let etm = game.date_time_utc.format("%Y-%m-%dT%H:%M:%S").to_string();

    let gid = format!("{}{:02}", GID_PREFIX, i + 1);
    let gcode = if game.opponent_city.is_empty() {
        s!()
    } else {
        let opp3: String = game
            .opponent_city
            .chars()
            .take(3)
            .collect::<String>()
            .to_uppercase();
        format!("{}/{}{}", gdte.replace('-', ""), team.acronym, opp3)
    };

    let serving = Side::known(team, records);
    let opponent = match teams::by_city(&game.opponent_city) {
        Some(t) => Side::known(t, records),
        None => Side::stub(&game.opponent_city),
    };

    let (h, v) = if game.is_home {
        (serving, opponent)
    } else {
        (opponent, serving)
    };

    Game {
        gid,
        gcode,
        seri: s!(),
        is: game.is_home as u8,
        gdte: gdte.clone(),
        htm: etm.clone(),
        vtm: etm.clone(),
        etm,
        an: s!(),
        ac: s!(),
        r#as: s!(),
        st: s!(),
        stt: s!(),
        bd: Broadcast { b: Vec::new() },
        v,
        h,
        gdtutc: gdte,
        utctm,
        ppdst: s!(),
    }
}
