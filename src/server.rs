// src/server.rs

//! HTTP surface. Handlers are thin: resolve the franchise, fetch and parse
//! the upstream page(s), normalize rows, optionally reshape, serialize.
//! All request data is built and dropped within the request; the team table
//! is the only cross-request state and it is read-only.

use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::nbapi;
use crate::normalize::{self, NormalizedGame};
use crate::params::DEFAULT_TEAM;
use crate::specs::{schedule, standings};
use crate::teams::{self, TeamInfo};

#[derive(Deserialize)]
pub struct ScheduleQuery {
    nbapiformat: Option<String>,
}

impl ScheduleQuery {
    // Plain string compare; anything but "true" means unset.
    fn reshape(&self) -> bool {
        self.nbapiformat.as_deref() == Some("true")
    }
}

#[derive(Serialize)]
pub struct SchedulePayload {
    pub upcoming_schedule: Vec<NormalizedGame>,
}

pub fn router() -> Router {
    Router::new()
        .route("/lakers-schedule", get(default_schedule))
        .route("/schedule/:team", get(team_schedule))
}

async fn default_schedule(Query(q): Query<ScheduleQuery>) -> Result<Response, Error> {
    let team = resolve_team(DEFAULT_TEAM)?;
    let games = scrape_schedule(team).await?;
    Ok(respond(games, team, &HashMap::new(), q.reshape()))
}

/// Variant route: any franchise by acronym, with win–loss records scraped
/// from the standings page before the schedule is built.
async fn team_schedule(
    Path(team): Path<String>,
    Query(q): Query<ScheduleQuery>,
) -> Result<Response, Error> {
    let team = resolve_team(&team)?;
    let records = standings::fetch().await?;
    let games = scrape_schedule(team).await?;
    Ok(respond(games, team, &records, q.reshape()))
}

fn resolve_team(acronym: &str) -> Result<&'static TeamInfo, Error> {
    teams::by_acronym(acronym).ok_or_else(|| Error::UnknownTeam(s!(acronym)))
}

async fn scrape_schedule(team: &'static TeamInfo) -> Result<Vec<NormalizedGame>, Error> {
    let rows = schedule::fetch(team).await?;
    let today = normalize::today_eastern();
    let games: Vec<NormalizedGame> = rows
        .iter()
        .map(|r| normalize::normalize_row(r, today))
        .collect::<Result<_, _>>()?;
    tracing::info!(team = team.acronym, games = games.len(), "built schedule");
    Ok(games)
}

fn respond(
    games: Vec<NormalizedGame>,
    team: &'static TeamInfo,
    records: &HashMap<String, String>,
    reshape: bool,
) -> Response {
    if reshape {
        Json(nbapi::to_nba_api(&games, team, records)).into_response()
    } else {
        Json(SchedulePayload {
            upcoming_schedule: games,
        })
        .into_response()
    }
}
