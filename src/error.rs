// src/error.rs

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Upstream answered with a non-200 status.
    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("schedule table not found in page")]
    MissingTable,

    #[error("row is missing the {0} column")]
    MissingColumn(&'static str),

    #[error("unparseable date/time: {0:?}")]
    BadDateTime(String),

    #[error("unknown team: {0:?}")]
    UnknownTeam(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            // Mirror the upstream status on the response.
            Error::UpstreamStatus(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::UnknownTeam(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = match &self {
            Error::UpstreamStatus(_) => s!("Failed to fetch schedule"),
            other => other.to_string(),
        };
        (status, Json(json!({ "error": msg }))).into_response()
    }
}
