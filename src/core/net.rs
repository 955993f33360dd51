// src/core/net.rs

// Single upstream GET with browser-like headers. No retries, no timeout
// override; a stalled upstream stalls the request being served.

use reqwest::header;

use crate::error::Error;
use crate::params;

pub async fn http_get(url: &str) -> Result<String, Error> {
    let resp = reqwest::Client::new()
        .get(url)
        .header(header::USER_AGENT, params::USER_AGENT)
        .header(header::ACCEPT, params::ACCEPT)
        .header(header::ACCEPT_LANGUAGE, params::ACCEPT_LANGUAGE)
        .header(header::CONNECTION, "keep-alive")
        .send()
        .await?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(Error::UpstreamStatus(status.as_u16()));
    }
    Ok(resp.text().await?)
}
