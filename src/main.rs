// src/main.rs

use std::env;

use tracing_subscriber::EnvFilter;

use nba_sched::params::DEFAULT_BIND;
use nba_sched::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nba_sched=info")),
        )
        .init();

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, server::router()).await?;
    Ok(())
}
