//! `ballot health`: probe the backend.

use anyhow::{Context, Result};
use ballot_core::api::{HttpVoterApi, VoterApi};
use ballot_core::config::Config;

pub async fn run(config: &Config, api_url: Option<&str>) -> Result<()> {
    let api = HttpVoterApi::from_config(config, api_url)?;
    let health = api
        .health()
        .await
        .with_context(|| format!("backend at {} is not reachable", api.base_url()))?;
    println!("{}: {}", api.base_url(), health.status);
    Ok(())
}
