//! Default command: the full-screen sign-in screen.

use anyhow::Result;
use ballot_core::config::Config;

#[cfg(feature = "tui")]
pub async fn run(config: &Config, api_url: Option<&str>) -> Result<()> {
    use std::sync::Arc;

    use ballot_core::api::{HttpVoterApi, VoterApi};
    use ballot_core::auth::AdminVerifier;

    let api: Arc<dyn VoterApi> = Arc::new(HttpVoterApi::from_config(config, api_url)?);
    let verifier: Arc<dyn AdminVerifier> = Arc::new(config.admin_directory());

    if let Some(session) = ballot_tui::run_login(config, api, verifier).await? {
        super::print_session(&session, false)?;
    }
    Ok(())
}

#[cfg(not(feature = "tui"))]
pub async fn run(_config: &Config, _api_url: Option<&str>) -> Result<()> {
    anyhow::bail!(
        "Built without the `tui` feature; use `ballot login`, `ballot register` or `ballot admin`."
    )
}
