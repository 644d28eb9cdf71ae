//! `ballot login`: voter sign-in without the full-screen UI.

use anyhow::Result;
use ballot_core::api::HttpVoterApi;
use ballot_core::config::Config;
use ballot_core::login::{self, LoginForm};

pub async fn run(config: &Config, api_url: Option<&str>, voter_id: &str, json: bool) -> Result<()> {
    let api = HttpVoterApi::from_config(config, api_url)?;
    let mut form = LoginForm::new();
    form.voter_id = voter_id.to_string();

    let session = login::voter_login(&mut form, &api).await;
    super::finish(&form, session, json)
}
