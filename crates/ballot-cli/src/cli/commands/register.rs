//! `ballot register`: submit a self-registration.

use anyhow::Result;
use ballot_core::api::{HttpVoterApi, VoterRegistration};
use ballot_core::config::Config;
use ballot_core::login::{self, LoginForm, Tab};

pub async fn run(config: &Config, api_url: Option<&str>, draft: VoterRegistration) -> Result<()> {
    let api = HttpVoterApi::from_config(config, api_url)?;
    let mut form = LoginForm::new();
    form.select_tab(Tab::Register);
    form.registration = draft;

    if login::register(&mut form, &api).await {
        if let Some(alert) = &form.alert {
            println!("{}", alert.message);
        }
        return Ok(());
    }

    let message = form
        .alert
        .as_ref()
        .map_or("Registration failed", |alert| alert.message.as_str());
    let missing = form.registration.missing_fields();
    if missing.is_empty() {
        anyhow::bail!("{message}")
    }
    anyhow::bail!("{message} (missing: {})", missing.join(", "))
}
