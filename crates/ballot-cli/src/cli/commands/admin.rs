//! `ballot admin`: administrator sign-in against the configured accounts.

use anyhow::Result;
use ballot_core::config::Config;
use ballot_core::login::{LoginForm, Tab};

pub fn run(config: &Config, username: &str, password: &str, json: bool) -> Result<()> {
    let directory = config.admin_directory();
    let mut form = LoginForm::new();
    form.select_tab(Tab::Admin);
    form.admin.username = username.to_string();
    form.admin.password = password.to_string();

    let session = form.submit_admin_login(&directory);
    super::finish(&form, session, json)
}
