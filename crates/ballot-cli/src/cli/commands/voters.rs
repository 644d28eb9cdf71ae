//! `ballot voters`: print the registered roster.

use anyhow::{Context, Result};
use ballot_core::api::{HttpVoterApi, VoterApi};
use ballot_core::config::Config;
use comfy_table::{ContentArrangement, Table};

pub async fn run(config: &Config, api_url: Option<&str>, json: bool) -> Result<()> {
    let api = HttpVoterApi::from_config(config, api_url)?;
    let voters = api
        .list_voters()
        .await
        .with_context(|| format!("fetch voters from {}", api.base_url()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&voters)?);
        return Ok(());
    }

    if voters.is_empty() {
        println!("No voters registered.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["Voter ID", "Name", "Email", "Place", "Age", "Status"]);
    for voter in &voters {
        table.add_row([
            voter.original_id.as_str(),
            voter.name.as_str(),
            voter.email.as_str(),
            voter.place.as_str(),
            voter.age.as_str(),
            voter.status.as_str(),
        ]);
    }
    println!("{table}");
    Ok(())
}
