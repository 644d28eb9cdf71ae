//! `ballot config` subcommands.

use anyhow::{Context, Result};
use ballot_core::config::{Config, paths};

/// Prints the config file location, noting when it has not been created yet.
pub fn path() {
    let path = paths::config_path();
    if path.exists() {
        println!("{}", path.display());
    } else {
        println!("{} (not created; run `ballot config init`)", path.display());
    }
}

pub fn init() -> Result<()> {
    let path = paths::config_path();
    Config::init(&path).with_context(|| format!("init config at {}", path.display()))?;
    println!("Created config at {}", path.display());
    Ok(())
}

/// Re-applies the current template to an existing config, keeping its values.
pub fn upgrade() -> Result<()> {
    let path = paths::config_path();
    if !path.exists() {
        anyhow::bail!(
            "No config at {}; run `ballot config init` first",
            path.display()
        );
    }
    Config::upgrade(&path).with_context(|| format!("upgrade config at {}", path.display()))?;
    println!("Upgraded config at {}", path.display());
    Ok(())
}

pub fn generate() -> Result<()> {
    print!("{}", Config::generate()?);
    Ok(())
}
