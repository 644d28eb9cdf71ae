use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Ballot maintainer tasks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Task>,
}

#[derive(Debug, Default, Subcommand)]
enum Task {
    /// Regenerate ballot-core/default_config.toml from the Rust defaults.
    #[default]
    UpdateDefaultConfig,
    /// Fail if ballot-core/default_config.toml is out of date.
    CheckDefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Task::UpdateDefaultConfig => update_default_config(),
        Task::CheckDefaultConfig => check_default_config(),
    }
}

fn update_default_config() -> Result<()> {
    let root = project_root()?;
    let dest = default_config_path(&root);
    let generated = generate_config(&root)?;

    fs::write(&dest, generated).with_context(|| format!("write {}", dest.display()))?;
    println!("Updated {}", dest.display());
    Ok(())
}

fn check_default_config() -> Result<()> {
    let root = project_root()?;
    let dest = default_config_path(&root);
    let generated = generate_config(&root)?;
    let current =
        fs::read_to_string(&dest).with_context(|| format!("read {}", dest.display()))?;

    if current != generated {
        bail!(
            "{} is stale; run `cargo xtask update-default-config`",
            dest.display()
        );
    }
    println!("{} is up to date", dest.display());
    Ok(())
}

/// Runs `ballot config generate` with an empty BALLOT_HOME and returns stdout.
fn generate_config(root: &Path) -> Result<String> {
    let home = tempfile::tempdir().context("create temp dir for BALLOT_HOME")?;

    let output = Command::new("cargo")
        .current_dir(root)
        .env("BALLOT_HOME", home.path())
        .args(["run", "--quiet", "-p", "ballot-cli", "--", "config", "generate"])
        .output()
        .context("run `cargo run -p ballot-cli -- config generate`")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("config generate failed: {stderr}");
    }

    String::from_utf8(output.stdout).context("config generate printed non-UTF-8 output")
}

fn default_config_path(root: &Path) -> PathBuf {
    root.join("crates")
        .join("ballot-core")
        .join("default_config.toml")
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .context("locate workspace root from CARGO_MANIFEST_DIR")?;
    Ok(root.to_path_buf())
}
