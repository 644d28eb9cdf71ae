//! Configuration management for ballot.
//!
//! Loads configuration from ${BALLOT_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::{AdminAccount, StaticAdminDirectory};

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "BALLOT_API_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// New comments/sections from the template stay present while the user's
/// values win.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;
    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                // Replaced wholesale; the template's leading comments stay on the first table.
                let mut merged = src_arr.clone();
                let template_decor = match target.get(key) {
                    Some(Item::ArrayOfTables(arr)) => arr.get(0).map(|t| t.decor().clone()),
                    _ => None,
                };
                if let (Some(decor), Some(first)) = (template_decor, merged.get_mut(0)) {
                    *first.decor_mut() = decor;
                }
                target[key] = Item::ArrayOfTables(merged);
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for ballot configuration and data directories.
    //!
    //! BALLOT_HOME resolution order:
    //! 1. BALLOT_HOME environment variable (if set)
    //! 2. ~/.config/ballot (default)
    //! 3. ./.ballot when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the ballot home directory.
    pub fn ballot_home() -> PathBuf {
        if let Ok(home) = std::env::var("BALLOT_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".ballot"),
            |h| h.join(".config").join("ballot"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        ballot_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        ballot_home().join("logs")
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the voting backend.
    pub base_url: String,
    /// Request timeout in seconds (0 disables).
    pub timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ApiConfig::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 0,
        }
    }
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.timeout_secs)))
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level filter used when BALLOT_LOG is unset.
    pub level: String,
    /// File name under the logs directory.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "ballot.log".to_string(),
        }
    }
}

/// Default value for serde when `admins` is missing.
fn default_admins() -> Vec<AdminAccount> {
    vec![AdminAccount::default_admin()]
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,

    pub logging: LoggingConfig,

    /// Accounts accepted by the admin login form.
    #[serde(default = "default_admins")]
    pub admins: Vec<AdminAccount>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            admins: default_admins(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the backend base URL with precedence: override > env > config.
    ///
    /// # Errors
    /// Returns an error if the chosen URL does not parse.
    pub fn effective_api_url(&self, override_url: Option<&str>) -> Result<String> {
        let env_url = std::env::var(API_URL_ENV).ok();
        let candidates = [override_url, env_url.as_deref(), Some(self.api.base_url.as_str())];

        let chosen = candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(ApiConfig::DEFAULT_BASE_URL);

        Url::parse(chosen).with_context(|| format!("Invalid backend URL: {chosen}"))?;
        Ok(chosen.to_string())
    }

    /// Builds the admin verifier from the configured accounts.
    pub fn admin_directory(&self) -> StaticAdminDirectory {
        StaticAdminDirectory::new(self.admins.clone())
    }

    /// Returns the path of the log file.
    pub fn log_path(&self) -> PathBuf {
        paths::logs_dir().join(&self.logging.file)
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Rewrites an existing config onto the latest template.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, merged, or written.
    pub fn upgrade(path: &Path) -> Result<()> {
        let user_config = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let merged = merge_with_template(&user_config)?;
        Self::write_config(path, &merged)
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Used by `xtask update-default-config` to keep `default_config.toml`
    /// in sync with the values above while preserving its comments.
    ///
    /// # Errors
    /// Returns an error if serialization or template parsing fails.
    pub fn generate() -> Result<String> {
        let generated =
            toml::to_string(&Config::default()).context("Failed to serialize default config")?;
        merge_with_template(&generated)
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
