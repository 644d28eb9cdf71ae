//! CLI entry and dispatch.

use anyhow::{Context, Result};
use ballot_core::api::VoterRegistration;
use ballot_core::{config, logging};
use clap::Parser;
use tokio::runtime::Runtime;

mod commands;

#[derive(Parser)]
#[command(name = "ballot")]
#[command(version)]
#[command(about = "Sign in to the ballot voting system")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend base URL (overrides config)
    #[arg(long, global = true, value_name = "URL", env = config::API_URL_ENV)]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in as a voter
    Login {
        /// The voter ID you registered with
        #[arg(long, value_name = "ID")]
        voter_id: String,

        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new voter (pending admin approval)
    Register {
        /// A unique voter ID
        #[arg(long, value_name = "ID")]
        id: String,
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Place or city
        #[arg(long)]
        place: String,
        /// Age
        #[arg(long)]
        age: String,
    },

    /// Sign in as an administrator
    Admin {
        #[arg(long)]
        username: String,

        #[arg(long, env = "BALLOT_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,

        /// Print the session as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered voters
    Voters {
        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the backend is reachable
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Merge an existing config onto the latest template
    Upgrade,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config commands must work before a config (or log dir) exists.
    if let Some(Commands::Config { command }) = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Upgrade => commands::config::upgrade(),
            ConfigCommands::Generate => commands::config::generate(),
        };
    }

    let config = config::Config::load().context("load config")?;
    let _log_guard = logging::init(&config).context("init logging")?;

    // one tokio runtime for everything
    let rt = Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli, config).await })
}

async fn dispatch(cli: Cli, config: config::Config) -> Result<()> {
    let Cli { command, api_url } = cli;
    let api_url = api_url.as_deref();

    let Some(command) = command else {
        return commands::tui::run(&config, api_url).await;
    };

    match command {
        Commands::Login { voter_id, json } => {
            commands::login::run(&config, api_url, &voter_id, json).await
        }
        Commands::Register {
            id,
            name,
            email,
            place,
            age,
        } => {
            let draft = VoterRegistration {
                id,
                name,
                email,
                place,
                age,
            };
            commands::register::run(&config, api_url, draft).await
        }
        Commands::Admin {
            username,
            password,
            json,
        } => commands::admin::run(&config, &username, &password, json),
        Commands::Voters { json } => commands::voters::run(&config, api_url, json).await,
        Commands::Health => commands::health::run(&config, api_url).await,
        Commands::Config { .. } => Ok(()),
    }
}
