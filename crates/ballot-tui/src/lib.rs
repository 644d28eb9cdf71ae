//! Full-screen sign-in TUI for ballot.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::sync::Arc;

use anyhow::Result;
use ballot_core::api::VoterApi;
use ballot_core::auth::AdminVerifier;
use ballot_core::config::Config;
use ballot_core::session::Session;
pub use runtime::TuiRuntime;

use crate::state::AppState;

/// Runs the interactive sign-in screen.
///
/// Returns the session on a successful sign-in, `None` if the user quit.
///
/// # Errors
/// Returns an error if stdout is not a terminal or terminal I/O fails.
pub async fn run_login(
    config: &Config,
    api: Arc<dyn VoterApi>,
    verifier: Arc<dyn AdminVerifier>,
) -> Result<Option<Session>> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The sign-in screen requires a terminal.\n\
             Use `ballot login`, `ballot register` or `ballot admin` for non-interactive use."
        );
    }

    let mut state = AppState::new(verifier);
    state.admin_hint = config
        .admins
        .first()
        .map(|account| format!("Username: {} | Password: {}", account.username, account.password));

    let mut runtime = TuiRuntime::new(state, api)?;
    runtime.run()
}
