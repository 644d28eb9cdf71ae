//! CLI command handlers.

pub mod admin;
pub mod config;
pub mod health;
pub mod login;
pub mod register;
pub mod tui;
pub mod voters;

use anyhow::Result;
use ballot_core::login::LoginForm;
use ballot_core::session::{Session, SessionUser};

/// Prints a signed-in session to stdout.
fn print_session(session: &Session, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(session)?);
        return Ok(());
    }
    match &session.user {
        SessionUser::Voter(voter) => {
            println!("Signed in as {} ({})", voter.name, session.role);
            println!("Voter ID: {}", voter.id);
            println!("Place: {}", voter.place);
        }
        SessionUser::Admin(admin) => {
            println!("Signed in as {} ({})", admin.name, session.role);
            println!("Username: {}", admin.username);
        }
    }
    Ok(())
}

/// Turns a flow outcome into process output: the session on success,
/// the form's alert as the error otherwise.
fn finish(form: &LoginForm, session: Option<Session>, json: bool) -> Result<()> {
    match session {
        Some(session) => print_session(&session, json),
        None => {
            let message = form
                .alert
                .as_ref()
                .map_or("Sign-in failed", |alert| alert.message.as_str());
            anyhow::bail!("{message}")
        }
    }
}
