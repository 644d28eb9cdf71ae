//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::sync::Arc;

use ballot_core::login::Tab;
use ballot_core::session::Session;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::form::{self, check_registration};
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.form.loading {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if !app.tasks.state_mut(kind).finish_if_active(completed.id) {
                debug!(?kind, id = completed.id.0, "dropping stale task result");
                return vec![];
            }
            update(app, *completed.result)
        }
        UiEvent::VoterLookupFinished { voter_id, roster } => {
            match app.form.finish_voter_login(&voter_id, roster) {
                Some(session) => signed_in(app, session),
                None => vec![],
            }
        }
        UiEvent::RegistrationFinished { outcome } => {
            if app.form.finish_registration(outcome) {
                app.focus.reset();
            }
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            for ch in text.chars() {
                form::handle_edit_key(app, KeyEvent::from(KeyCode::Char(ch)));
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let tab = app.form.active_tab;

    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::F(1) => select_tab(app, Tab::Login),
        KeyCode::F(2) => select_tab(app, Tab::Register),
        KeyCode::F(3) => select_tab(app, Tab::Admin),
        KeyCode::Left if ctrl => select_tab(app, tab.prev()),
        KeyCode::Right if ctrl => select_tab(app, tab.next()),
        KeyCode::Char('r') if ctrl => select_tab(app, Tab::Register),
        KeyCode::Char('l') if ctrl => select_tab(app, Tab::Login),
        KeyCode::Char('p') if ctrl => {
            app.show_password = !app.show_password;
            vec![]
        }
        KeyCode::Enter => submit(app),
        _ => {
            form::handle_edit_key(app, key);
            vec![]
        }
    }
}

fn select_tab(app: &mut AppState, tab: Tab) -> Vec<UiEffect> {
    app.select_tab(tab);
    vec![]
}

fn submit(app: &mut AppState) -> Vec<UiEffect> {
    match app.form.active_tab {
        Tab::Login => submit_voter_login(app),
        Tab::Register => submit_registration(app),
        Tab::Admin => submit_admin_login(app),
    }
}

fn submit_voter_login(app: &mut AppState) -> Vec<UiEffect> {
    if app.form.loading || app.tasks.voter_lookup.is_running() {
        return vec![];
    }
    let Some(voter_id) = app.form.begin_voter_login() else {
        return vec![];
    };
    app.spinner_frame = 0;
    vec![UiEffect::SpawnVoterLookup {
        task: app.task_seq.next_id(),
        voter_id,
    }]
}

fn submit_registration(app: &mut AppState) -> Vec<UiEffect> {
    if app.form.loading || app.tasks.registration.is_running() {
        return vec![];
    }
    if let Some(hint) = check_registration(&app.form.registration) {
        app.focus.focus(Tab::Register, hint.field);
        app.field_hint = Some(hint);
        return vec![];
    }
    let Some(draft) = app.form.begin_registration() else {
        return vec![];
    };
    app.spinner_frame = 0;
    vec![UiEffect::SpawnRegistration {
        task: app.task_seq.next_id(),
        draft,
    }]
}

fn submit_admin_login(app: &mut AppState) -> Vec<UiEffect> {
    let verifier = Arc::clone(&app.verifier);
    match app.form.submit_admin_login(verifier.as_ref()) {
        Some(session) => signed_in(app, session),
        None => vec![],
    }
}

fn signed_in(app: &mut AppState, session: Session) -> Vec<UiEffect> {
    app.session = Some(session.clone());
    vec![UiEffect::SignedIn { session }]
}
