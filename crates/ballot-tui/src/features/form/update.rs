use ballot_core::login::Tab;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppState;

/// Handles focus movement and text editing; other keys are ignored.
pub fn handle_edit_key(app: &mut AppState, key: KeyEvent) {
    let tab = app.form.active_tab;
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.focus.next(tab);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus.prev(tab);
        }
        KeyCode::Backspace => {
            if editable(app) {
                let field = app.focused_field();
                field.value_mut(&mut app.form).pop();
                app.field_hint = None;
            }
        }
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if editable(app) {
                let field = app.focused_field();
                let value = field.value_mut(&mut app.form);
                if field.accepts(value, ch) {
                    value.push(ch);
                    app.field_hint = None;
                }
            }
        }
        _ => {}
    }
}

/// The voter-id input is disabled while its lookup is in flight.
fn editable(app: &AppState) -> bool {
    !(app.form.loading && app.form.active_tab == Tab::Login)
}
