//! Application state.
//!
//! ```text
//! AppState
//! ├── form: LoginForm          (tab, drafts, alert, loading)
//! ├── focus: FieldFocus        (focused field in the active tab)
//! ├── field_hint               (widget-level message on one field)
//! ├── task_seq / tasks         (async submission lifecycle)
//! ├── verifier / admin_hint    (admin credential check)
//! └── session                  (set once a sign-in succeeds)
//! ```

use std::sync::Arc;

use ballot_core::auth::AdminVerifier;
use ballot_core::login::{LoginForm, Tab};
use ballot_core::session::Session;

use crate::common::{TaskSeq, Tasks};
use crate::features::form::{Field, FieldFocus, FieldHint};

pub struct AppState {
    pub form: LoginForm,
    pub focus: FieldFocus,
    pub field_hint: Option<FieldHint>,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub verifier: Arc<dyn AdminVerifier>,
    /// Account line shown under the admin form.
    pub admin_hint: Option<String>,
    pub session: Option<Session>,
    pub spinner_frame: usize,
    pub show_password: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(verifier: Arc<dyn AdminVerifier>) -> Self {
        Self {
            form: LoginForm::new(),
            focus: FieldFocus::default(),
            field_hint: None,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            verifier,
            admin_hint: None,
            session: None,
            spinner_frame: 0,
            show_password: false,
            should_quit: false,
        }
    }

    pub fn focused_field(&self) -> Field {
        self.focus.current(self.form.active_tab)
    }

    /// User-initiated tab switch: clears the alert and any field hint.
    pub fn select_tab(&mut self, tab: Tab) {
        self.form.select_tab(tab);
        self.focus.reset();
        self.field_hint = None;
    }
}
