//! Sign-in view-state.
//!
//! `LoginForm` is the whole state of the sign-in surface: which tab is shown,
//! the three form drafts, the single inline alert, and the in-flight flag.
//! Frontends (the TUI, the CLI) own one instance and drive it through the
//! flows in [`flows`].

mod flows;

pub use flows::{messages, register, voter_login};

use crate::api::VoterRegistration;

/// The three mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Login,
    Register,
    Admin,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Login, Tab::Register, Tab::Admin]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Login => "Login",
            Tab::Register => "Register",
            Tab::Admin => "Admin",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Login => 0,
            Tab::Register => 1,
            Tab::Admin => 2,
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Login => Tab::Register,
            Tab::Register => Tab::Admin,
            Tab::Admin => Tab::Login,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Login => Tab::Admin,
            Tab::Register => Tab::Login,
            Tab::Admin => Tab::Register,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Warning,
    Danger,
}

/// The single inline message shown above the forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub variant: AlertVariant,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: AlertVariant::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: AlertVariant::Warning,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: AlertVariant::Danger,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Sign-in view-state owned by one frontend instance.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub active_tab: Tab,
    pub voter_id: String,
    pub admin: AdminCredentials,
    pub registration: VoterRegistration,
    pub alert: Option<Alert>,
    /// Shared by voter login and registration; admin login never sets it.
    pub loading: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// User-initiated view switch. Always clears the alert.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.alert = None;
    }

    pub fn clear_alert(&mut self) {
        self.alert = None;
    }

    fn set_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }
}
