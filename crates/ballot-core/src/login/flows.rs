//! The three sign-in flows.
//!
//! Network-backed flows are split in two so a frontend can run the request
//! wherever it likes: `begin_*` validates locally and returns the request to
//! perform (or `None` when nothing should be sent), `finish_*` applies the
//! outcome. Every path through `begin_*` + `finish_*` leaves `loading` false.

use tracing::{info, warn};

use super::{Alert, LoginForm, Tab};
use crate::api::{ApiResult, RegistrationReceipt, VoterApi, VoterRecord, VoterRegistration};
use crate::auth::AdminVerifier;
use crate::session::Session;

pub mod messages {
    //! User-facing alert text.

    pub const ENTER_VOTER_ID: &str = "Please enter your voter ID";
    pub const VOTER_NOT_FOUND: &str = "Voter ID not found. Please register first.";
    pub const SERVER_ERROR_RETRY: &str = "Error connecting to server. Please try again.";
    pub const SERVER_UNREACHABLE: &str =
        "Error connecting to server. Please check if backend is running.";
    pub const FILL_ALL_FIELDS: &str = "Please fill all required fields";
    pub const REGISTRATION_SUBMITTED: &str =
        "Registration submitted successfully! Please wait for admin approval.";
    pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
    pub const INVALID_ADMIN: &str = "Invalid admin credentials";

    pub fn account_status(status: &str) -> String {
        format!("Your account status is: {status}. Please contact administrator.")
    }
}

impl LoginForm {
    /// Starts a voter login. Returns the trimmed voter id to look up.
    pub fn begin_voter_login(&mut self) -> Option<String> {
        self.loading = true;
        let voter_id = self.voter_id.trim();
        if voter_id.is_empty() {
            self.set_alert(Alert::danger(messages::ENTER_VOTER_ID));
            self.loading = false;
            return None;
        }
        Some(voter_id.to_string())
    }

    /// Applies the roster lookup for `voter_id`.
    ///
    /// Returns the session only when the record exists and is Active.
    pub fn finish_voter_login(
        &mut self,
        voter_id: &str,
        roster: ApiResult<Vec<VoterRecord>>,
    ) -> Option<Session> {
        self.loading = false;
        let voters = match roster {
            Ok(voters) => voters,
            Err(err) if err.is_http_status() => {
                warn!(error = %err, "voter roster request rejected");
                self.set_alert(Alert::danger(messages::SERVER_ERROR_RETRY));
                return None;
            }
            Err(err) => {
                warn!(error = %err, "voter roster unavailable");
                self.set_alert(Alert::danger(messages::SERVER_UNREACHABLE));
                return None;
            }
        };

        let Some(record) = voters.iter().find(|v| v.original_id == voter_id) else {
            info!(voter_id, "voter not found");
            self.set_alert(Alert::danger(messages::VOTER_NOT_FOUND));
            return None;
        };

        if !record.status.is_active() {
            info!(voter_id, status = %record.status, "voter not active");
            self.set_alert(Alert::warning(messages::account_status(
                record.status.as_str(),
            )));
            return None;
        }

        info!(voter_id, "voter signed in");
        self.clear_alert();
        Some(Session::voter(record))
    }

    /// Starts a registration. Returns the draft to submit.
    pub fn begin_registration(&mut self) -> Option<VoterRegistration> {
        self.loading = true;
        if !self.registration.is_complete() {
            self.set_alert(Alert::danger(messages::FILL_ALL_FIELDS));
            self.loading = false;
            return None;
        }
        Some(self.registration.clone())
    }

    /// Applies the registration outcome.
    ///
    /// On success the draft is reset and the view moves to Login with the
    /// success alert still showing.
    pub fn finish_registration(&mut self, outcome: ApiResult<RegistrationReceipt>) -> bool {
        self.loading = false;
        match outcome {
            Ok(receipt) => {
                info!(hashed_id = ?receipt.hashed_id, "registration submitted");
                self.set_alert(Alert::success(messages::REGISTRATION_SUBMITTED));
                self.registration.clear();
                self.active_tab = Tab::Login;
                true
            }
            Err(err) if err.is_http_status() => {
                warn!(error = %err, "registration rejected");
                let message = err
                    .server_message()
                    .unwrap_or(messages::REGISTRATION_FAILED)
                    .to_string();
                self.set_alert(Alert::danger(message));
                false
            }
            Err(err) => {
                warn!(error = %err, "registration failed");
                self.set_alert(Alert::danger(messages::SERVER_ERROR_RETRY));
                false
            }
        }
    }

    /// Checks the admin form against `verifier`. Synchronous; never touches `loading`.
    pub fn submit_admin_login(&mut self, verifier: &dyn AdminVerifier) -> Option<Session> {
        match verifier.verify(&self.admin.username, &self.admin.password) {
            Some(account) => {
                info!(username = %account.username, "admin signed in");
                self.clear_alert();
                Some(Session::admin(&account))
            }
            None => {
                self.set_alert(Alert::danger(messages::INVALID_ADMIN));
                None
            }
        }
    }
}

/// Runs a full voter login against `api`.
pub async fn voter_login(form: &mut LoginForm, api: &dyn VoterApi) -> Option<Session> {
    let voter_id = form.begin_voter_login()?;
    let roster = api.list_voters().await;
    form.finish_voter_login(&voter_id, roster)
}

/// Runs a full registration against `api`. Returns true on success.
pub async fn register(form: &mut LoginForm, api: &dyn VoterApi) -> bool {
    let Some(draft) = form.begin_registration() else {
        return false;
    };
    let outcome = api.register_voter(&draft).await;
    form.finish_registration(outcome)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::api::{ApiError, HealthStatus, VoterStatus};
    use crate::auth::StaticAdminDirectory;
    use crate::login::AlertVariant;
    use crate::session::Role;

    /// Scripted backend that counts calls.
    struct FakeApi {
        roster: ApiResult<Vec<VoterRecord>>,
        registration: ApiResult<RegistrationReceipt>,
        list_calls: AtomicUsize,
        register_calls: AtomicUsize,
        last_draft: Mutex<Option<VoterRegistration>>,
    }

    impl FakeApi {
        fn with_roster(roster: ApiResult<Vec<VoterRecord>>) -> Self {
            Self {
                roster,
                registration: Ok(RegistrationReceipt::default()),
                list_calls: AtomicUsize::new(0),
                register_calls: AtomicUsize::new(0),
                last_draft: Mutex::new(None),
            }
        }

        fn with_registration(registration: ApiResult<RegistrationReceipt>) -> Self {
            Self {
                registration,
                ..Self::with_roster(Ok(Vec::new()))
            }
        }
    }

    #[async_trait]
    impl VoterApi for FakeApi {
        async fn list_voters(&self) -> ApiResult<Vec<VoterRecord>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.roster.clone()
        }

        async fn register_voter(
            &self,
            draft: &VoterRegistration,
        ) -> ApiResult<RegistrationReceipt> {
            self.register_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_draft.lock().unwrap() = Some(draft.clone());
            self.registration.clone()
        }

        async fn health(&self) -> ApiResult<HealthStatus> {
            Ok(HealthStatus {
                status: "healthy".into(),
                timestamp: None,
            })
        }
    }

    fn record(id: &str, status: &str) -> VoterRecord {
        VoterRecord {
            hashed_id: None,
            original_id: id.into(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            place: "London".into(),
            age: "36".into(),
            status: VoterStatus::from(status.to_string()),
        }
    }

    fn filled_draft() -> VoterRegistration {
        VoterRegistration {
            id: "V2".into(),
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            place: "Arlington".into(),
            age: "85".into(),
        }
    }

    #[tokio::test]
    async fn test_blank_voter_id_never_hits_network() {
        for input in ["", "   ", "\t\n"] {
            let api = FakeApi::with_roster(Ok(vec![record("V1", "Active")]));
            let mut form = LoginForm::new();
            form.voter_id = input.into();

            let session = voter_login(&mut form, &api).await;

            assert!(session.is_none());
            assert_eq!(api.list_calls.load(Ordering::SeqCst), 0);
            assert_eq!(form.alert, Some(Alert::danger(messages::ENTER_VOTER_ID)));
            assert!(!form.loading);
        }
    }

    #[tokio::test]
    async fn test_active_voter_signs_in_once_and_clears_alert() {
        let api = FakeApi::with_roster(Ok(vec![record("V0", "Active"), record("V1", "Active")]));
        let mut form = LoginForm::new();
        form.voter_id = "  V1 ".into();
        form.alert = Some(Alert::danger("stale"));

        let session = voter_login(&mut form, &api).await.unwrap();

        assert_eq!(session.role, Role::Voter);
        assert_eq!(session.user.id(), "V1");
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
        assert!(form.alert.is_none());
        assert!(!form.loading);
    }

    #[tokio::test]
    async fn test_inactive_voter_gets_status_warning() {
        let api = FakeApi::with_roster(Ok(vec![record("V1", "Suspended")]));
        let mut form = LoginForm::new();
        form.voter_id = "V1".into();

        let session = voter_login(&mut form, &api).await;

        assert!(session.is_none());
        let alert = form.alert.unwrap();
        assert_eq!(alert.variant, AlertVariant::Warning);
        assert!(alert.message.contains("Suspended"));
    }

    #[tokio::test]
    async fn test_pending_voter_is_blocked() {
        let api = FakeApi::with_roster(Ok(vec![record("V1", "Pending")]));
        let mut form = LoginForm::new();
        form.voter_id = "V1".into();

        assert!(voter_login(&mut form, &api).await.is_none());
        assert_eq!(
            form.alert.unwrap().message,
            "Your account status is: Pending. Please contact administrator."
        );
    }

    #[tokio::test]
    async fn test_unknown_voter_not_found() {
        let api = FakeApi::with_roster(Ok(vec![record("V1", "Active")]));
        let mut form = LoginForm::new();
        form.voter_id = "V404".into();

        assert!(voter_login(&mut form, &api).await.is_none());
        assert_eq!(form.alert, Some(Alert::danger(messages::VOTER_NOT_FOUND)));
    }

    #[tokio::test]
    async fn test_roster_http_error_differs_from_transport_error() {
        let api = FakeApi::with_roster(Err(ApiError::http_status(500, "")));
        let mut form = LoginForm::new();
        form.voter_id = "V1".into();
        voter_login(&mut form, &api).await;
        assert_eq!(form.alert, Some(Alert::danger(messages::SERVER_ERROR_RETRY)));

        let api = FakeApi::with_roster(Err(ApiError::transport("Connection failed")));
        let mut form = LoginForm::new();
        form.voter_id = "V1".into();
        voter_login(&mut form, &api).await;
        assert_eq!(form.alert, Some(Alert::danger(messages::SERVER_UNREACHABLE)));
        assert!(!form.loading);
    }

    #[test]
    fn test_begin_voter_login_sets_loading() {
        let mut form = LoginForm::new();
        form.voter_id = "V1".into();
        assert_eq!(form.begin_voter_login().as_deref(), Some("V1"));
        assert!(form.loading);
    }

    #[tokio::test]
    async fn test_incomplete_registration_never_hits_network() {
        let fields: [fn(&mut VoterRegistration); 5] = [
            |d| d.id.clear(),
            |d| d.name.clear(),
            |d| d.email.clear(),
            |d| d.place.clear(),
            |d| d.age.clear(),
        ];
        for clear in fields {
            let api = FakeApi::with_registration(Ok(RegistrationReceipt::default()));
            let mut form = LoginForm::new();
            form.active_tab = Tab::Register;
            form.registration = filled_draft();
            clear(&mut form.registration);

            assert!(!register(&mut form, &api).await);
            assert_eq!(api.register_calls.load(Ordering::SeqCst), 0);
            assert_eq!(form.alert, Some(Alert::danger(messages::FILL_ALL_FIELDS)));
            assert_eq!(form.active_tab, Tab::Register);
            assert!(!form.loading);
        }
    }

    #[tokio::test]
    async fn test_successful_registration_resets_draft_and_switches_to_login() {
        let api = FakeApi::with_registration(Ok(RegistrationReceipt {
            message: "ok".into(),
            hashed_id: Some("abc".into()),
        }));
        let mut form = LoginForm::new();
        form.select_tab(Tab::Register);
        form.registration = filled_draft();

        assert!(register(&mut form, &api).await);

        assert_eq!(form.registration, VoterRegistration::default());
        assert_eq!(form.active_tab, Tab::Login);
        assert_eq!(form.alert, Some(Alert::success(messages::REGISTRATION_SUBMITTED)));
        assert_eq!(api.last_draft.lock().unwrap().clone(), Some(filled_draft()));
    }

    #[tokio::test]
    async fn test_rejected_registration_shows_server_message_and_keeps_draft() {
        let api = FakeApi::with_registration(Err(ApiError::http_status(
            400,
            r#"{"message":"Voter ID already registered"}"#,
        )));
        let mut form = LoginForm::new();
        form.active_tab = Tab::Register;
        form.registration = filled_draft();

        assert!(!register(&mut form, &api).await);

        assert_eq!(form.alert, Some(Alert::danger("Voter ID already registered")));
        assert_eq!(form.registration, filled_draft());
        assert_eq!(form.active_tab, Tab::Register);
    }

    #[tokio::test]
    async fn test_rejected_registration_without_message_uses_fallback() {
        let api = FakeApi::with_registration(Err(ApiError::http_status(502, "Bad Gateway")));
        let mut form = LoginForm::new();
        form.registration = filled_draft();

        register(&mut form, &api).await;

        assert_eq!(form.alert, Some(Alert::danger(messages::REGISTRATION_FAILED)));
    }

    #[tokio::test]
    async fn test_registration_transport_failure() {
        let api = FakeApi::with_registration(Err(ApiError::transport("refused")));
        let mut form = LoginForm::new();
        form.registration = filled_draft();

        register(&mut form, &api).await;

        assert_eq!(form.alert, Some(Alert::danger(messages::SERVER_ERROR_RETRY)));
        assert!(!form.loading);
    }

    #[test]
    fn test_admin_login_matches_placeholder_account() {
        let directory = StaticAdminDirectory::default();
        let mut form = LoginForm::new();
        form.admin.username = "admin".into();
        form.admin.password = "admin123".into();
        form.alert = Some(Alert::danger(messages::INVALID_ADMIN));

        let session = form.submit_admin_login(&directory).unwrap();

        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.user.name(), "System Administrator");
        assert!(form.alert.is_none());
        assert!(!form.loading);
    }

    #[test]
    fn test_admin_login_rejects_other_pairs() {
        let directory = StaticAdminDirectory::default();
        for (user, pass) in [("admin", "admin"), ("root", "admin123"), ("", "")] {
            let mut form = LoginForm::new();
            form.admin.username = user.into();
            form.admin.password = pass.into();

            assert!(form.submit_admin_login(&directory).is_none());
            assert_eq!(form.alert, Some(Alert::danger(messages::INVALID_ADMIN)));
        }
    }
}
