//! Effect handlers.
//!
//! Pure async functions that perform one backend call and return the result
//! event. The runtime spawns them and sends the event to the inbox.

use std::sync::Arc;

use ballot_core::api::{VoterApi, VoterRegistration};

use crate::events::UiEvent;

pub async fn voter_lookup(api: Arc<dyn VoterApi>, voter_id: String) -> UiEvent {
    let roster = api.list_voters().await;
    UiEvent::VoterLookupFinished { voter_id, roster }
}

pub async fn registration(api: Arc<dyn VoterApi>, draft: VoterRegistration) -> UiEvent {
    let outcome = api.register_voter(&draft).await;
    UiEvent::RegistrationFinished { outcome }
}
