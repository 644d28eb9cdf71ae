//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; it never performs
//! I/O or spawns tasks directly.

use ballot_core::api::VoterRegistration;
use ballot_core::session::Session;

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEffect {
    /// Quit without a session.
    Quit,

    /// Fetch the roster and resolve `voter_id` against it.
    SpawnVoterLookup { task: TaskId, voter_id: String },

    /// Submit a registration draft.
    SpawnRegistration {
        task: TaskId,
        draft: VoterRegistration,
    },

    /// A sign-in succeeded; hand the session to the caller.
    SignedIn { session: Session },
}
