//! UI event types.
//!
//! All external inputs (terminal, async results) are converted to `UiEvent`
//! before being processed by the reducer.
//!
//! ## Task Lifecycle Events
//!
//! Network submissions use a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a task is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`

use ballot_core::api::{ApiResult, RegistrationReceipt, VoterRecord};
use crossterm::event::Event as CrosstermEvent;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Animation heartbeat.
    Tick,

    Terminal(CrosstermEvent),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Roster fetched for a voter login.
    VoterLookupFinished {
        voter_id: String,
        roster: ApiResult<Vec<VoterRecord>>,
    },

    /// Registration request answered.
    RegistrationFinished {
        outcome: ApiResult<RegistrationReceipt>,
    },
}
