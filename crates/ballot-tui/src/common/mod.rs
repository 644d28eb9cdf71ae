//! Shared leaf types for the TUI.
//!
//! IMPORTANT: This module must NOT import UiEvent or feature-specific state
//! to avoid circular dependencies.

pub mod task;
pub mod text;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, Tasks};
pub use text::{mask, truncate_start_with_ellipsis};
