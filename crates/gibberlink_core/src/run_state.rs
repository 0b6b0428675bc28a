//! Scheduler lifecycle phases.

use serde::{Deserialize, Serialize};

/// Lifecycle of a conversation run.
///
/// # Examples
///
/// ```
/// use gibberlink_core::RunState;
///
/// assert_eq!(RunState::default(), RunState::Idle);
/// assert_eq!(RunState::Running.label(), "ACTIVE");
/// assert_eq!(RunState::Stopped.label(), "IDLE");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// Never started, or reset
    #[default]
    Idle,
    /// Delivering steps
    Running,
    /// Paused by the user; progress is kept
    Stopped,
    /// Every step delivered
    Completed,
}

impl RunState {
    /// Whether steps are currently being delivered.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Status shown in the control panel.
    pub fn label(&self) -> &'static str {
        if self.is_running() { "ACTIVE" } else { "IDLE" }
    }
}
