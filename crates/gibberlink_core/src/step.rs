//! Script step definition.

use crate::AgentId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One pre-authored line of the conversation: who says what, and how long
/// the scheduler waits before delivering it.
///
/// # Examples
///
/// ```
/// use gibberlink_core::{AgentId, ScriptStep};
///
/// let step = ScriptStep::new(AgentId::A, "Hello!", 1000);
/// assert_eq!(step.delay().as_millis(), 1000);
/// assert_eq!(step.clear_delay().as_millis(), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ScriptStep {
    /// Speaker of this step
    agent: AgentId,
    /// Message text
    text: String,
    /// Wait before delivery, in milliseconds
    delay_ms: u64,
}

impl ScriptStep {
    /// Create a new step. Validation happens when steps are assembled into a timeline.
    pub fn new(agent: AgentId, text: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            agent,
            text: text.into(),
            delay_ms,
        }
    }

    /// Wait before this step is delivered.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// How long the speaker stays highlighted after delivery.
    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms / 2)
    }
}
