//! Delivered message type.

use crate::{AgentId, ScriptStep};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message as it appears in an agent's panel once its step was delivered.
///
/// # Examples
///
/// ```
/// use gibberlink_core::{AgentId, Message, ScriptStep};
///
/// let step = ScriptStep::new(AgentId::B, "Of course!", 2000);
/// let message = Message::delivered(&step, chrono::Utc::now());
/// assert_eq!(message.text(), "Of course!");
/// assert_eq!(*message.agent(), AgentId::B);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Message {
    /// Message text
    text: String,
    /// Wall-clock time of delivery
    timestamp: DateTime<Utc>,
    /// Speaker
    agent: AgentId,
}

impl Message {
    /// Build the message for a step delivered at `at`.
    pub fn delivered(step: &ScriptStep, at: DateTime<Utc>) -> Self {
        Self {
            text: step.text().clone(),
            timestamp: at,
            agent: *step.agent(),
        }
    }

    /// Delivery time as milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}
