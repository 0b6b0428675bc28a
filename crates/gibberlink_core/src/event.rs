//! Notification events emitted by the scheduler.

use crate::Mode;
use serde::{Deserialize, Serialize};

/// Discrete events for the notification sink.
///
/// Serialized as a tagged union: `{"kind": "ModeChanged", "payload": "protocol"}`.
///
/// # Examples
///
/// ```
/// use gibberlink_core::{ConversationEvent, Mode};
///
/// let event = ConversationEvent::ModeChanged(Mode::Protocol);
/// assert_eq!(event.title(), "🔊 Protocol Mode Activated");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", content = "payload")]
pub enum ConversationEvent {
    /// A run began or resumed
    Started,
    /// The display mode changed
    #[display("ModeChanged({})", _0)]
    ModeChanged(Mode),
    /// Every step has been delivered
    Completed,
    /// State was cleared back to idle
    Reset,
}

impl ConversationEvent {
    /// Notification headline.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Started => "🚀 Starting Conversation",
            Self::ModeChanged(Mode::Protocol) => "🔊 Protocol Mode Activated",
            Self::ModeChanged(Mode::English) => "💬 English Mode Restored",
            Self::Completed => "✅ Conversation Complete",
            Self::Reset => "🔄 Reset Complete",
        }
    }

    /// Notification body.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Started => "Watch as the agents detect each other and switch protocols...",
            Self::ModeChanged(Mode::Protocol) => {
                "Agents detected each other as AI and switched to sound protocol"
            }
            Self::ModeChanged(Mode::English) => "Agents are speaking plain English",
            Self::Completed => "The secret protocol exchange was successful!",
            Self::Reset => "Ready to start a new conversation",
        }
    }
}
