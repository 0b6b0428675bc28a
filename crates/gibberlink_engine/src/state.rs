//! Snapshot of a conversation run.

use derive_getters::Getters;
use gibberlink_core::{AgentId, Message, Mode, RunState};
use gibberlink_render::PanelView;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Everything the presentation layer needs to draw a conversation.
///
/// Only the engine mutates this type; callers receive clones through
/// [`ConversationScheduler::snapshot`](crate::ConversationScheduler::snapshot)
/// or [`ConversationMachine::state`](crate::ConversationMachine::state).
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct ConversationState {
    /// Lifecycle phase
    run_state: RunState,
    /// Display mode
    mode: Mode,
    /// Speaker that just delivered a message, if still highlighted
    active_agent: Option<AgentId>,
    /// Number of steps delivered so far
    current_step_index: usize,
    /// Delivered messages per speaker, in script order
    messages_by_agent: BTreeMap<AgentId, Vec<Message>>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self {
            run_state: RunState::Idle,
            mode: Mode::English,
            active_agent: None,
            current_step_index: 0,
            messages_by_agent: AgentId::iter().map(|agent| (agent, Vec::new())).collect(),
        }
    }
}

impl ConversationState {
    /// Messages delivered by one agent.
    pub fn messages_for(&self, agent: AgentId) -> &[Message] {
        self.messages_by_agent
            .get(&agent)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total delivered messages across both agents.
    pub fn message_count(&self) -> usize {
        self.messages_by_agent.values().map(Vec::len).sum()
    }

    /// Whether the agents have recognised each other and switched to protocol mode.
    pub fn detection_triggered(&self) -> bool {
        self.mode == Mode::Protocol
    }

    /// Render one agent's panel for the current mode.
    pub fn panel(&self, agent: AgentId) -> PanelView {
        PanelView::new(
            agent,
            self.messages_for(agent),
            self.mode,
            self.active_agent == Some(agent),
        )
    }

    /// Render both panels, agent A first.
    pub fn panels(&self) -> Vec<PanelView> {
        AgentId::iter().map(|agent| self.panel(agent)).collect()
    }

    pub(crate) fn set_run_state(&mut self, run_state: RunState) {
        self.run_state = run_state;
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn set_active_agent(&mut self, agent: Option<AgentId>) {
        self.active_agent = agent;
    }

    /// Append a delivered message and advance the step index.
    pub(crate) fn record_delivery(&mut self, message: Message) {
        self.messages_by_agent
            .entry(*message.agent())
            .or_default()
            .push(message);
        self.current_step_index += 1;
    }
}
