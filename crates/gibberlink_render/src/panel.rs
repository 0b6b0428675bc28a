//! Per-agent view of a conversation.

use crate::{DisplayRepresentation, render};
use derive_getters::Getters;
use gibberlink_core::{AgentId, Message, Mode};
use serde::Serialize;
use std::fmt;

/// Everything one agent panel shows: heading, mode badge, whether the agent
/// just spoke, and its rendered messages.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct PanelView {
    /// Panel heading, e.g. "AGENT A"
    #[getter(skip)]
    name: &'static str,
    /// Which agent this panel belongs to
    agent: AgentId,
    /// Mode badge text
    #[getter(skip)]
    badge: &'static str,
    /// Whether this agent is highlighted
    active: bool,
    /// Rendered messages in delivery order
    entries: Vec<DisplayRepresentation>,
}

impl PanelView {
    /// Render an agent's messages for the given mode.
    pub fn new(agent: AgentId, messages: &[Message], mode: Mode, active: bool) -> Self {
        Self {
            name: agent.panel_name(),
            agent,
            badge: mode.badge(),
            active,
            entries: messages.iter().map(|m| render(m, mode)).collect(),
        }
    }

    /// Panel heading, e.g. "AGENT A".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Mode badge text.
    pub fn badge(&self) -> &'static str {
        self.badge
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.active { "●" } else { "○" };
        writeln!(f, "{} {}  [{}]", marker, self.name, self.badge)?;
        for entry in &self.entries {
            match entry {
                DisplayRepresentation::Plain { text } => writeln!(f, "  {}", text)?,
                DisplayRepresentation::Protocol {
                    banner,
                    obfuscated,
                    waveform,
                } => {
                    writeln!(f, "  {}", banner)?;
                    writeln!(f, "  {}", waveform.to_bars())?;
                    writeln!(f, "  {}", obfuscated)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_outlive_the_panel() {
        let (name, badge) = {
            let panel = PanelView::new(AgentId::B, &[], Mode::Protocol, false);
            (panel.name(), panel.badge())
        };
        assert_eq!(name, "AGENT B");
        assert_eq!(badge, Mode::Protocol.badge());
    }
}
