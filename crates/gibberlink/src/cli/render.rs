//! Single-message render command handler.

use chrono::Utc;
use gibberlink::{AgentId, Message, Mode, PanelView, ScriptStep};

/// Print one message as it would appear in an agent panel.
pub fn render_text(text: &str, mode: Mode, agent: AgentId) -> Result<(), Box<dyn std::error::Error>> {
    if text.is_empty() {
        return Err("message text must not be empty".into());
    }

    let message = Message::delivered(&ScriptStep::new(agent, text, 1), Utc::now());
    print!("{}", PanelView::new(agent, &[message], mode, true));
    Ok(())
}
