//! Script validation command handler.

use gibberlink::{AgentId, GibberlinkResult, ScriptedTimeline};
use std::path::Path;

/// Load a script file and print a short summary.
pub fn validate_script(path: &Path) -> GibberlinkResult<()> {
    let timeline = ScriptedTimeline::from_file(path)?;

    let count = |agent: AgentId| timeline.iter().filter(|s| *s.agent() == agent).count();
    println!("✓ {} is valid", path.display());
    if !timeline.metadata().name().is_empty() {
        println!("  name:     {}", timeline.metadata().name());
    }
    println!(
        "  steps:    {} ({} A, {} B)",
        timeline.len(),
        count(AgentId::A),
        count(AgentId::B)
    );
    match timeline.protocol_trigger() {
        Some(trigger) => println!("  trigger:  step {}", trigger),
        None => println!("  trigger:  none"),
    }
    println!("  duration: {}ms", timeline.total_delay_ms());

    Ok(())
}
