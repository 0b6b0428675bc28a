//! TOML deserialization structures for script files.
//!
//! Fields are read loosely (agent as a string, delay as a signed integer)
//! so that bad values surface as [`ScriptError`]s naming the offending step
//! instead of opaque deserializer messages.

use gibberlink_core::{AgentId, ScriptStep};
use gibberlink_error::{ScriptError, ScriptErrorKind, ScriptResult};
use serde::Deserialize;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Intermediate structure for the `[script]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlScriptHeader {
    pub name: Option<String>,
    pub description: Option<String>,
    pub protocol_trigger: Option<usize>,
}

/// Intermediate structure for one `[[steps]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlStep {
    pub agent: String,
    pub text: String,
    pub delay_ms: i64,
}

/// Whole script file.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlScript {
    #[serde(default)]
    pub script: TomlScriptHeader,
    #[serde(default)]
    pub steps: Vec<TomlStep>,
}

impl TomlStep {
    /// Convert into a domain step, checking the agent id and delay sign.
    pub fn into_step(self, index: usize) -> ScriptResult<ScriptStep> {
        let agent = AgentId::from_str(self.agent.trim()).map_err(|_| {
            ScriptError::new(ScriptErrorKind::InvalidAgent {
                step: index,
                value: self.agent.clone(),
            })
        })?;

        if self.delay_ms <= 0 {
            return Err(ScriptError::new(ScriptErrorKind::NonPositiveDelay {
                step: index,
                delay_ms: self.delay_ms,
            }));
        }

        Ok(ScriptStep::new(agent, self.text, self.delay_ms as u64))
    }
}

/// Parse script TOML into its intermediate form.
#[instrument(skip_all, fields(len = content.len()))]
pub fn parse_script(content: &str) -> ScriptResult<TomlScript> {
    let script: TomlScript = toml::from_str(content)
        .map_err(|e| ScriptError::new(ScriptErrorKind::TomlParse(e.to_string())))?;
    debug!(steps = script.steps.len(), "Parsed script TOML");
    Ok(script)
}
