//! Speaker identities.

use serde::{Deserialize, Serialize};

/// One of the two simulated agents.
///
/// # Examples
///
/// ```
/// use gibberlink_core::AgentId;
/// use std::str::FromStr;
///
/// assert_eq!(AgentId::from_str("A").unwrap(), AgentId::A);
/// assert!(AgentId::from_str("C").is_err());
/// assert_eq!(AgentId::B.panel_name(), "AGENT B");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum AgentId {
    /// The first speaker
    A,
    /// The second speaker
    B,
}

impl AgentId {
    /// Heading shown above this agent's panel.
    pub fn panel_name(&self) -> &'static str {
        match self {
            Self::A => "AGENT A",
            Self::B => "AGENT B",
        }
    }
}
