//! Display modes.

use serde::{Deserialize, Serialize};

/// How messages are presented.
///
/// A run starts in `English` and may switch to `Protocol` once.
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
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Plain text
    #[default]
    English,
    /// Obfuscated text with a waveform
    Protocol,
}

impl Mode {
    /// Short status label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "ENGLISH",
            Self::Protocol => "PROTOCOL",
        }
    }

    /// Badge shown in each agent panel header.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::English => "💬 ENGLISH MODE",
            Self::Protocol => "🔊 PROTOCOL MODE",
        }
    }
}
