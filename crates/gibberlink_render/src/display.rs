//! The render pipeline entry point.

use crate::{Waveform, obfuscate};
use gibberlink_core::{Message, Mode};
use serde::Serialize;

/// Banner shown above every protocol-mode message.
pub const ENCRYPTED_BANNER: &str = "[ENCRYPTED TRANSMISSION]";

/// How one message is presented in a given mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DisplayRepresentation {
    /// English mode: the original text
    Plain {
        /// Message text, unchanged
        text: String,
    },
    /// Protocol mode: banner, waveform and scrambled text
    Protocol {
        /// Always [`ENCRYPTED_BANNER`]
        banner: &'static str,
        /// Scrambled text, same character count as the original
        obfuscated: String,
        /// Random amplitudes
        waveform: Waveform,
    },
}

impl DisplayRepresentation {
    /// Text line shown for this message.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } => text,
            Self::Protocol { obfuscated, .. } => obfuscated,
        }
    }
}

/// Render a message for the current mode.
///
/// Protocol renders are not reproducible: the waveform is regenerated on
/// every call.
pub fn render(message: &Message, mode: Mode) -> DisplayRepresentation {
    match mode {
        Mode::English => DisplayRepresentation::Plain {
            text: message.text().clone(),
        },
        Mode::Protocol => DisplayRepresentation::Protocol {
            banner: ENCRYPTED_BANNER,
            obfuscated: obfuscate(message.text()),
            waveform: Waveform::random(),
        },
    }
}
