//! Mode-dependent message rendering for Gibberlink.
//!
//! In English mode a message is shown as-is. In protocol mode it becomes an
//! "[ENCRYPTED TRANSMISSION]" banner, a random waveform and a scrambled copy
//! of the text. The scrambling is cosmetic: many inputs map to the same
//! output and nothing can be decoded from it.
//!
//! # Example
//!
//! ```
//! use gibberlink_core::{AgentId, Message, Mode, ScriptStep};
//! use gibberlink_render::{DisplayRepresentation, render};
//!
//! let step = ScriptStep::new(AgentId::A, "Hello", 1000);
//! let message = Message::delivered(&step, chrono::Utc::now());
//!
//! match render(&message, Mode::Protocol) {
//!     DisplayRepresentation::Protocol { obfuscated, waveform, .. } => {
//!         assert_eq!(obfuscated.chars().count(), 5);
//!         assert_eq!(waveform.len(), 40);
//!     }
//!     DisplayRepresentation::Plain { .. } => unreachable!(),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod display;
mod obfuscate;
mod panel;
mod waveform;

pub use display::{DisplayRepresentation, ENCRYPTED_BANNER, render};
pub use obfuscate::{obfuscate, obfuscate_char};
pub use panel::PanelView;
pub use waveform::{WAVEFORM_SAMPLES, Waveform};
