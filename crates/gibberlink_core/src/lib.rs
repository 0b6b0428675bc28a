//! Core data types for the Gibberlink conversation simulator.
//!
//! This crate provides the leaf types shared by the script loader, the
//! render pipeline and the scheduler: speakers, script steps, delivered
//! messages, display modes, run states and the notification events.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod event;
mod message;
mod mode;
mod run_state;
mod step;

pub use agent::AgentId;
pub use event::ConversationEvent;
pub use message::Message;
pub use mode::Mode;
pub use run_state::RunState;
pub use step::ScriptStep;
