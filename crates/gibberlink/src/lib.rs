//! Gibberlink - two scripted agents that notice each other and switch protocols
//!
//! Gibberlink plays back a pre-authored conversation between two agents. Messages
//! arrive on a timeline; partway through, the agents recognise each other and
//! the conversation flips from plain English to an obfuscated "sound protocol"
//! rendering.
//!
//! # Quick Start
//!
//! ```no_run
//! use gibberlink::{ConversationScheduler, EngineConfig, ScriptedTimeline, TracingSink};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scheduler = ConversationScheduler::spawn(
//!         ScriptedTimeline::sample()?,
//!         EngineConfig::load()?,
//!         Arc::new(TracingSink),
//!     )
//!     .await?;
//!
//!     scheduler.start()?;
//!     tokio::time::sleep(std::time::Duration::from_secs(30)).await;
//!
//!     for panel in scheduler.snapshot().await?.panels() {
//!         println!("{}", panel);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `gibberlink_error` - Error types
//! - `gibberlink_core` - Agents, steps, messages, modes and events
//! - `gibberlink_script` - TOML script loading and validation
//! - `gibberlink_render` - Per-mode text rendering and panel views
//! - `gibberlink_engine` - State machine, scheduler actor and notification sinks
//!
//! This crate (`gibberlink`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use gibberlink_core::*;
pub use gibberlink_engine::*;
pub use gibberlink_error::*;
pub use gibberlink_render::*;
pub use gibberlink_script::*;

pub mod telemetry;
