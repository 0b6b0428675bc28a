//! Scripted conversation timelines for Gibberlink.
//!
//! A [`ScriptedTimeline`] is the immutable, validated list of steps the
//! scheduler plays back. Timelines are built from Rust values or loaded from
//! TOML files:
//!
//! ```toml
//! [script]
//! name = "hotel-booking"
//! description = "Secret AI-to-AI communication protocol demo"
//! protocol_trigger = 6
//!
//! [[steps]]
//! agent = "A"
//! text = "Hello! I'm looking to book a hotel in San Francisco for next week."
//! delay_ms = 1000
//! ```
//!
//! # Example
//!
//! ```
//! use gibberlink_script::ScriptedTimeline;
//!
//! let timeline = ScriptedTimeline::sample().expect("bundled script is valid");
//! assert_eq!(timeline.len(), 14);
//! assert_eq!(timeline.protocol_trigger(), Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod timeline;
mod toml_parser;

pub use timeline::{ScriptMetadata, ScriptedTimeline};
