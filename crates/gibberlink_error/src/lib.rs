//! Error types for the Gibberlink conversation simulator.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use gibberlink_error::{GibberlinkResult, ScriptError, ScriptErrorKind};
//!
//! fn load_script() -> GibberlinkResult<()> {
//!     Err(ScriptError::new(ScriptErrorKind::EmptyText { step: 3 }))?
//! }
//!
//! match load_script() {
//!     Ok(()) => println!("loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod scheduler;
mod script;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{GibberlinkError, GibberlinkErrorKind, GibberlinkResult};
pub use scheduler::{SchedulerError, SchedulerErrorKind, SchedulerResult};
pub use script::{ScriptError, ScriptErrorKind, ScriptResult};
