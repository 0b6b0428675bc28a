//! Script loading and validation errors.

/// Specific error conditions raised while building a scripted timeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ScriptErrorKind {
    /// Failed to read the script file
    #[display("Failed to read script file: {}", _0)]
    FileRead(String),
    /// Failed to parse TOML content
    #[display("Failed to parse TOML: {}", _0)]
    TomlParse(String),
    /// Agent id is not one of the known speakers
    #[display("Step {} has unknown agent '{}' (expected \"A\" or \"B\")", step, value)]
    InvalidAgent {
        /// Step index
        step: usize,
        /// Offending agent id
        value: String,
    },
    /// Step text is empty
    #[display("Step {} has empty text", step)]
    EmptyText {
        /// Step index
        step: usize,
    },
    /// Step delay is zero or negative
    #[display("Step {} has non-positive delay {}ms", step, delay_ms)]
    NonPositiveDelay {
        /// Step index
        step: usize,
        /// Offending delay
        delay_ms: i64,
    },
    /// Protocol trigger points past the end of the script
    #[display("Protocol trigger {} is out of range for a script of {} steps", trigger, len)]
    TriggerOutOfRange {
        /// Trigger step index
        trigger: usize,
        /// Script length
        len: usize,
    },
}

/// Error type for script operations.
///
/// # Examples
///
/// ```
/// use gibberlink_error::{ScriptError, ScriptErrorKind};
///
/// let err = ScriptError::new(ScriptErrorKind::EmptyText { step: 2 });
/// assert!(format!("{}", err).contains("empty text"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Script Error: {} at line {} in {}", kind, line, file)]
pub struct ScriptError {
    /// The specific error condition
    pub kind: ScriptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScriptError {
    /// Create a new ScriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScriptErrorKind {
        &self.kind
    }
}

/// Result type for script operations.
pub type ScriptResult<T> = Result<T, ScriptError>;
