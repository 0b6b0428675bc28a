//! Engine configuration errors.

/// Ways loading or validating an engine configuration can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read or merged
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
    /// The merged sources did not deserialize into an engine configuration
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A field holds a value outside its allowed range
    #[display("Invalid value for {}: {}", field, reason)]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// What the value must satisfy
        reason: &'static str,
    },
}

/// Engine configuration error with source location.
///
/// # Examples
///
/// ```
/// use gibberlink_error::{ConfigError, ConfigErrorKind};
///
/// // A zero snapshot timeout would make every snapshot request fail at once.
/// let err = ConfigError::new(ConfigErrorKind::InvalidValue {
///     field: "snapshot_timeout_ms",
///     reason: "must be positive",
/// });
///
/// assert!(matches!(
///     err.kind(),
///     ConfigErrorKind::InvalidValue { field: "snapshot_timeout_ms", .. }
/// ));
/// assert!(err.to_string().starts_with("Configuration Error: Invalid value for snapshot_timeout_ms"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific failure
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
