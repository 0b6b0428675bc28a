//! Top-level error wrapper types.

use crate::{ConfigError, SchedulerError, ScriptError};

/// Every error condition surfaced by the Gibberlink crates.
///
/// # Examples
///
/// ```
/// use gibberlink_error::{ConfigError, ConfigErrorKind, GibberlinkError};
///
/// let err: GibberlinkError = ConfigError::new(ConfigErrorKind::Parse("bad value".into())).into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GibberlinkErrorKind {
    /// Script loading or validation error
    #[from(ScriptError)]
    Script(ScriptError),
    /// Engine configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Scheduler actor error
    #[from(SchedulerError)]
    Scheduler(SchedulerError),
}

/// Gibberlink error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Gibberlink Error: {}", _0)]
pub struct GibberlinkError(Box<GibberlinkErrorKind>);

impl GibberlinkError {
    /// Create a new error from a kind.
    pub fn new(kind: GibberlinkErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GibberlinkErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GibberlinkErrorKind
impl<T> From<T> for GibberlinkError
where
    T: Into<GibberlinkErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Gibberlink operations.
pub type GibberlinkResult<T> = std::result::Result<T, GibberlinkError>;
