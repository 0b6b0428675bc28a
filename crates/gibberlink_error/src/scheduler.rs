//! Scheduler actor error types.

/// Specific error conditions for talking to the conversation scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SchedulerErrorKind {
    /// The scheduler actor could not be spawned
    #[display("Failed to spawn scheduler: {}", _0)]
    SpawnFailed(String),
    /// A command could not be delivered to the scheduler
    #[display("Failed to message scheduler: {}", _0)]
    MessagingFailed(String),
    /// A request/reply call was dropped before answering
    #[display("Scheduler call failed: {}", _0)]
    CallFailed(String),
    /// A request/reply call did not answer in time
    #[display("Scheduler call timed out after {}ms", _0)]
    CallTimeout(u64),
}

/// Scheduler error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Scheduler Error: {} at line {} in {}", kind, line, file)]
pub struct SchedulerError {
    /// The specific error condition
    pub kind: SchedulerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SchedulerError {
    /// Create a new scheduler error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SchedulerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SchedulerErrorKind {
        &self.kind
    }
}

/// Result type for scheduler operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
