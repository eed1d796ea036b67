use std::fmt;

/// Result type for session operations
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Operations rejected by the session without any state change.
///
/// Validation failures are not errors: they come back as data
/// (`Navigation::Blocked`, `SubmitOutcome::Blocked`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A form load is already pending
    LoadInProgress,

    /// No form is loaded, or the session already ended
    NotReady,

    /// `go_next` was called on the last section
    NoNextSection,

    /// `submit` was called before reaching the last section
    NotOnLastSection,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::LoadInProgress => write!(f, "A form is already being loaded"),
            SessionError::NotReady => write!(f, "No form is ready for input"),
            SessionError::NoNextSection => write!(f, "Already on the last section"),
            SessionError::NotOnLastSection => {
                write!(f, "The form can only be submitted from the last section")
            }
        }
    }
}

impl std::error::Error for SessionError {}
