use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by generation and session operations.
///
/// None of these are fatal: a failed submission leaves the session as it was
/// and the user may simply submit again.
#[derive(Error, Debug)]
pub enum SermonError {
    /// Required request fields are missing. Raised before any generator runs.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote text-generation service did not answer successfully.
    #[error("Remote service error{suffix}: {message}", suffix = status_suffix(.status))]
    RemoteService { status: Option<u16>, message: String },

    /// The remote reply could not be turned into a complete sermon.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("A sermon is already being generated")]
    Busy,

    #[error("History index {index} out of range (len {len})")]
    HistoryIndexOutOfRange { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

impl SermonError {
    /// Whether resubmitting the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SermonError::RemoteService { .. }
                | SermonError::MalformedResponse(_)
                | SermonError::Timeout(_)
                | SermonError::Busy
        )
    }
}

impl From<reqwest::Error> for SermonError {
    fn from(err: reqwest::Error) -> Self {
        SermonError::RemoteService {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for SermonError {
    fn from(err: minijinja::Error) -> Self {
        SermonError::Template(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SermonError>;
