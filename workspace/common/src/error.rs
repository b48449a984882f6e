use thiserror::Error;

/// Transport-level failures talking to the yield service.
///
/// These never reach the user verbatim; a panel turns any of them into its own
/// generic failure notice (see `SubmissionKind::failure_message`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}
