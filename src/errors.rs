// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Invalid model: {0}")]
    InvalidProvider(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    /// Free-form failure raised by a completion client.
    #[error("{0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SolveError {
    /// True for failures raised by the outbound completion call.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            SolveError::Request(_)
                | SolveError::ApiError { .. }
                | SolveError::UnexpectedResponse(_)
                | SolveError::Upstream(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;
