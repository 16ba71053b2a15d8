// src/models.rs
use serde::{Deserialize, Serialize};

/// Value of `plan` and `remarks` in every successful response.
pub const PLACEHOLDER: &str = "NONE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub challenge: String,
    pub context: String,
    pub mode: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub challenge: String,
    /// The full model output, unparsed.
    pub analysis: String,
    pub plan: String,
    pub remarks: String,
}

impl CompletionResult {
    pub fn new(challenge: impl Into<String>, analysis: impl Into<String>) -> Self {
        Self {
            challenge: challenge.into(),
            analysis: analysis.into(),
            plan: PLACEHOLDER.to_string(),
            remarks: PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

/// Body of every `/api/solve` answer; callers tell the two apart by the
/// presence of `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    Success(CompletionResult),
    Error(ErrorResult),
}

impl SolveResponse {
    pub fn error(message: impl Into<String>) -> Self {
        SolveResponse::Error(ErrorResult { error: message.into() })
    }
}
