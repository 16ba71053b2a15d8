// src/providers/mod.rs

use serde::Serialize;

use crate::errors::Result;

pub mod openai;
pub mod registry;

pub use openai::OpenAICompatibleClient;
pub use registry::{ProviderConfig, ProviderKind, resolve_provider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message of a chat-completion exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Capability shared by every backend reachable through the OpenAI
/// chat-completions API shape.
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait CompletionClient: Send + Sync {
    /// Issues a single chat-completion call and returns the text of the
    /// first choice.
    ///
    /// # Arguments
    /// * `provider` - Resolved credentials, endpoint and model name.
    /// * `messages` - The exchange to send, in order.
    fn complete(
        &self,
        provider: &ProviderConfig,
        messages: &[ChatMessage],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
