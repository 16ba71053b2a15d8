// src/providers/registry.rs
use std::fmt;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::errors::{Result, SolveError};

pub const GEMINI_DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const GROQ_DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";
pub const OPENAI_DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Groq,
    OpenAI,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [ProviderKind::Gemini, ProviderKind::Groq, ProviderKind::OpenAI];

    /// Identifier callers use in the `model` request field.
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini_flash",
            ProviderKind::Groq => "groq_llama_4",
            ProviderKind::OpenAI => "openai",
        }
    }

    /// Upstream model name sent in the completion request.
    pub fn model_name(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini-2.0-flash",
            ProviderKind::Groq => "meta-llama/llama-4-maverick-17b-128e-instruct",
            ProviderKind::OpenAI => "o4-mini",
        }
    }

    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => GEMINI_DEFAULT_ENDPOINT,
            ProviderKind::Groq => GROQ_DEFAULT_ENDPOINT,
            ProviderKind::OpenAI => OPENAI_DEFAULT_ENDPOINT,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "Gemini",
            ProviderKind::Groq => "Groq",
            ProviderKind::OpenAI => "OpenAI",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProviderKind {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| SolveError::InvalidProvider(s.to_string()))
    }
}

/// Everything a completion client needs to reach one provider.
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    pub base_endpoint: Option<String>,
    pub model_name: &'static str,
}

impl ProviderConfig {
    /// The configured endpoint, or the provider's public one when unset.
    pub fn endpoint(&self) -> &str {
        self.base_endpoint
            .as_deref()
            .unwrap_or_else(|| self.provider.default_endpoint())
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("base_endpoint", &self.base_endpoint)
            .field("model_name", &self.model_name)
            .finish()
    }
}

/// Maps a model identifier to the credentials, endpoint and model name of
/// its provider.
pub fn resolve_provider(model_id: &str, config: &AppConfig) -> Result<ProviderConfig> {
    let provider: ProviderKind = model_id.parse()?;

    let (api_key, base_endpoint) = match provider {
        ProviderKind::Gemini => (&config.gemini_api_key, &config.gemini_endpoint),
        ProviderKind::Groq => (&config.groq_api_key, &config.groq_endpoint),
        ProviderKind::OpenAI => (&config.openai_api_key, &config.openai_endpoint),
    };

    Ok(ProviderConfig {
        provider,
        api_key: api_key.clone(),
        base_endpoint: base_endpoint.clone(),
        model_name: provider.model_name(),
    })
}
