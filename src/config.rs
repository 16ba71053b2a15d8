// src/config.rs
use crate::errors::{Result, SolveError};

/// Credentials and endpoints for every supported provider.
///
/// Missing keys are kept as empty strings and handed to the upstream API
/// unchanged, so a missing credential surfaces as an authentication failure
/// on the request that needed it rather than at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_endpoint: Option<String>,
    pub groq_api_key: String,
    pub groq_endpoint: Option<String>,
    pub openai_api_key: String,
    pub openai_endpoint: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = |name: &str| lookup(name).unwrap_or_default();
        let endpoint = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        AppConfig {
            gemini_api_key: key("GEMINI_API_KEY"),
            gemini_endpoint: endpoint("GEMINI_COMPATIBLE_OPENAI_ENDPOINT"),
            groq_api_key: key("GROQ_API_KEY"),
            groq_endpoint: endpoint("GROQ_COMPATIBLE_OPENAI_ENDPOINT"),
            openai_api_key: key("OPENAI_API_KEY"),
            openai_endpoint: endpoint("OPENAI_BASE_URL"),
        }
    }
}

/// Where the service gets its `AppConfig` from.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Re-read the process environment on every request.
    Environment,
    /// Use the same configuration for every request.
    Fixed(AppConfig),
}

impl ConfigSource {
    pub fn load(&self) -> AppConfig {
        match self {
            ConfigSource::Environment => AppConfig::from_env(),
            ConfigSource::Fixed(config) => config.clone(),
        }
    }
}

/// Address the HTTP server binds to.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| SolveError::Config(format!("invalid PORT '{}': {}", raw, e)))?,
            None => 8000,
        };

        Ok(ServerConfig { host, port })
    }
}
