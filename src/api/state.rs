// src/api/state.rs
use crate::config::{AppConfig, ConfigSource};
use crate::providers::OpenAICompatibleClient;
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub config: ConfigSource,
    pub client: OpenAICompatibleClient,
}

impl AppState {
    pub fn new(config: ConfigSource) -> Self {
        Self {
            config,
            client: OpenAICompatibleClient::new(Client::new()),
        }
    }

    /// State whose configuration never changes after construction.
    pub fn fixed(config: AppConfig) -> Self {
        Self::new(ConfigSource::Fixed(config))
    }
}
