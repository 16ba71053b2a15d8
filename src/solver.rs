// src/solver.rs
use std::time::Instant;

use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{ChallengeRequest, CompletionResult, SolveResponse};
use crate::prompts::resolve_prompt;
use crate::providers::{ChatMessage, CompletionClient, resolve_provider};

/// Renders the user turn sent alongside the system prompt.
pub fn user_message(challenge: &str, context: &str) -> String {
    format!("Challenge: {}\nContext: {}", challenge, context)
}

/// The two-message exchange for one challenge.
pub fn build_messages(system_prompt: &str, req: &ChallengeRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt),
        ChatMessage::user(user_message(&req.challenge, &req.context)),
    ]
}

/// Resolves prompt and provider, then issues exactly one completion call.
pub async fn try_solve<C: CompletionClient>(
    config: &AppConfig,
    client: &C,
    req: &ChallengeRequest,
) -> Result<CompletionResult> {
    let system_prompt = resolve_prompt(&req.mode)?;
    let provider = resolve_provider(&req.model, config)?;

    log::info!(
        "mode: {}, model: {} -> {} ({})",
        req.mode,
        provider.provider,
        provider.model_name,
        provider.endpoint()
    );

    let messages = build_messages(system_prompt, req);
    let analysis = client.complete(&provider, &messages).await?;

    Ok(CompletionResult::new(req.challenge.clone(), analysis))
}

/// Handles one challenge. Every failure is folded into the error variant.
pub async fn solve<C: CompletionClient>(
    config: &AppConfig,
    client: &C,
    req: &ChallengeRequest,
) -> SolveResponse {
    let request_id = Uuid::new_v4();
    let start = Instant::now();

    log::info!(
        "🎯 [{}] solve requested_mode: {}, requested_model: {}",
        request_id,
        req.mode,
        req.model
    );

    match try_solve(config, client, req).await {
        Ok(result) => {
            log::info!(
                "✅ [{}] solved in {}ms ({} chars)",
                request_id,
                start.elapsed().as_millis(),
                result.analysis.len()
            );
            SolveResponse::Success(result)
        }
        Err(e) => {
            if e.is_upstream() {
                log::error!("❌ [{}] upstream failure: {}", request_id, e);
            } else {
                log::warn!("⚠️  [{}] rejected request: {}", request_id, e);
            }
            SolveResponse::error(e.to_string())
        }
    }
}
