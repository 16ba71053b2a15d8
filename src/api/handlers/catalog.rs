// src/api/handlers/catalog.rs
use actix_web::{HttpResponse, Result};
use serde::Serialize;

use crate::prompts::Mode;
use crate::providers::ProviderKind;

#[derive(Serialize)]
pub struct ModelEntry {
    pub id: &'static str,
    pub model: &'static str,
}

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelEntry>,
}

#[derive(Serialize)]
pub struct ModesResponse {
    pub modes: Vec<&'static str>,
}

pub async fn get_models() -> Result<HttpResponse> {
    let models = ProviderKind::ALL
        .iter()
        .map(|kind| ModelEntry { id: kind.id(), model: kind.model_name() })
        .collect();

    Ok(HttpResponse::Ok().json(ModelsResponse { models }))
}

pub async fn get_modes() -> Result<HttpResponse> {
    let modes = Mode::ALL.iter().map(|mode| mode.as_str()).collect();

    Ok(HttpResponse::Ok().json(ModesResponse { modes }))
}
