// src/api/handlers/solve.rs
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::api::AppState;
use crate::models::{ChallengeRequest, ErrorResult};
use crate::solver;

/// `POST /api/solve`. Failures are reported in the body with status 200.
pub async fn solve_challenge(
    state: web::Data<AppState>,
    req: web::Json<ChallengeRequest>,
) -> Result<HttpResponse> {
    let req_body = req.into_inner();
    let config = state.config.load();

    let response = solver::solve(&config, &state.client, &req_body).await;

    Ok(HttpResponse::Ok().json(response))
}

/// Rejects unreadable bodies with a JSON `{error}` instead of plain text.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("⚠️  Rejected request body: {}", err);

    let body = ErrorResult { error: err.to_string() };
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
