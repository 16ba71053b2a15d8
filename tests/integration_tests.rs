// tests/integration_tests.rs
use actix_web::http::{Method, StatusCode};
use actix_web::{test, web, App};
use challenge_solver::api::{self, configure_routes, AppState};
use challenge_solver::config::AppConfig;
use challenge_solver::prompts::PLAN_SYSTEM_PROMPT;
use mockito::Matcher;
use serde_json::{json, Value};

fn config_pointing_at(url: &str) -> AppConfig {
    AppConfig {
        gemini_api_key: "gem-key".to_string(),
        gemini_endpoint: Some(url.to_string()),
        groq_api_key: "groq-key".to_string(),
        groq_endpoint: Some(url.to_string()),
        openai_api_key: "oa-key".to_string(),
        openai_endpoint: Some(url.to_string()),
    }
}

macro_rules! app {
    ($config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::fixed($config)))
                .wrap(api::cors())
                .configure(configure_routes),
        )
        .await
    };
}

fn solve_request(body: Value) -> test::TestRequest {
    test::TestRequest::post().uri("/api/solve").set_json(body)
}

#[actix_web::test]
async fn test_solve_relays_to_selected_provider() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer gem-key")
        .match_body(Matcher::Json(json!({
            "model": "gemini-2.0-flash",
            "messages": [
                {"role": "system", "content": PLAN_SYSTEM_PROMPT},
                {"role": "user", "content": "Challenge: Legacy code\nContext: No tests"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"1. Analysis of the Challenge ..."}}]}"#)
        .create_async()
        .await;

    let app = app!(config_pointing_at(&server.url()));
    let body: Value = test::call_and_read_body_json(
        &app,
        solve_request(json!({
            "challenge": "Legacy code",
            "context": "No tests",
            "mode": "plan",
            "model": "gemini_flash"
        })).to_request(),
    )
    .await;

    assert_eq!(
        body,
        json!({
            "challenge": "Legacy code",
            "analysis": "1. Analysis of the Challenge ...",
            "plan": "NONE",
            "remarks": "NONE"
        })
    );
    mock.assert_async().await;
}

#[actix_web::test]
async fn test_invalid_model_returns_error_object() {
    let app = app!(AppConfig::default());
    let resp = test::call_service(
        &app,
        solve_request(json!({"challenge": "c", "context": "ctx", "mode": "plan", "model": "claude"})).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Invalid model: claude"}));
}

#[actix_web::test]
async fn test_invalid_mode_returns_error_object() {
    let app = app!(AppConfig::default());
    let body: Value = test::call_and_read_body_json(
        &app,
        solve_request(json!({"challenge": "c", "context": "ctx", "mode": "essay", "model": "openai"})).to_request(),
    )
    .await;

    assert_eq!(body, json!({"error": "Invalid mode: essay"}));
}

#[actix_web::test]
async fn test_upstream_rejection_returns_error_object() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"invalid api key"}}"#)
        .create_async()
        .await;

    let app = app!(config_pointing_at(&server.url()));
    let resp = test::call_service(
        &app,
        solve_request(json!({"challenge": "c", "context": "ctx", "mode": "prompt", "model": "groq_llama_4"})).to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("401"));
    assert!(error.contains("invalid api key"));
    assert!(body.get("analysis").is_none());
}

#[actix_web::test]
async fn test_missing_field_is_rejected_as_json() {
    let app = app!(AppConfig::default());
    let resp = test::call_service(&app, solve_request(json!({"challenge": "c", "mode": "plan"})).to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("context"));
}

#[actix_web::test]
async fn test_health_check() {
    let app = app!(AppConfig::default());
    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/health").to_request()).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "challenge-solver");
}

#[actix_web::test]
async fn test_models_and_modes_listing() {
    let app = app!(AppConfig::default());

    let models: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/models").to_request()).await;
    assert_eq!(
        models,
        json!({"models": [
            {"id": "gemini_flash", "model": "gemini-2.0-flash"},
            {"id": "groq_llama_4", "model": "meta-llama/llama-4-maverick-17b-128e-instruct"},
            {"id": "openai", "model": "o4-mini"}
        ]})
    );

    let modes: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/modes").to_request()).await;
    assert_eq!(modes, json!({"modes": ["plan", "prompt"]}));
}

#[actix_web::test]
async fn test_cors_allows_any_origin() {
    let app = app!(AppConfig::default());
    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/solve")
        .insert_header(("Origin", "http://localhost:5173"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .insert_header(("Access-Control-Request-Headers", "content-type"))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}
