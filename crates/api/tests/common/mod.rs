#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use crm_api::config::ServerConfig;
use crm_api::router::build_app_router;
use crm_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_lead(pool: &SqlitePool, nome: &str, cpf: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/lead",
        serde_json::json!({
            "Nome": nome,
            "Email": "lead@example.com",
            "Telefone": "123",
            "CPF": cpf,
        }),
    )
    .await;
    body_json(response).await["Id"].as_i64().unwrap()
}

pub async fn create_oferta(pool: &SqlitePool, nome: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/oferta",
        serde_json::json!({
            "Nome": nome,
            "Descricao": "Graduacao",
            "VagasDisponiveis": 30,
        }),
    )
    .await;
    body_json(response).await["Id"].as_i64().unwrap()
}

pub async fn create_inscricao(pool: &SqlitePool, lead_id: i64, oferta_id: i64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/inscricao",
        serde_json::json!({
            "NumeroDeInscricao": "2024-0001",
            "Status": "Pendente",
            "LeadId": lead_id,
            "ProcessoSeletivoId": 1,
            "OfertaId": oferta_id,
        }),
    )
    .await;
    body_json(response).await["Id"].as_i64().unwrap()
}
