//! HTTP-level integration tests for the four CRUD resources.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::{header, StatusCode};
use common::{body_bytes, body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Lead CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_lead_returns_201_with_location(pool: SqlitePool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/lead",
        json!({"Nome": "Ana", "Email": "a@x.com", "Telefone": "123", "CPF": "111"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();
    let created = body_json(response).await;
    let id = created["Id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/lead/id/{id}"));

    let response = get(build_test_app(pool), &location).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["Id"], id);
    assert_eq!(json["Nome"], "Ana");
    assert_eq!(json["Email"], "a@x.com");
    assert_eq!(json["Telefone"], "123");
    assert_eq!(json["CPF"], "111");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_lead_accepts_camel_case(pool: SqlitePool) {
    let response = post_json(
        build_test_app(pool),
        "/api/lead",
        json!({"nome": "Bia", "email": "b@x.com", "telefone": "456", "cpf": "222"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["Nome"], "Bia");
    assert_eq!(json["CPF"], "222");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_leads_empty_is_200(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api/lead").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_leads(pool: SqlitePool) {
    common::create_lead(&pool, "Ana", "1").await;
    common::create_lead(&pool, "Bia", "2").await;

    let response = get(build_test_app(pool), "/api/lead").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["Nome"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana", "Bia"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_lead_returns_204_and_replaces(pool: SqlitePool) {
    let id = common::create_lead(&pool, "Ana", "111").await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/lead/id/{id}"),
        json!({"Nome": "Ana Maria", "Email": "am@x.com", "Telefone": "999", "CPF": "333"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let json = body_json(get(build_test_app(pool), &format!("/api/lead/id/{id}")).await).await;
    assert_eq!(json["Nome"], "Ana Maria");
    assert_eq!(json["Email"], "am@x.com");
    assert_eq!(json["Telefone"], "999");
    assert_eq!(json["CPF"], "333");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_lead_returns_404(pool: SqlitePool) {
    let response = put_json(
        build_test_app(pool.clone()),
        "/api/lead/id/999999",
        json!({"Nome": "X", "Email": "x@x.com", "Telefone": "1", "CPF": "1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Nothing was created as a side effect.
    let json = body_json(get(build_test_app(pool), "/api/lead").await).await;
    assert_eq!(json, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_lead_returns_204_then_404(pool: SqlitePool) {
    let id = common::create_lead(&pool, "Ana", "111").await;

    let response = delete(build_test_app(pool.clone()), &format!("/api/lead/id/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool.clone()), &format!("/api/lead/id/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(build_test_app(pool), &format!("/api/lead/id/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_lead_returns_404(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api/lead/id/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Lead with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Oferta CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_oferta_crud_cycle(pool: SqlitePool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/oferta",
        json!({"Nome": "Direito", "Descricao": "Bacharelado", "VagasDisponiveis": 40}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["Id"].as_i64().unwrap();
    assert_eq!(created["VagasDisponiveis"], 40);

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/oferta/id/{id}"),
        json!({"Nome": "Direito", "Descricao": "Noturno", "VagasDisponiveis": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(build_test_app(pool.clone()), &format!("/api/oferta/id/{id}")).await).await;
    assert_eq!(json["Descricao"], "Noturno");
    assert_eq!(json["VagasDisponiveis"], 0);

    let response = delete(build_test_app(pool.clone()), &format!("/api/oferta/id/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool), &format!("/api/oferta/id/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_oferta_negative_slots_accepted(pool: SqlitePool) {
    let response = post_json(
        build_test_app(pool),
        "/api/oferta",
        json!({"Nome": "Fisica", "Descricao": "Licenciatura", "VagasDisponiveis": -5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["VagasDisponiveis"], -5);
}

// ---------------------------------------------------------------------------
// ProcessoSeletivo CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_processo_seletivo_crud_cycle(pool: SqlitePool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/processoseletivo",
        json!({
            "Nome": "Vestibular 2025",
            "DataInicio": "2024-09-01T00:00:00Z",
            "DataTermino": "2024-12-15T00:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();
    let created = body_json(response).await;
    let id = created["Id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/processoseletivo/id/{id}"));

    let json = body_json(get(build_test_app(pool.clone()), &location).await).await;
    assert_eq!(json["Nome"], "Vestibular 2025");
    assert_eq!(json["DataInicio"], created["DataInicio"]);
    assert_eq!(json["DataTermino"], created["DataTermino"]);
    assert!(json["DataInicio"].as_str().unwrap().starts_with("2024-09-01T00:00:00"));

    // End before start is accepted.
    let response = put_json(
        build_test_app(pool.clone()),
        &location,
        json!({
            "Nome": "Vestibular 2025",
            "DataInicio": "2024-09-01T00:00:00Z",
            "DataTermino": "2024-01-01T00:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(build_test_app(pool.clone()), &location).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(build_test_app(pool), &location).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_processo_returns_404(pool: SqlitePool) {
    let response = put_json(
        build_test_app(pool),
        "/api/processoseletivo/id/424242",
        json!({
            "Nome": "Nada",
            "DataInicio": "2024-09-01T00:00:00Z",
            "DataTermino": "2025-09-01T00:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Inscricao CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_inscricao_crud_cycle(pool: SqlitePool) {
    let lead_id = common::create_lead(&pool, "Ana", "111").await;
    let oferta_id = common::create_oferta(&pool, "Direito").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/inscricao",
        json!({
            "NumeroDeInscricao": "2024-0042",
            "Status": "Pendente",
            "LeadId": lead_id,
            "ProcessoSeletivoId": 7,
            "OfertaId": oferta_id,
            "Data": "1999-01-01T00:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["Id"].as_i64().unwrap();
    assert_eq!(created["NumeroDeInscricao"], "2024-0042");
    assert_eq!(created["ProcessoSeletivoId"], 7);
    assert!(created["Lead"].is_null());
    assert!(created["Oferta"].is_null());
    // The server stamps the creation date; the client value is ignored.
    assert!(!created["Data"].as_str().unwrap().starts_with("1999"));

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/inscricao/id/{id}"),
        json!({
            "NumeroDeInscricao": "2024-0042",
            "Status": "Aprovada",
            "LeadId": lead_id,
            "ProcessoSeletivoId": 8,
            "OfertaId": oferta_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(build_test_app(pool.clone()), &format!("/api/inscricao/id/{id}")).await).await;
    assert_eq!(json["Status"], "Aprovada");
    assert_eq!(json["ProcessoSeletivoId"], 8);
    assert_eq!(json["Data"], created["Data"]);

    let response = delete(build_test_app(pool.clone()), &format!("/api/inscricao/id/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(build_test_app(pool), &format!("/api/inscricao/id/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_inscricoes_empty_is_200(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api/inscricao").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
