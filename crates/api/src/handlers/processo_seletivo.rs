//! Handlers for the `/api/processoseletivo` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use chrono::Utc;
use crm_core::error::CoreError;
use crm_core::types::DbId;
use crm_db::models::processo_seletivo::{CreateProcessoSeletivo, ProcessoSeletivo};
use crm_db::repositories::ProcessoSeletivoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::Created;
use crate::state::AppState;

const BASE_PATH: &str = "/api/processoseletivo";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ProcessoSeletivo",
        id,
    })
}

/// GET /api/processoseletivo
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProcessoSeletivo>>> {
    let processos = ProcessoSeletivoRepo::list(&state.pool).await?;
    Ok(Json(processos))
}

/// GET /api/processoseletivo/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<Json<ProcessoSeletivo>> {
    let processo = ProcessoSeletivoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(processo))
}

/// POST /api/processoseletivo
///
/// No check that `DataTermino` falls after `DataInicio`.
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateProcessoSeletivo>, AppError>,
) -> AppResult<Created<ProcessoSeletivo>> {
    input.validate()?;
    let new = input.into_new(Utc::now());
    let processo = ProcessoSeletivoRepo::create(&state.pool, &new).await?;
    tracing::info!(processo_seletivo_id = processo.id, "ProcessoSeletivo created");
    Ok(Created::at(BASE_PATH, processo.id, processo))
}

/// PUT /api/processoseletivo/id/{id}
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<CreateProcessoSeletivo>, AppError>,
) -> AppResult<StatusCode> {
    input.validate()?;
    let replacement = input.into_new(Utc::now());
    ProcessoSeletivoRepo::update(&state.pool, id, &replacement)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(processo_seletivo_id = id, "ProcessoSeletivo updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/processoseletivo/id/{id}
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<StatusCode> {
    if ProcessoSeletivoRepo::delete(&state.pool, id).await? {
        tracing::info!(processo_seletivo_id = id, "ProcessoSeletivo deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
