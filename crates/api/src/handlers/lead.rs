//! Handlers for the `/api/lead` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use crm_core::error::CoreError;
use crm_core::types::DbId;
use crm_db::models::lead::{CreateLead, Lead};
use crm_db::repositories::LeadRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::Created;
use crate::state::AppState;

const BASE_PATH: &str = "/api/lead";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Lead", id })
}

/// GET /api/lead
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Lead>>> {
    let leads = LeadRepo::list(&state.pool).await?;
    Ok(Json(leads))
}

/// GET /api/lead/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<Json<Lead>> {
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(lead))
}

/// POST /api/lead
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateLead>, AppError>,
) -> AppResult<Created<Lead>> {
    input.validate()?;
    let lead = LeadRepo::create(&state.pool, &input).await?;
    tracing::info!(lead_id = lead.id, "Lead created");
    Ok(Created::at(BASE_PATH, lead.id, lead))
}

/// PUT /api/lead/id/{id}
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<CreateLead>, AppError>,
) -> AppResult<StatusCode> {
    input.validate()?;
    LeadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(lead_id = id, "Lead updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/lead/id/{id}
///
/// Also removes every inscricao of the lead.
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<StatusCode> {
    if LeadRepo::delete(&state.pool, id).await? {
        tracing::info!(lead_id = id, "Lead deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
