//! Handlers for the `/api/oferta` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use crm_core::error::CoreError;
use crm_core::types::DbId;
use crm_db::models::oferta::{CreateOferta, Oferta};
use crm_db::repositories::OfertaRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::Created;
use crate::state::AppState;

const BASE_PATH: &str = "/api/oferta";

/// GET /api/oferta
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Oferta>>> {
    let ofertas = OfertaRepo::list(&state.pool).await?;
    Ok(Json(ofertas))
}

/// GET /api/oferta/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<Json<Oferta>> {
    let oferta = OfertaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Oferta",
            id,
        }))?;
    Ok(Json(oferta))
}

/// POST /api/oferta
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateOferta>, AppError>,
) -> AppResult<Created<Oferta>> {
    input.validate()?;
    let oferta = OfertaRepo::create(&state.pool, &input).await?;
    tracing::info!(oferta_id = oferta.id, "Oferta created");
    Ok(Created::at(BASE_PATH, oferta.id, oferta))
}

/// PUT /api/oferta/id/{id}
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<CreateOferta>, AppError>,
) -> AppResult<StatusCode> {
    input.validate()?;
    OfertaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Oferta",
            id,
        }))?;
    tracing::info!(oferta_id = id, "Oferta updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/oferta/id/{id}
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<StatusCode> {
    let deleted = OfertaRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(oferta_id = id, "Oferta deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Oferta",
            id,
        }))
    }
}
