//! Handlers for the `/api/inscricao` resource, including the lookups by
//! lead CPF and by oferta.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use chrono::Utc;
use crm_core::error::CoreError;
use crm_core::types::DbId;
use crm_db::models::inscricao::{CreateInscricao, Inscricao};
use crm_db::repositories::InscricaoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::Created;
use crate::state::AppState;

const BASE_PATH: &str = "/api/inscricao";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Inscricao",
        id,
    })
}

/// Empty filtered lookups are reported as 404, not as an empty array.
fn non_empty(inscricoes: Vec<Inscricao>, key: String) -> AppResult<Vec<Inscricao>> {
    if inscricoes.is_empty() {
        return Err(AppError::Core(CoreError::NotFoundBy {
            entity: "Inscricao",
            key,
        }));
    }
    Ok(inscricoes)
}

/// GET /api/inscricao
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Inscricao>>> {
    let inscricoes = InscricaoRepo::list(&state.pool).await?;
    Ok(Json(inscricoes))
}

/// GET /api/inscricao/id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<Json<Inscricao>> {
    let inscricao = InscricaoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(inscricao))
}

/// GET /api/inscricao/cpf/{cpf}
///
/// Each result carries its `Lead`.
pub async fn list_by_lead_cpf(
    State(state): State<AppState>,
    WithRejection(Path(cpf), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Vec<Inscricao>>> {
    let inscricoes = InscricaoRepo::list_by_lead_cpf(&state.pool, &cpf).await?;
    let inscricoes = non_empty(inscricoes, format!("CPF={cpf}"))?;
    Ok(Json(inscricoes))
}

/// GET /api/inscricao/oferta/{id}
///
/// Each result carries its `Oferta`.
pub async fn list_by_oferta_id(
    State(state): State<AppState>,
    WithRejection(Path(oferta_id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<Json<Vec<Inscricao>>> {
    let inscricoes = InscricaoRepo::list_by_oferta_id(&state.pool, oferta_id).await?;
    let inscricoes = non_empty(inscricoes, format!("OfertaId={oferta_id}"))?;
    Ok(Json(inscricoes))
}

/// POST /api/inscricao
///
/// The referenced lead, oferta and processo seletivo are not looked up
/// first. An unknown `LeadId` or `OfertaId` is refused by the database's
/// foreign keys (400); an unknown `ProcessoSeletivoId` is stored as given.
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateInscricao>, AppError>,
) -> AppResult<Created<Inscricao>> {
    input.validate()?;
    let inscricao = InscricaoRepo::create(&state.pool, &input, Utc::now()).await?;
    tracing::info!(
        inscricao_id = inscricao.id,
        lead_id = inscricao.lead_id,
        oferta_id = inscricao.oferta_id,
        "Inscricao created"
    );
    Ok(Created::at(BASE_PATH, inscricao.id, inscricao))
}

/// PUT /api/inscricao/id/{id}
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<CreateInscricao>, AppError>,
) -> AppResult<StatusCode> {
    input.validate()?;
    InscricaoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(inscricao_id = id, "Inscricao updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/inscricao/id/{id}
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<DbId>, AppError>,
) -> AppResult<StatusCode> {
    if InscricaoRepo::delete(&state.pool, id).await? {
        tracing::info!(inscricao_id = id, "Inscricao deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
