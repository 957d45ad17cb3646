//! Route definitions for the `/api/inscricao` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::inscricao;
use crate::state::AppState;

/// Routes mounted at `/api/inscricao`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /id/{id}       -> get_by_id
/// PUT    /id/{id}       -> update
/// DELETE /id/{id}       -> delete
/// GET    /cpf/{cpf}     -> list_by_lead_cpf
/// GET    /oferta/{id}   -> list_by_oferta_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inscricao::list).post(inscricao::create))
        .route(
            "/id/{id}",
            get(inscricao::get_by_id)
                .put(inscricao::update)
                .delete(inscricao::delete),
        )
        .route("/cpf/{cpf}", get(inscricao::list_by_lead_cpf))
        .route("/oferta/{id}", get(inscricao::list_by_oferta_id))
}
