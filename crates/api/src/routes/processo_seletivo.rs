//! Route definitions for the `/api/processoseletivo` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::processo_seletivo;
use crate::state::AppState;

/// Routes mounted at `/api/processoseletivo`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /id/{id}   -> get_by_id
/// PUT    /id/{id}   -> update
/// DELETE /id/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(processo_seletivo::list).post(processo_seletivo::create))
        .route(
            "/id/{id}",
            get(processo_seletivo::get_by_id)
                .put(processo_seletivo::update)
                .delete(processo_seletivo::delete),
        )
}
