//! Route definitions for the `/api/oferta` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::oferta;
use crate::state::AppState;

/// Routes mounted at `/api/oferta`.
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
        .route("/", get(oferta::list).post(oferta::create))
        .route(
            "/id/{id}",
            get(oferta::get_by_id)
                .put(oferta::update)
                .delete(oferta::delete),
        )
}
