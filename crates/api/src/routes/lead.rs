//! Route definitions for the `/api/lead` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::lead;
use crate::state::AppState;

/// Routes mounted at `/api/lead`.
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
        .route("/", get(lead::list).post(lead::create))
        .route(
            "/id/{id}",
            get(lead::get_by_id)
                .put(lead::update)
                .delete(lead::delete),
        )
}
