/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone. The pool hands each request its own connection (and its
/// own transaction for mutations); nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: crm_db::DbPool,
}
