pub mod health;
pub mod inscricao;
pub mod lead;
pub mod oferta;
pub mod processo_seletivo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy (each resource mounted under its controller name):
///
/// ```text
/// /lead                      list, create
/// /lead/id/{id}              get, replace, delete
///
/// /oferta                    list, create
/// /oferta/id/{id}            get, replace, delete
///
/// /processoseletivo          list, create
/// /processoseletivo/id/{id}  get, replace, delete
///
/// /inscricao                 list, create
/// /inscricao/id/{id}         get, replace, delete
/// /inscricao/cpf/{cpf}       inscricoes of leads with this CPF
/// /inscricao/oferta/{id}     inscricoes of this oferta
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/lead", lead::router())
        .nest("/oferta", oferta::router())
        .nest("/processoseletivo", processo_seletivo::router())
        .nest("/inscricao", inscricao::router())
}
