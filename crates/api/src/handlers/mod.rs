//! Request handlers, one module per resource.
//!
//! Handlers validate the request body before touching storage, delegate to
//! the matching repository in `crm_db`, and translate absent rows into
//! [`CoreError::NotFound`](crm_core::error::CoreError::NotFound).

pub mod inscricao;
pub mod lead;
pub mod oferta;
pub mod processo_seletivo;
