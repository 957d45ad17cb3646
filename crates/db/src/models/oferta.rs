//! Oferta (course offering) model and DTOs.

use crm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `Ofertas` table.
///
/// `VagasDisponiveis` is informational; creating an inscricao does not
/// decrement it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Oferta {
    pub id: DbId,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub vagas_disponiveis: i32,
}

/// Body for creating or replacing an oferta.
///
/// `VagasDisponiveis` must be present but any integer is accepted,
/// including zero and negative values.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOferta {
    #[serde(alias = "nome")]
    #[validate(length(min = 1))]
    pub nome: String,
    #[serde(alias = "descricao")]
    #[validate(length(min = 1))]
    pub descricao: String,
    #[serde(alias = "vagasDisponiveis")]
    pub vagas_disponiveis: i32,
}
