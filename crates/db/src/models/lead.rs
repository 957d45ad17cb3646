//! Lead (prospective student) model and DTOs.

use crm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `Leads` table.
///
/// Neither `CPF` nor `Email` is unique.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Lead {
    pub id: DbId,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    #[serde(rename = "CPF")]
    #[sqlx(rename = "CPF")]
    pub cpf: Option<String>,
}

/// Body for creating or replacing a lead. Every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLead {
    #[serde(alias = "nome")]
    #[validate(length(min = 1))]
    pub nome: String,
    #[serde(alias = "email")]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(alias = "telefone")]
    #[validate(length(min = 1))]
    pub telefone: String,
    #[serde(rename = "CPF", alias = "cpf")]
    #[validate(length(min = 1))]
    pub cpf: String,
}
