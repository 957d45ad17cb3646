//! Inscricao (enrollment) model and DTOs.

use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use validator::Validate;

use crate::models::lead::Lead;
use crate::models::oferta::Oferta;

/// A row from the `Inscricoes` table.
///
/// `Lead` and `Oferta` are navigation properties: they serialize as `null`
/// unless the row was loaded through a query that joins the parent.
/// `ProcessoSeletivoId` is not checked against `ProcessosSeletivos`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Inscricao {
    pub id: DbId,
    pub numero_de_inscricao: Option<String>,
    pub data: Timestamp,
    pub status: Option<String>,
    pub lead_id: DbId,
    pub processo_seletivo_id: DbId,
    pub oferta_id: DbId,
    #[sqlx(skip)]
    pub lead: Option<Lead>,
    #[sqlx(skip)]
    pub oferta: Option<Oferta>,
}

/// Body for creating or replacing an inscricao.
///
/// `Status` is free text; no transitions are enforced. A client-supplied
/// `Data` is ignored: the creation date is always stamped by the server.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInscricao {
    #[serde(alias = "numeroDeInscricao")]
    #[validate(length(min = 1))]
    pub numero_de_inscricao: String,
    #[serde(alias = "status")]
    #[validate(length(min = 1))]
    pub status: String,
    #[serde(alias = "leadId")]
    pub lead_id: DbId,
    #[serde(alias = "processoSeletivoId")]
    pub processo_seletivo_id: DbId,
    #[serde(alias = "ofertaId")]
    pub oferta_id: DbId,
}

/// An inscricao row joined with its lead. Lead columns are aliased with a
/// `Lead_` prefix.
pub(crate) struct InscricaoWithLead(pub Inscricao);

impl<'r> FromRow<'r, SqliteRow> for InscricaoWithLead {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let mut inscricao = Inscricao::from_row(row)?;
        inscricao.lead = Some(Lead {
            id: row.try_get("Lead_Id")?,
            nome: row.try_get("Lead_Nome")?,
            email: row.try_get("Lead_Email")?,
            telefone: row.try_get("Lead_Telefone")?,
            cpf: row.try_get("Lead_CPF")?,
        });
        Ok(Self(inscricao))
    }
}

/// An inscricao row joined with its oferta. Oferta columns are aliased with
/// an `Oferta_` prefix.
pub(crate) struct InscricaoWithOferta(pub Inscricao);

impl<'r> FromRow<'r, SqliteRow> for InscricaoWithOferta {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let mut inscricao = Inscricao::from_row(row)?;
        inscricao.oferta = Some(Oferta {
            id: row.try_get("Oferta_Id")?,
            nome: row.try_get("Oferta_Nome")?,
            descricao: row.try_get("Oferta_Descricao")?,
            vagas_disponiveis: row.try_get("Oferta_VagasDisponiveis")?,
        });
        Ok(Self(inscricao))
    }
}
