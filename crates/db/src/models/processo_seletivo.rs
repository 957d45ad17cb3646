//! ProcessoSeletivo (selection process) model and DTOs.

use crm_core::selection::default_window;
use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `ProcessosSeletivos` table.
///
/// Nothing enforces `DataTermino` being after `DataInicio`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct ProcessoSeletivo {
    pub id: DbId,
    pub nome: Option<String>,
    pub data_inicio: Timestamp,
    pub data_termino: Timestamp,
}

/// Body for creating or replacing a selection process.
///
/// Both dates are optional at the type level so a missing date is reported
/// as a validation failure on that field rather than a parse error.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProcessoSeletivo {
    #[serde(alias = "nome")]
    #[validate(length(min = 1))]
    pub nome: String,
    #[serde(alias = "dataInicio")]
    #[validate(required)]
    pub data_inicio: Option<Timestamp>,
    #[serde(alias = "dataTermino")]
    #[validate(required)]
    pub data_termino: Option<Timestamp>,
}

impl CreateProcessoSeletivo {
    /// Build the values to persist. Any date left out falls back to the
    /// default window for a process created at `now`.
    pub fn into_new(self, now: Timestamp) -> NewProcessoSeletivo {
        let mut new = NewProcessoSeletivo::new(self.nome, now);
        if let Some(inicio) = self.data_inicio {
            new.data_inicio = inicio;
        }
        if let Some(termino) = self.data_termino {
            new.data_termino = termino;
        }
        new
    }
}

/// Fully-resolved values for an insert or full-replace update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProcessoSeletivo {
    pub nome: String,
    pub data_inicio: Timestamp,
    pub data_termino: Timestamp,
}

impl NewProcessoSeletivo {
    /// A process opening at `now` and closing one year later.
    pub fn new(nome: impl Into<String>, now: Timestamp) -> Self {
        let (data_inicio, data_termino) = default_window(now);
        Self {
            nome: nome.into(),
            data_inicio,
            data_termino,
        }
    }
}
