//! Repository for the `Inscricoes` table.

use crm_core::types::{DbId, Timestamp};

use crate::models::inscricao::{CreateInscricao, Inscricao, InscricaoWithLead, InscricaoWithOferta};
use crate::DbPool;

const COLUMNS: &str = "Id, NumeroDeInscricao, Data, Status, LeadId, ProcessoSeletivoId, OfertaId";

/// Inscricao columns qualified with the `i` alias, for joined queries.
const JOINED_COLUMNS: &str = "i.Id AS Id, i.NumeroDeInscricao AS NumeroDeInscricao, \
     i.Data AS Data, i.Status AS Status, i.LeadId AS LeadId, \
     i.ProcessoSeletivoId AS ProcessoSeletivoId, i.OfertaId AS OfertaId";

/// Provides CRUD operations and filtered lookups for inscricoes.
///
/// `LeadId` and `OfertaId` are checked by the database's foreign keys;
/// `ProcessoSeletivoId` is stored as given.
pub struct InscricaoRepo;

impl InscricaoRepo {
    /// Insert a new inscricao stamped with creation date `now`.
    pub async fn create(
        pool: &DbPool,
        input: &CreateInscricao,
        now: Timestamp,
    ) -> Result<Inscricao, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO Inscricoes
                (NumeroDeInscricao, Data, Status, LeadId, ProcessoSeletivoId, OfertaId)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        let inscricao = sqlx::query_as::<_, Inscricao>(&query)
            .bind(&input.numero_de_inscricao)
            .bind(now)
            .bind(&input.status)
            .bind(input.lead_id)
            .bind(input.processo_seletivo_id)
            .bind(input.oferta_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(inscricao)
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Inscricao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Inscricoes WHERE Id = ?1");
        sqlx::query_as::<_, Inscricao>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Inscricao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Inscricoes ORDER BY Id");
        sqlx::query_as::<_, Inscricao>(&query).fetch_all(pool).await
    }

    /// All inscricoes whose lead has the given CPF, each with its `Lead`
    /// populated. Several leads may share a CPF.
    pub async fn list_by_lead_cpf(pool: &DbPool, cpf: &str) -> Result<Vec<Inscricao>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS},
                    l.Id AS Lead_Id, l.Nome AS Lead_Nome, l.Email AS Lead_Email,
                    l.Telefone AS Lead_Telefone, l.CPF AS Lead_CPF
             FROM Inscricoes i
             JOIN Leads l ON l.Id = i.LeadId
             WHERE l.CPF = ?1
             ORDER BY i.Id"
        );
        let rows = sqlx::query_as::<_, InscricaoWithLead>(&query)
            .bind(cpf)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|row| row.0).collect())
    }

    /// All inscricoes for the given oferta, each with its `Oferta` populated.
    pub async fn list_by_oferta_id(
        pool: &DbPool,
        oferta_id: DbId,
    ) -> Result<Vec<Inscricao>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS},
                    o.Id AS Oferta_Id, o.Nome AS Oferta_Nome, o.Descricao AS Oferta_Descricao,
                    o.VagasDisponiveis AS Oferta_VagasDisponiveis
             FROM Inscricoes i
             JOIN Ofertas o ON o.Id = i.OfertaId
             WHERE o.Id = ?1
             ORDER BY i.Id"
        );
        let rows = sqlx::query_as::<_, InscricaoWithOferta>(&query)
            .bind(oferta_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|row| row.0).collect())
    }

    /// Overwrite number, status and the three references. `Data` keeps its
    /// original value.
    ///
    /// Returns `None` if the inscricao does not exist.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &CreateInscricao,
    ) -> Result<Option<Inscricao>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE Inscricoes SET
                NumeroDeInscricao = ?2,
                Status = ?3,
                LeadId = ?4,
                ProcessoSeletivoId = ?5,
                OfertaId = ?6
             WHERE Id = ?1
             RETURNING {COLUMNS}"
        );
        let inscricao = sqlx::query_as::<_, Inscricao>(&query)
            .bind(id)
            .bind(&input.numero_de_inscricao)
            .bind(&input.status)
            .bind(input.lead_id)
            .bind(input.processo_seletivo_id)
            .bind(input.oferta_id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(inscricao)
    }

    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM Inscricoes WHERE Id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::debug!(inscricao_id = id, removed = result.rows_affected(), "Inscricao delete");
        Ok(result.rows_affected() > 0)
    }
}
