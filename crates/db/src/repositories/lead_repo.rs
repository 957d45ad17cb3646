//! Repository for the `Leads` table.

use crm_core::types::DbId;

use crate::models::lead::{CreateLead, Lead};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "Id, Nome, Email, Telefone, CPF";

/// Provides CRUD operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateLead) -> Result<Lead, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO Leads (Nome, Email, Telefone, CPF)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        let lead = sqlx::query_as::<_, Lead>(&query)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.telefone)
            .bind(&input.cpf)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(lead)
    }

    /// Find a lead by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Leads WHERE Id = ?1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all leads in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Leads ORDER BY Id");
        sqlx::query_as::<_, Lead>(&query).fetch_all(pool).await
    }

    /// Overwrite every field of a lead.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &CreateLead,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE Leads SET
                Nome = ?2,
                Email = ?3,
                Telefone = ?4,
                CPF = ?5
             WHERE Id = ?1
             RETURNING {COLUMNS}"
        );
        let lead = sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.email)
            .bind(&input.telefone)
            .bind(&input.cpf)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(lead)
    }

    /// Delete a lead by ID. Its inscricoes are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM Leads WHERE Id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
