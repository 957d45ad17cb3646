//! Repository for the `Ofertas` table.

use crm_core::types::DbId;

use crate::models::oferta::{CreateOferta, Oferta};
use crate::DbPool;

const COLUMNS: &str = "Id, Nome, Descricao, VagasDisponiveis";

/// Provides CRUD operations for ofertas.
pub struct OfertaRepo;

impl OfertaRepo {
    /// Insert a new oferta, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateOferta) -> Result<Oferta, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO Ofertas (Nome, Descricao, VagasDisponiveis)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        let oferta = sqlx::query_as::<_, Oferta>(&query)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(input.vagas_disponiveis)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(oferta)
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Oferta>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Ofertas WHERE Id = ?1");
        sqlx::query_as::<_, Oferta>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Oferta>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM Ofertas ORDER BY Id");
        sqlx::query_as::<_, Oferta>(&query).fetch_all(pool).await
    }

    /// Overwrite every field of an oferta. Returns `None` if it does not exist.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &CreateOferta,
    ) -> Result<Option<Oferta>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE Ofertas SET
                Nome = ?2,
                Descricao = ?3,
                VagasDisponiveis = ?4
             WHERE Id = ?1
             RETURNING {COLUMNS}"
        );
        let oferta = sqlx::query_as::<_, Oferta>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(input.vagas_disponiveis)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(oferta)
    }

    /// Delete an oferta by ID, cascading to its inscricoes.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM Ofertas WHERE Id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
