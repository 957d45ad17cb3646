//! Repository for the `ProcessosSeletivos` table.

use crm_core::types::DbId;

use crate::models::processo_seletivo::{NewProcessoSeletivo, ProcessoSeletivo};
use crate::DbPool;

const COLUMNS: &str = "Id, Nome, DataInicio, DataTermino";

/// Provides CRUD operations for selection processes.
pub struct ProcessoSeletivoRepo;

impl ProcessoSeletivoRepo {
    pub async fn create(
        pool: &DbPool,
        input: &NewProcessoSeletivo,
    ) -> Result<ProcessoSeletivo, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO ProcessosSeletivos (Nome, DataInicio, DataTermino)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        let processo = sqlx::query_as::<_, ProcessoSeletivo>(&query)
            .bind(&input.nome)
            .bind(input.data_inicio)
            .bind(input.data_termino)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(processo)
    }

    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<ProcessoSeletivo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ProcessosSeletivos WHERE Id = ?1");
        sqlx::query_as::<_, ProcessoSeletivo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<ProcessoSeletivo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ProcessosSeletivos ORDER BY Id");
        sqlx::query_as::<_, ProcessoSeletivo>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite name and both dates. Returns `None` if the process does not exist.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &NewProcessoSeletivo,
    ) -> Result<Option<ProcessoSeletivo>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE ProcessosSeletivos SET
                Nome = ?2,
                DataInicio = ?3,
                DataTermino = ?4
             WHERE Id = ?1
             RETURNING {COLUMNS}"
        );
        let processo = sqlx::query_as::<_, ProcessoSeletivo>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(input.data_inicio)
            .bind(input.data_termino)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(processo)
    }

    /// Delete a selection process by ID.
    ///
    /// Inscricoes pointing at it are left untouched; there is no foreign key.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM ProcessosSeletivos WHERE Id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
