use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::decode_record;
use crate::domain::repositories::{DocumentRepository, RepositoryError};
use crate::domain::Collection;

/// PostgreSQL implementation of DocumentRepository
///
/// Each collection is a table of `(id, seq, doc)` where `doc` is a JSONB
/// document. `seq` only records insertion order for listing. Tables are
/// created by `database::ensure_collections`.
pub struct PostgresDocumentRepository<C> {
    pool: PgPool,
    _collection: PhantomData<fn() -> C>,
}

impl<C: Collection> PostgresDocumentRepository<C> {
    /// Creates a new PostgresDocumentRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _collection: PhantomData,
        }
    }
}

#[async_trait]
impl<C: Collection> DocumentRepository<C> for PostgresDocumentRepository<C> {
    async fn list(&self) -> Result<Vec<C::Record>, RepositoryError> {
        let sql = format!("SELECT id, doc FROM {} ORDER BY seq", C::NAME);
        let rows: Vec<(Uuid, Json<Value>)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|(id, Json(doc))| decode_record::<C>(id, doc))
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<C::Record>, RepositoryError> {
        let sql = format!("SELECT id, doc FROM {} WHERE id = $1", C::NAME);
        let row: Option<(Uuid, Json<Value>)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(id, Json(doc))| decode_record::<C>(id, doc))
            .transpose()
    }

    async fn insert(&self, fields: C::Fields) -> Result<C::Record, RepositoryError> {
        let doc = serde_json::to_value(&fields)?;
        let sql = format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2) RETURNING id, doc",
            C::NAME
        );
        let (id, Json(doc)): (Uuid, Json<Value>) = sqlx::query_as(&sql)
            .bind(Uuid::new_v4())
            .bind(Json(doc))
            .fetch_one(&self.pool)
            .await?;

        decode_record::<C>(id, doc)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: C::Fields,
    ) -> Result<Option<C::Record>, RepositoryError> {
        // `||` keeps stored keys that the patch does not carry
        let patch = serde_json::to_value(&fields)?;
        let sql = format!(
            "UPDATE {} SET doc = doc || $2 WHERE id = $1 RETURNING id, doc",
            C::NAME
        );
        let row: Option<(Uuid, Json<Value>)> = sqlx::query_as(&sql)
            .bind(id)
            .bind(Json(patch))
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(id, Json(doc))| decode_record::<C>(id, doc))
            .transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", C::NAME);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}
