use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::collection::Collection;

/// Faults raised by a storage backend
///
/// The display text is the underlying driver message, which is what
/// clients see in a 500 response.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
}

/// Repository trait for a document collection
///
/// Defines the contract for persisting and retrieving the documents of
/// one `Collection`. Ids are assigned by the implementation on insert.
#[async_trait]
pub trait DocumentRepository<C: Collection>: Send + Sync {
    /// All documents in storage order
    async fn list(&self) -> Result<Vec<C::Record>, RepositoryError>;

    /// Find a document by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<C::Record>, RepositoryError>;

    /// Store a new document and return it with its generated id
    async fn insert(&self, fields: C::Fields) -> Result<C::Record, RepositoryError>;

    /// Overwrite the provided fields of a document
    ///
    /// Fields absent from `fields` keep their stored value. Returns `None`
    /// when no document has this id.
    async fn update(
        &self,
        id: Uuid,
        fields: C::Fields,
    ) -> Result<Option<C::Record>, RepositoryError>;

    /// Delete a document by ID, returning whether one was removed
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
