// Repository implementations (data access layer)
// Adapters that implement the domain DocumentRepository port

pub mod in_memory_document_repository;
pub mod postgres_document_repository;

pub use in_memory_document_repository::InMemoryDocumentRepository;
pub use postgres_document_repository::PostgresDocumentRepository;

use serde_json::Value;
use uuid::Uuid;

use crate::domain::repositories::RepositoryError;
use crate::domain::Collection;

/// Rebuilds a typed record from a stored JSON document
fn decode_record<C: Collection>(id: Uuid, doc: Value) -> Result<C::Record, RepositoryError> {
    let fields: C::Fields = serde_json::from_value(doc)?;
    Ok(C::record(id, fields))
}
