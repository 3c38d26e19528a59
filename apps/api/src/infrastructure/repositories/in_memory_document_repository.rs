use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::decode_record;
use crate::domain::repositories::{DocumentRepository, RepositoryError};
use crate::domain::Collection;

type Document = Map<String, Value>;

/// In-process implementation of DocumentRepository
///
/// Keeps documents in insertion order and applies updates with the same
/// key-level merge as the PostgreSQL adapter. Nothing survives a restart.
pub struct InMemoryDocumentRepository<C> {
    documents: RwLock<Vec<(Uuid, Document)>>,
    _collection: PhantomData<fn() -> C>,
}

impl<C: Collection> InMemoryDocumentRepository<C> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            _collection: PhantomData,
        }
    }
}

impl<C: Collection> Default for InMemoryDocumentRepository<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_document<C: Collection>(fields: &C::Fields) -> Result<Document, RepositoryError> {
    match serde_json::to_value(fields)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Document::new()),
    }
}

#[async_trait]
impl<C: Collection> DocumentRepository<C> for InMemoryDocumentRepository<C> {
    async fn list(&self) -> Result<Vec<C::Record>, RepositoryError> {
        let documents = self.documents.read().await;

        documents
            .iter()
            .map(|(id, doc)| decode_record::<C>(*id, Value::Object(doc.clone())))
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<C::Record>, RepositoryError> {
        let documents = self.documents.read().await;

        documents
            .iter()
            .find(|(stored, _)| *stored == id)
            .map(|(id, doc)| decode_record::<C>(*id, Value::Object(doc.clone())))
            .transpose()
    }

    async fn insert(&self, fields: C::Fields) -> Result<C::Record, RepositoryError> {
        let doc = to_document::<C>(&fields)?;
        let id = Uuid::new_v4();

        self.documents.write().await.push((id, doc.clone()));

        decode_record::<C>(id, Value::Object(doc))
    }

    async fn update(
        &self,
        id: Uuid,
        fields: C::Fields,
    ) -> Result<Option<C::Record>, RepositoryError> {
        let patch = to_document::<C>(&fields)?;
        let mut documents = self.documents.write().await;

        let Some((_, doc)) = documents.iter_mut().find(|(stored, _)| *stored == id) else {
            return Ok(None);
        };
        doc.extend(patch);

        decode_record::<C>(id, Value::Object(doc.clone())).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|(stored, _)| *stored != id);

        Ok(documents.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, ProductFields};

    fn coffee() -> ProductFields {
        ProductFields {
            name: Some("Coffee".to_string()),
            description: Some("Arabica beans".to_string()),
            image: Some("coffee.png".to_string()),
        }
    }

    #[tokio::test]
    async fn insert_then_find_returns_same_fields() {
        let repo = InMemoryDocumentRepository::<Product>::new();

        let created = repo.insert(coffee()).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created.clone()));
        assert_eq!(created.fields, coffee());
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let repo = InMemoryDocumentRepository::<Product>::new();
        assert!(repo.list().await.unwrap().is_empty());

        let first = repo.insert(coffee()).await.unwrap();
        let second = repo
            .insert(ProductFields {
                name: Some("Tea".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let ids: Vec<Uuid> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn update_overwrites_only_provided_fields() {
        let repo = InMemoryDocumentRepository::<Product>::new();
        let created = repo.insert(coffee()).await.unwrap();

        let updated = repo
            .update(
                created.id,
                ProductFields {
                    name: Some("Robusta".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("product exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields.name.as_deref(), Some("Robusta"));
        assert_eq!(updated.fields.description.as_deref(), Some("Arabica beans"));
        assert_eq!(updated.fields.image.as_deref(), Some("coffee.png"));
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let repo = InMemoryDocumentRepository::<Product>::new();

        let result = repo.update(Uuid::new_v4(), coffee()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_removed() {
        let repo = InMemoryDocumentRepository::<Product>::new();
        let created = repo.insert(coffee()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }
}
