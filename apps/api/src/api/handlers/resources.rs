//! CRUD controller shared by every collection
//!
//! Each handler is generic over the `Collection` and receives that
//! collection's repository as router state.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::ValidatedJson;
use crate::domain::repositories::{DocumentRepository, RepositoryError};
use crate::domain::Collection;

/// Shared handle to the repository of one collection
pub type Repository<C> = Arc<dyn DocumentRepository<C>>;

fn not_found<C: Collection>() -> ApiError {
    ApiError::not_found(format!("{} not found", C::LABEL))
}

fn storage_fault<C: Collection>(err: RepositoryError) -> ApiError {
    tracing::error!(collection = C::NAME, error = %err, "storage fault");
    ApiError::from(err)
}

/// A malformed id cannot match any document
fn parse_id<C: Collection>(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| not_found::<C>())
}

/// List every document
///
/// GET /{collection}
pub async fn list<C: Collection>(
    State(repo): State<Repository<C>>,
) -> Result<Json<Vec<C::Record>>, ApiError> {
    let records = repo.list().await.map_err(storage_fault::<C>)?;

    Ok(Json(records))
}

/// Get a document by ID
///
/// GET /{collection}/:id
pub async fn get_one<C: Collection>(
    State(repo): State<Repository<C>>,
    Path(id): Path<String>,
) -> Result<Json<C::Record>, ApiError> {
    let id = parse_id::<C>(&id)?;
    let record = repo
        .find_by_id(id)
        .await
        .map_err(storage_fault::<C>)?
        .ok_or_else(not_found::<C>)?;

    Ok(Json(record))
}

/// Create a document
///
/// POST /{collection}
pub async fn create<C: Collection>(
    State(repo): State<Repository<C>>,
    ValidatedJson(fields): ValidatedJson<C::Fields>,
) -> Result<(StatusCode, Json<C::Record>), ApiError> {
    let record = repo.insert(fields).await.map_err(storage_fault::<C>)?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Overwrite the provided fields of a document
///
/// PUT /{collection}/:id
pub async fn update<C: Collection>(
    State(repo): State<Repository<C>>,
    Path(id): Path<String>,
    ValidatedJson(fields): ValidatedJson<C::Fields>,
) -> Result<Json<C::Record>, ApiError> {
    let id = parse_id::<C>(&id)?;
    let record = repo
        .update(id, fields)
        .await
        .map_err(storage_fault::<C>)?
        .ok_or_else(not_found::<C>)?;

    Ok(Json(record))
}

/// Delete a document
///
/// DELETE /{collection}/:id
pub async fn delete<C: Collection>(
    State(repo): State<Repository<C>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id::<C>(&id)?;
    let removed = repo.delete(id).await.map_err(storage_fault::<C>)?;

    if !removed {
        return Err(not_found::<C>());
    }

    Ok(Json(json!({ "message": format!("{} deleted", C::LABEL) })))
}
