// Repository ports (implemented in infrastructure)

pub mod document_repository;

pub use document_repository::{DocumentRepository, RepositoryError};
