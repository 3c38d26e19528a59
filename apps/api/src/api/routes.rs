//! HTTP router construction

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::health::health_check;
use super::handlers::resources::{self, Repository};
use crate::domain::{Certification, Collection, Product};
use crate::infrastructure::repositories::{InMemoryDocumentRepository, PostgresDocumentRepository};

/// Storage handles injected into the router
#[derive(Clone)]
pub struct Repositories {
    pub products: Repository<Product>,
    pub certifications: Repository<Certification>,
}

impl Repositories {
    /// Repositories backed by PostgreSQL tables
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        Self {
            products: Arc::new(PostgresDocumentRepository::<Product>::new(pool.clone())),
            certifications: Arc::new(PostgresDocumentRepository::<Certification>::new(pool)),
        }
    }

    /// Empty process-local repositories
    pub fn in_memory() -> Self {
        Self {
            products: Arc::new(InMemoryDocumentRepository::<Product>::new()),
            certifications: Arc::new(InMemoryDocumentRepository::<Certification>::new()),
        }
    }
}

/// CRUD routes of one collection, bound to its repository
fn collection_routes<C: Collection>(repo: Repository<C>) -> Router {
    Router::new()
        .route(
            &format!("/{}", C::NAME),
            get(resources::list::<C>).post(resources::create::<C>),
        )
        .route(
            &format!("/{}/:id", C::NAME),
            get(resources::get_one::<C>)
                .put(resources::update::<C>)
                .delete(resources::delete::<C>),
        )
        .with_state(repo)
}

/// Build the application router
pub fn create_router(repos: Repositories) -> Router {
    // Cross-origin requests are accepted from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(collection_routes(repos.products))
        .merge(collection_routes(repos.certifications))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
