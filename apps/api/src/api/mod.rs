// API layer module (HTTP adapter over the domain repositories)

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::{create_router, Repositories};
