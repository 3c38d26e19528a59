// Domain layer module exports
// Entities and the persistence port; independent of axum and sqlx

pub mod certification;
pub mod collection;
pub mod product;
pub mod repositories;
pub mod scalar;

pub use certification::{Certification, CertificationFields};
pub use collection::{Collection, Validate};
pub use product::{Product, ProductFields};
