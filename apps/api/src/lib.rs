//! Agri value chain API library
//!
//! CRUD over the product and certification collections: domain types,
//! document repositories, and the axum router that exposes them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
