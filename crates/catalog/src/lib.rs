//! Catalog service.
//!
//! This crate hosts the product update coordinator: the one place in the
//! system where state mutation, conditional business logic, and asynchronous
//! messaging intersect. The store and publisher are external collaborators
//! injected at construction; the service owns neither.

pub mod error;
pub mod service;

pub use common::ProductId;
pub use error::CatalogError;
pub use service::CatalogService;
