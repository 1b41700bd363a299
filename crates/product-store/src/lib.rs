//! Product data model and persistence collaborators.
//!
//! The store is consumed by the catalog service through the [`ProductStore`]
//! trait; two implementations are provided, an in-memory store for tests/dev
//! and a PostgreSQL-backed store for deployment.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod product;
pub mod store;

pub use common::ProductId;
pub use error::{Result, StoreError};
pub use memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;
pub use product::{InvalidProduct, Product, ProductDraft};
pub use store::ProductStore;
