use thiserror::Error;

use crate::ProductId;

/// Errors that can occur when interacting with the product store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The product was not found in the store.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for product store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
