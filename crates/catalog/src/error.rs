//! Catalog error types.

use events::PublishError;
use product_store::{InvalidProduct, StoreError};
use thiserror::Error;

use crate::ProductId;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested identity does not resolve to a product.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The submitted field values violate a product invariant.
    #[error("Invalid product: {0}")]
    Invalid(#[from] InvalidProduct),

    /// The store write failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The event bus was unreachable or rejected the message.
    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),
}
