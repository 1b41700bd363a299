use async_trait::async_trait;

use crate::{Product, ProductDraft, ProductId, Result};

/// Core trait for product store implementations.
///
/// The store is the persistence collaborator of the catalog service: plain
/// CRUD plus a name-substring search predicate. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Retrieves a product by identity.
    ///
    /// Returns None if no product with that identity exists.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>>;

    /// Inserts a new product built from the draft's fields.
    ///
    /// The store assigns the identity; callers never supply one.
    async fn insert(&self, draft: ProductDraft) -> Result<Product>;

    /// Persists the full current state of the given product.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound) if
    /// the product's identity does not resolve to a stored row.
    async fn update(&self, product: &Product) -> Result<()>;

    /// Removes the given product from the store.
    async fn delete(&self, product: &Product) -> Result<()>;

    /// Returns all products whose name contains `query` as a substring.
    ///
    /// Matching semantics (case folding in particular) are this
    /// implementation's contract. Results come back in store default order.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Product>>;

    /// Returns all products in store default order.
    async fn list_all(&self) -> Result<Vec<Product>>;
}
