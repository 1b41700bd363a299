//! Product update coordinator and the surrounding CRUD operations.

use events::{EventPublisher, PriceChanged};
use product_store::{Product, ProductDraft, ProductStore};

use crate::{CatalogError, ProductId};

/// Catalog service coordinating validation, notification, and persistence.
///
/// Both collaborators are injected at construction and owned by the caller;
/// each operation is an independent, short-lived unit of work that awaits
/// one outbound call at a time. No retries, no cross-invocation locking —
/// concurrent updates to the same product race and the last store write
/// wins, bounded only by the store's own isolation.
pub struct CatalogService<S, P> {
    store: S,
    publisher: P,
}

impl<S: ProductStore, P: EventPublisher> CatalogService<S, P> {
    /// Creates a new catalog service over the given collaborators.
    pub fn new(store: S, publisher: P) -> Self {
        Self { store, publisher }
    }

    /// Inserts a new product; the store assigns the identity.
    ///
    /// Creation never publishes a notification — price-change events exist
    /// solely for price transitions on already-persisted records.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        draft.validate()?;
        let product = self.store.insert(draft).await?;
        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Loads a product by identity.
    ///
    /// Returns None if the product doesn't exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Returns all products in store default order.
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.list_all().await?)
    }

    /// Returns all products whose name contains `query` as a substring.
    #[tracing::instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.search_by_name(query).await?)
    }

    /// Applies the requested field values to a persisted product.
    ///
    /// The order is load-bearing:
    ///
    /// 1. resolve the persisted record (its identity is authoritative —
    ///    the draft carries none); a missing product answers not-found
    ///    even when the draft is also invalid,
    /// 2. validate the draft,
    /// 3. compare prices with exact decimal equality,
    /// 4. if they differ, publish one [`PriceChanged`] carrying the *new*
    ///    values **before** the persistence write is issued,
    /// 5. persist the applied draft.
    ///
    /// A publish failure aborts the operation and the store is never
    /// touched. The inverse window exists too: a persist failure after a
    /// successful publish leaves a notification delivered for state that
    /// was never committed. That trade-off is deliberate and documented
    /// in DESIGN.md; do not reorder without revisiting it.
    #[tracing::instrument(skip(self, draft), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, CatalogError> {
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))?;

        draft.validate()?;

        if existing.price != draft.price {
            let event = PriceChanged {
                product_id: existing.id,
                name: draft.name.clone(),
                description: draft.description.clone(),
                price: draft.price,
                image_url: draft.image_url.clone(),
            };
            self.publisher.publish(event).await?;
            metrics::counter!("catalog_price_changed_published_total").increment(1);
            tracing::info!(
                old_price = %existing.price,
                new_price = %draft.price,
                "price change published"
            );
        }

        let updated = existing.apply(draft);
        self.store.update(&updated).await?;
        Ok(updated)
    }

    /// Removes a product. Never publishes a notification.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))?;

        self.store.delete(&existing).await?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
