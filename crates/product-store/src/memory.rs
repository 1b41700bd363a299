use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    Product, ProductDraft, ProductId, Result, StoreError,
    store::ProductStore,
};

/// In-memory product store implementation for testing and local runs.
///
/// Keeps products in insertion order, matching the primary-key ordering a
/// relational store would produce. Name search is a case-sensitive substring
/// match.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductStore {
    /// Creates a new empty in-memory product store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of products stored.
    pub async fn product_count(&self) -> usize {
        self.products.read().await.len()
    }

    /// Clears all products.
    pub async fn clear(&self) {
        self.products.write().await.clear();
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product> {
        let product = Product {
            id: ProductId::new(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
        };

        let mut products = self.products.write().await;
        products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(product.id)),
        }
    }

    async fn delete(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != product.id);
        if products.len() == before {
            return Err(StoreError::NotFound(product.id));
        }
        Ok(())
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.name.contains(query))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }
}
