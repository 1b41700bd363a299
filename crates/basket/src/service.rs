use std::collections::HashMap;
use std::sync::Arc;

use events::PriceChanged;
use tokio::sync::RwLock;

use crate::ShoppingCart;

/// In-memory basket store and service.
///
/// Carts are keyed by user name; `update_basket` is an upsert, matching the
/// POST semantics of the basket endpoint. Held behind `Arc` internally so
/// clones share the same carts (the price-refresh worker holds one clone).
#[derive(Clone, Default)]
pub struct BasketService {
    carts: Arc<RwLock<HashMap<String, ShoppingCart>>>,
}

impl BasketService {
    /// Creates a new basket service with no carts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a user's cart, if any.
    #[tracing::instrument(skip(self))]
    pub async fn get_basket(&self, user_name: &str) -> Option<ShoppingCart> {
        self.carts.read().await.get(user_name).cloned()
    }

    /// Inserts or replaces a user's cart.
    #[tracing::instrument(skip(self, cart), fields(user_name = %cart.user_name))]
    pub async fn update_basket(&self, cart: ShoppingCart) {
        self.carts
            .write()
            .await
            .insert(cart.user_name.clone(), cart);
    }

    /// Removes a user's cart. Returns whether one existed.
    #[tracing::instrument(skip(self))]
    pub async fn delete_basket(&self, user_name: &str) -> bool {
        self.carts.write().await.remove(user_name).is_some()
    }

    /// Number of stored carts.
    pub async fn basket_count(&self) -> usize {
        self.carts.read().await.len()
    }

    /// Rewrites the cached price of every cart item matching the event's
    /// product. Returns the number of items touched.
    ///
    /// Idempotent: re-delivering the same event converges on the same
    /// prices, so at-least-once delivery from the bus is safe.
    #[tracing::instrument(skip(self, event), fields(product_id = %event.product_id))]
    pub async fn refresh_price(&self, event: &PriceChanged) -> usize {
        let mut carts = self.carts.write().await;
        let mut touched = 0;

        for cart in carts.values_mut() {
            for item in &mut cart.items {
                if item.product_id == event.product_id && item.price != event.price {
                    item.price = event.price;
                    touched += 1;
                }
            }
        }

        if touched > 0 {
            metrics::counter!("basket_price_refresh_items_total").increment(touched as u64);
            tracing::info!(items = touched, new_price = %event.price, "cart prices refreshed");
        }

        touched
    }
}

#[cfg(test)]
mod tests {
    use common::ProductId;
    use rust_decimal::Decimal;

    use crate::CartItem;

    use super::*;

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn cart_with_item(user: &str, product_id: ProductId, p: &str) -> ShoppingCart {
        let mut cart = ShoppingCart::new(user);
        cart.items.push(CartItem {
            product_id,
            product_name: "Widget".to_string(),
            quantity: 2,
            price: price(p),
        });
        cart
    }

    fn event(product_id: ProductId, p: &str) -> PriceChanged {
        PriceChanged {
            product_id,
            name: "Widget".to_string(),
            description: None,
            price: price(p),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn get_missing_basket_returns_none() {
        let service = BasketService::new();
        assert!(service.get_basket("alice").await.is_none());
    }

    #[tokio::test]
    async fn update_basket_upserts() {
        let service = BasketService::new();
        let id = ProductId::new();

        service.update_basket(cart_with_item("alice", id, "9.99")).await;
        assert_eq!(service.basket_count().await, 1);

        // Replacing the same user's cart does not add another.
        service.update_basket(cart_with_item("alice", id, "9.99")).await;
        assert_eq!(service.basket_count().await, 1);

        let cart = service.get_basket("alice").await.unwrap();
        assert_eq!(cart.items.len(), 1);
    }

    #[tokio::test]
    async fn delete_basket_reports_existence() {
        let service = BasketService::new();
        service.update_basket(ShoppingCart::new("alice")).await;

        assert!(service.delete_basket("alice").await);
        assert!(!service.delete_basket("alice").await);
        assert!(service.get_basket("alice").await.is_none());
    }

    #[tokio::test]
    async fn refresh_price_rewrites_matching_items_only() {
        let service = BasketService::new();
        let changed = ProductId::new();
        let other = ProductId::new();

        service.update_basket(cart_with_item("alice", changed, "9.99")).await;
        service.update_basket(cart_with_item("bob", changed, "9.99")).await;
        service.update_basket(cart_with_item("carol", other, "5.00")).await;

        let touched = service.refresh_price(&event(changed, "12.49")).await;
        assert_eq!(touched, 2);

        let alice = service.get_basket("alice").await.unwrap();
        assert_eq!(alice.items[0].price, price("12.49"));
        assert_eq!(alice.total_price(), price("24.98"));

        let carol = service.get_basket("carol").await.unwrap();
        assert_eq!(carol.items[0].price, price("5.00"));
    }

    #[tokio::test]
    async fn refresh_price_is_idempotent() {
        let service = BasketService::new();
        let id = ProductId::new();
        service.update_basket(cart_with_item("alice", id, "9.99")).await;

        assert_eq!(service.refresh_price(&event(id, "12.49")).await, 1);
        // Re-delivery of the same event touches nothing.
        assert_eq!(service.refresh_price(&event(id, "12.49")).await, 0);
    }
}
