use common::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's shopping cart, keyed by user name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCart {
    pub user_name: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// A single line in a cart. `price` is a cached copy of the catalog price
/// at the time the item was added, refreshed by price-change events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl ShoppingCart {
    /// Creates an empty cart for a user.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            items: Vec::new(),
        }
    }

    /// Total of all lines: Σ price × quantity.
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = ShoppingCart::new("alice");
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn total_multiplies_quantity() {
        let mut cart = ShoppingCart::new("alice");
        cart.items.push(CartItem {
            product_id: ProductId::new(),
            product_name: "Widget".to_string(),
            quantity: 3,
            price: price("9.99"),
        });
        cart.items.push(CartItem {
            product_id: ProductId::new(),
            product_name: "Gadget".to_string(),
            quantity: 1,
            price: price("5.00"),
        });

        assert_eq!(cart.total_price(), price("34.97"));
    }

    #[test]
    fn cart_serializes_with_camel_case_keys() {
        let cart = ShoppingCart::new("alice");
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.get("userName").is_some());
        assert!(json.get("items").is_some());
    }
}
