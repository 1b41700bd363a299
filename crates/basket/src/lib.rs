//! Basket service.
//!
//! Per-user shopping carts with cached product prices. The cache is kept
//! fresh by subscribing to the catalog's price-change events; a stale price
//! between event deliveries is acceptable (carts re-check at checkout in a
//! real deployment).

pub mod cart;
pub mod price_refresh;
pub mod service;

pub use cart::{CartItem, ShoppingCart};
pub use price_refresh::spawn_price_refresh;
pub use service::BasketService;
