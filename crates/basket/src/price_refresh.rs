//! Background worker applying price-change events to stored carts.

use events::{PriceChanged, Subscription};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::BasketService;

/// Spawns a task that drains the subscription and refreshes cart prices.
///
/// Runs until the bus is closed. A lagged subscriber logs how many events
/// it missed and keeps going — each event carries the full new price, so
/// the next delivery for a product converges the cache anyway.
pub fn spawn_price_refresh(
    service: BasketService,
    mut subscription: Subscription<PriceChanged>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match subscription.recv().await {
                Ok(event) => {
                    service.refresh_price(&event).await;
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "price refresh lagged behind the bus");
                }
                Err(RecvError::Closed) => {
                    tracing::info!("event bus closed, stopping price refresh");
                    break;
                }
            }
        }
    })
}
