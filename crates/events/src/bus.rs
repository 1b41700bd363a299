use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::{PriceChanged, PublishError};

/// Publisher collaborator consumed by the catalog service.
///
/// Fire-and-forget from the caller's perspective, but `publish` must
/// complete (or fail) before the caller proceeds. Delivery guarantees
/// (at-least-once, cross-message ordering) are the implementation's
/// contract, not specified here.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: PriceChanged) -> Result<(), PublishError>;
}

#[async_trait]
impl<P> EventPublisher for Arc<P>
where
    P: EventPublisher + ?Sized,
{
    async fn publish(&self, event: PriceChanged) -> Result<(), PublishError> {
        (**self).publish(event).await
    }
}

/// A subscription to an event stream.
///
/// Each subscription gets a copy of every event published after it was
/// created (broadcast semantics). A slow subscriber that falls more than
/// the channel capacity behind loses the oldest events and is told how
/// many it missed.
pub struct Subscription<M> {
    receiver: broadcast::Receiver<M>,
}

impl<M: Clone> Subscription<M> {
    /// Waits for the next event.
    pub async fn recv(&mut self) -> Result<M, broadcast::error::RecvError> {
        self.receiver.recv().await
    }

    /// Tries to receive an event without waiting.
    pub fn try_recv(&mut self) -> Result<M, broadcast::error::TryRecvError> {
        self.receiver.try_recv()
    }
}

/// In-memory pub/sub bus for tests and single-process runs.
///
/// Best-effort fan-out over a tokio broadcast channel. Publishing with no
/// live subscribers is not an error: events exist to *offer* price updates
/// to interested consumers, not to require them.
#[derive(Clone)]
pub struct InMemoryEventBus<M = PriceChanged> {
    sender: broadcast::Sender<M>,
}

impl<M: Clone> InMemoryEventBus<M> {
    /// Creates a bus retaining up to `capacity` undelivered events per
    /// subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Creates a bus with a small default capacity.
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Opens a new subscription receiving every subsequently published event.
    pub fn subscribe(&self) -> Subscription<M> {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of currently live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<M: Clone> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus<PriceChanged> {
    async fn publish(&self, event: PriceChanged) -> Result<(), PublishError> {
        tracing::debug!(
            product_id = %event.product_id,
            price = %event.price,
            "publishing {}",
            PriceChanged::EVENT_TYPE
        );

        // send only fails when there are no receivers; dropped fan-out is
        // acceptable for this bus.
        let _ = self.sender.send(event);
        Ok(())
    }
}
