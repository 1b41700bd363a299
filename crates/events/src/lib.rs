//! Integration events broadcast to other services.
//!
//! Only one fact crosses service boundaries in this system: a product's
//! price changed. The event bus abstraction is intentionally lightweight —
//! transport-agnostic publish with at-least-once delivery to interested
//! subscribers; consumers must tolerate duplicates.

pub mod bus;
pub mod error;
pub mod price_changed;

pub use bus::{EventPublisher, InMemoryEventBus, Subscription};
pub use error::PublishError;
pub use price_changed::PriceChanged;
