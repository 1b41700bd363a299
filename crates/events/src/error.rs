use thiserror::Error;

/// Errors that can occur when publishing an integration event.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The bus rejected the message or is unreachable.
    #[error("Event bus unavailable: {0}")]
    Unavailable(String),
}
