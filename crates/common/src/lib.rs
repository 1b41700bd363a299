//! Shared types used across the catalog and basket crates.

pub mod types;

pub use types::ProductId;
