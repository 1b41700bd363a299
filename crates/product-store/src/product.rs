//! Product record and the requested-changes draft.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ProductId;

/// A catalog product as persisted by the store.
///
/// Identity is assigned by the store on insert and is immutable afterwards;
/// every other field can be rewritten by an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
}

impl Product {
    /// Applies the draft's field values to this product, producing a new
    /// value that keeps `self`'s identity.
    ///
    /// Updates go through this transformation instead of mutating the loaded
    /// record in place, so a record instance shared across operations can
    /// never be observed half-written.
    pub fn apply(&self, draft: ProductDraft) -> Product {
        Product {
            id: self.id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
        }
    }
}

/// Requested field values for a product, as submitted by a client.
///
/// Deliberately carries no identity field: the identity of an update target
/// is always read from the already-persisted record, so a tampered payload
/// cannot redirect a write to a different row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Creates a draft from its parts.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
        image_url: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            price,
            image_url,
        }
    }

    /// Validates the draft against the product invariants.
    pub fn validate(&self) -> std::result::Result<(), InvalidProduct> {
        if self.name.trim().is_empty() {
            return Err(InvalidProduct::EmptyName);
        }
        if self.price.is_sign_negative() {
            return Err(InvalidProduct::NegativePrice { price: self.price });
        }
        Ok(())
    }
}

/// Validation errors for product field values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidProduct {
    /// The product name must be non-empty.
    #[error("Product name must not be empty")]
    EmptyName,

    /// The product price must be non-negative.
    #[error("Product price must not be negative, got {price}")]
    NegativePrice { price: Decimal },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn draft() -> ProductDraft {
        ProductDraft::new(
            "Widget",
            Some("A widget".to_string()),
            price("9.99"),
            Some("http://img/widget.png".to_string()),
        )
    }

    #[test]
    fn apply_keeps_identity_and_takes_draft_fields() {
        let original = Product {
            id: ProductId::new(),
            name: "Old".to_string(),
            description: None,
            price: price("1.00"),
            image_url: None,
        };

        let updated = original.apply(draft());

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.description.as_deref(), Some("A widget"));
        assert_eq!(updated.price, price("9.99"));
        assert_eq!(updated.image_url.as_deref(), Some("http://img/widget.png"));
        // The original value is untouched.
        assert_eq!(original.name, "Old");
    }

    #[test]
    fn validate_accepts_well_formed_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert_eq!(d.validate(), Err(InvalidProduct::EmptyName));
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut d = draft();
        d.price = price("-0.01");
        assert!(matches!(
            d.validate(),
            Err(InvalidProduct::NegativePrice { .. })
        ));
    }

    #[test]
    fn validate_accepts_zero_price() {
        let mut d = draft();
        d.price = price("0.00");
        assert!(d.validate().is_ok());
    }

    #[test]
    fn draft_ignores_identity_in_payload() {
        // An "id" field in an update payload must not reach the draft.
        let json = r#"{"id":"5a2b0a63-9c1e-4f5a-8f71-111111111111","name":"Widget","price":9.99}"#;
        let d: ProductDraft = serde_json::from_str(json).unwrap();
        assert_eq!(d.name, "Widget");
        assert_eq!(d.price, price("9.99"));
    }

    #[test]
    fn product_serializes_with_camel_case_keys() {
        let product = Product {
            id: ProductId::new(),
            name: "Widget".to_string(),
            description: None,
            price: price("9.99"),
            image_url: Some("u".to_string()),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
    }
}
