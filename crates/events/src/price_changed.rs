use common::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Integration event announcing that a catalog product's price changed.
///
/// The wire shape is part of the cross-service contract and must stay
/// exactly `{productId, name, description, price, imageUrl}`.
///
/// Ephemeral by design: constructed inside the update operation, handed to
/// the publisher, never persisted or retained. `product_id` is always the
/// *stored* identity of the product; the remaining fields carry the *new*
/// values about to be committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChanged {
    pub product_id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
}

impl PriceChanged {
    /// Event type name used for logging and routing.
    pub const EVENT_TYPE: &'static str = "PriceChanged";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_is_exact() {
        let event = PriceChanged {
            product_id: ProductId::new(),
            name: "Widget".to_string(),
            description: Some("d".to_string()),
            price: "12.49".parse().unwrap(),
            image_url: Some("u".to_string()),
        };

        let json = serde_json::to_value(&event).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            ["description", "imageUrl", "name", "price", "productId"]
        );
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], 12.49);
    }

    #[test]
    fn optional_fields_serialize_as_null() {
        let event = PriceChanged {
            product_id: ProductId::new(),
            name: "Widget".to_string(),
            description: None,
            price: "5.00".parse().unwrap(),
            image_url: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert!(json["description"].is_null());
        assert!(json["imageUrl"].is_null());
    }

    #[test]
    fn deserialization_roundtrip() {
        let event = PriceChanged {
            product_id: ProductId::new(),
            name: "Widget".to_string(),
            description: Some("d".to_string()),
            price: "12.49".parse().unwrap(),
            image_url: Some("u".to_string()),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: PriceChanged = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
