use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl Entity for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Incoming `data` object for dish create/update. Every field is optional
/// at the type level; the validation pipeline decides what a complete dish
/// looks like and with which message to reject an incomplete one.
///
/// `price` stays a raw [`Number`] so a fractional or negative value reaches
/// the pipeline instead of dying in deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Number>,
    pub image_url: Option<String>,
}

impl DishPayload {
    /// Build the stored record once validation has passed. The id comes
    /// from the route or the id generator, never the payload.
    pub fn into_record(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.as_ref().and_then(Number::as_i64).unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_into_record_carries_every_field() {
        let payload: DishPayload = serde_json::from_value(serde_json::json!({
            "name": "Seitan skewers",
            "description": "Grilled over charcoal",
            "price": 12,
            "image_url": "https://example.com/skewers.png"
        }))
        .unwrap();

        let dish = payload.into_record("abc".into());
        assert_eq!(dish.id, "abc");
        assert_eq!(dish.name, "Seitan skewers");
        assert_eq!(dish.description, "Grilled over charcoal");
        assert_eq!(dish.price, 12);
        assert_eq!(dish.image_url, "https://example.com/skewers.png");
    }

    #[test]
    fn payload_tolerates_missing_fields() {
        let payload: DishPayload = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(payload.name.is_none());
        assert!(payload.price.is_none());
    }
}
