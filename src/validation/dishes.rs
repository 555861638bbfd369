use serde_json::Number;

use crate::entities::dish::DishPayload;
use crate::errors::ValidationError;
use crate::validation::{id_matches_route, require_str, run};

const RESOURCE: &str = "Dish";

pub fn create(payload: &DishPayload) -> Result<(), ValidationError> {
    run(
        payload,
        &[
            &|p: &DishPayload| require_str(p.name.as_deref(), "name"),
            &|p: &DishPayload| require_str(p.description.as_deref(), "description"),
            &|p: &DishPayload| require_str(p.image_url.as_deref(), "image_url"),
            &|p: &DishPayload| price_is_valid(p.price.as_ref()),
        ],
    )
}

pub fn update(payload: &DishPayload, route_id: &str) -> Result<(), ValidationError> {
    run(
        payload,
        &[
            &|p: &DishPayload| require_str(p.name.as_deref(), "name"),
            &|p: &DishPayload| require_str(p.description.as_deref(), "description"),
            &|p: &DishPayload| require_str(p.image_url.as_deref(), "image_url"),
            &|p: &DishPayload| price_is_valid(p.price.as_ref()),
            &|p: &DishPayload| id_matches_route(RESOURCE, p.id.as_deref(), route_id),
        ],
    )
}

fn price_is_valid(price: Option<&Number>) -> Result<(), ValidationError> {
    let Some(price) = price else {
        return Err(ValidationError::MissingField("price"));
    };
    match price.as_i64() {
        // zero reads as absent, same as a missing field
        Some(0) => Err(ValidationError::MissingField("price")),
        Some(p) if p > 0 => Ok(()),
        _ => Err(ValidationError::InvalidNumeric {
            field: "price",
            index: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> DishPayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn create_accepts_a_complete_dish() {
        let p = payload(serde_json::json!({
            "name": "Harissa flatbread",
            "description": "Wood-fired, brushed with chili butter",
            "price": 8,
            "image_url": "https://example.com/flatbread.png"
        }));
        assert!(create(&p).is_ok());
    }

    #[test]
    fn first_missing_field_wins_in_declared_order() {
        let p = payload(serde_json::json!({ "price": 8 }));
        assert_eq!(create(&p), Err(ValidationError::MissingField("name")));

        let p = payload(serde_json::json!({ "name": "Flatbread", "price": 8 }));
        assert_eq!(create(&p), Err(ValidationError::MissingField("description")));
    }

    #[test]
    fn empty_string_fields_count_as_missing() {
        let p = payload(serde_json::json!({
            "name": "",
            "description": "d",
            "price": 8,
            "image_url": "u"
        }));
        assert_eq!(create(&p), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn zero_price_reads_as_missing() {
        let p = payload(serde_json::json!({
            "name": "n", "description": "d", "price": 0, "image_url": "u"
        }));
        assert_eq!(create(&p), Err(ValidationError::MissingField("price")));
    }

    #[test]
    fn negative_and_fractional_prices_are_invalid() {
        for bad in [serde_json::json!(-5), serde_json::json!(4.5)] {
            let p = payload(serde_json::json!({
                "name": "n", "description": "d", "price": bad, "image_url": "u"
            }));
            assert_eq!(
                create(&p),
                Err(ValidationError::InvalidNumeric {
                    field: "price",
                    index: None
                })
            );
        }
    }

    #[test]
    fn update_rejects_a_disagreeing_payload_id() {
        let p = payload(serde_json::json!({
            "id": "other",
            "name": "n", "description": "d", "price": 8, "image_url": "u"
        }));
        assert_eq!(
            update(&p, "route"),
            Err(ValidationError::IdMismatch {
                resource: "Dish",
                payload_id: "other".into(),
                route_id: "route".into()
            })
        );
    }

    #[test]
    fn update_permits_an_omitted_payload_id() {
        let p = payload(serde_json::json!({
            "name": "n", "description": "d", "price": 8, "image_url": "u"
        }));
        assert!(update(&p, "route").is_ok());
    }
}
