use serde_json::Number;

use crate::entities::order::{Order, OrderPayload, OrderStatus};
use crate::errors::ValidationError;
use crate::validation::{id_matches_route, require_str, run};

const RESOURCE: &str = "Order";

pub fn create(payload: &OrderPayload) -> Result<(), ValidationError> {
    run(
        payload,
        &[
            &|p: &OrderPayload| require_str(p.deliver_to.as_deref(), "deliverTo"),
            &|p: &OrderPayload| require_str(p.mobile_number.as_deref(), "mobileNumber"),
            &dishes_present,
            &dishes_are_valid,
            &status_if_present,
        ],
    )
}

pub fn update(
    payload: &OrderPayload,
    route_id: &str,
    current: &Order,
) -> Result<(), ValidationError> {
    run(
        payload,
        &[
            &|p: &OrderPayload| require_str(p.deliver_to.as_deref(), "deliverTo"),
            &|p: &OrderPayload| require_str(p.mobile_number.as_deref(), "mobileNumber"),
            &dishes_present,
            &dishes_are_valid,
            &|p: &OrderPayload| id_matches_route(RESOURCE, p.id.as_deref(), route_id),
            &|p: &OrderPayload| status_transition(p, current),
        ],
    )
}

/// An order leaves the collection only while still waiting to be cooked.
pub fn delete(current: &Order) -> Result<(), ValidationError> {
    if current.status != OrderStatus::Pending {
        return Err(ValidationError::InvalidState(
            "Order must be in pending status to delete",
        ));
    }
    Ok(())
}

fn dishes_present(payload: &OrderPayload) -> Result<(), ValidationError> {
    match payload.dishes {
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingField("dishes")),
    }
}

/// Index-ordered scan of the dish array; the first entry without a
/// positive-integer quantity decides the error.
fn dishes_are_valid(payload: &OrderPayload) -> Result<(), ValidationError> {
    let items = match payload.dishes.as_deref() {
        None | Some([]) => {
            return Err(ValidationError::InvalidState("Order must include a dish"))
        }
        Some(items) => items,
    };
    for (index, item) in items.iter().enumerate() {
        let quantity = item.quantity.as_ref().and_then(Number::as_i64);
        if !quantity.map_or(false, |q| q > 0) {
            return Err(ValidationError::InvalidNumeric {
                field: "quantity",
                index: Some(index),
            });
        }
    }
    Ok(())
}

/// Creates may omit the status (the record starts `pending`); a status that
/// is present must be one of the four known values.
fn status_if_present(payload: &OrderPayload) -> Result<(), ValidationError> {
    match payload.status.as_deref() {
        None | Some("") => Ok(()),
        Some(s) => OrderStatus::parse(s)
            .map(|_| ())
            .ok_or(ValidationError::InvalidStatus),
    }
}

/// Updates must name a valid status, and a delivered order is frozen: its
/// stored status is terminal no matter what the payload proposes.
fn status_transition(payload: &OrderPayload, current: &Order) -> Result<(), ValidationError> {
    if payload.status.as_deref().and_then(OrderStatus::parse).is_none() {
        return Err(ValidationError::InvalidStatus);
    }
    if current.status == OrderStatus::Delivered {
        return Err(ValidationError::AlreadyDelivered);
    }
    Ok(())
}
