use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Parse the wire spelling of a status. Payload statuses arrive as
    /// free-form strings so the pipeline can answer an unknown one with
    /// its own message rather than a deserialization error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "preparing" => Some(Self::Preparing),
            "out-for-delivery" => Some(Self::OutForDelivery),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub dish_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderItem>,
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPayload {
    pub dish_id: Option<String>,
    pub quantity: Option<Number>,
}

/// Incoming `data` object for order create/update, optional everywhere for
/// the same reason as [`DishPayload`](super::dish::DishPayload).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub id: Option<String>,
    pub deliver_to: Option<String>,
    pub mobile_number: Option<String>,
    pub status: Option<String>,
    pub dishes: Option<Vec<OrderItemPayload>>,
}

impl OrderPayload {
    /// Build the stored record once validation has passed. A create
    /// without a status starts out `pending`.
    pub fn into_record(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to.unwrap_or_default(),
            mobile_number: self.mobile_number.unwrap_or_default(),
            status: self
                .status
                .as_deref()
                .and_then(OrderStatus::parse)
                .unwrap_or(OrderStatus::Pending),
            dishes: self
                .dishes
                .unwrap_or_default()
                .into_iter()
                .map(OrderItemPayload::into_record)
                .collect(),
        }
    }
}

impl OrderItemPayload {
    fn into_record(self) -> OrderItem {
        OrderItem {
            dish_id: self.dish_id.unwrap_or_default(),
            quantity: self.quantity.as_ref().and_then(Number::as_i64).unwrap_or_default(),
        }
    }
}
