use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("{}", _0)]
    NotFound(String),
    #[display("{}", _0)]
    BadRequest(String),
    #[display("internal")]
    Internal,
}

#[derive(Serialize)]
struct ErrBody {
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrBody {
            message: self.to_string(),
        })
    }
}

/// One failed pipeline check. Exactly one of these surfaces per rejected
/// request; the pipeline never runs a check past the first failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    MissingField(&'static str),
    /// A numeric field is not a positive integer; `index` is set when the
    /// field lives inside the order's dish array.
    InvalidNumeric {
        field: &'static str,
        index: Option<usize>,
    },
    NotFound {
        resource: &'static str,
        id: String,
    },
    IdMismatch {
        resource: &'static str,
        payload_id: String,
        route_id: String,
    },
    InvalidStatus,
    AlreadyDelivered,
    InvalidState(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Must include a {field}"),
            Self::InvalidNumeric { field, index: None } => {
                write!(f, "The {field} must be greater than 0")
            }
            Self::InvalidNumeric {
                field,
                index: Some(index),
            } => write!(
                f,
                "Dish {index} must have a {field} that is an integer greater than 0"
            ),
            Self::NotFound { resource, id } => write!(f, "{resource} id not found: {id}"),
            Self::IdMismatch {
                resource,
                payload_id,
                route_id,
            } => write!(
                f,
                "{resource} id: {payload_id} does not match route id: {route_id}"
            ),
            Self::InvalidStatus => write!(f, "Incorrect status for order"),
            Self::AlreadyDelivered => write!(f, "Order has already been delivered"),
            Self::InvalidState(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            _ => ApiError::BadRequest(err.to_string()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error("duplicate id")]
    DuplicateId,
}
