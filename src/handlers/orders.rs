use actix_web::{web, HttpResponse};
use tracing::info;

use crate::entities::order::OrderPayload;
use crate::errors::{ApiError, ValidationError};
use crate::handlers::{DataBody, Envelope};
use crate::state::AppState;
use crate::utils::next_id;
use crate::validation::orders as rules;

const RESOURCE: &str = "Order";

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let orders = state.orders.list().await;
    Ok(HttpResponse::Ok().json(DataBody { data: orders }))
}

pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<Envelope<OrderPayload>>,
) -> Result<HttpResponse, ApiError> {
    let payload = body.into_inner().data;
    rules::create(&payload)?;

    let created = state
        .orders
        .insert(payload.into_record(next_id()))
        .await
        .map_err(|_| ApiError::Internal)?;
    info!(order_id = %created.id, "order created");
    Ok(HttpResponse::Created().json(DataBody { data: created }))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let order = state
        .orders
        .get(&id)
        .await
        .ok_or_else(|| ValidationError::NotFound { resource: RESOURCE, id })?;
    Ok(HttpResponse::Ok().json(DataBody { data: order }))
}

pub async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Envelope<OrderPayload>>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let existing = state
        .orders
        .get(&id)
        .await
        .ok_or_else(|| ValidationError::NotFound {
            resource: RESOURCE,
            id: id.clone(),
        })?;
    let payload = body.into_inner().data;
    rules::update(&payload, &id, &existing)?;

    let updated = state
        .orders
        .replace(payload.into_record(existing.id))
        .await
        .map_err(|_| ApiError::Internal)?;
    Ok(HttpResponse::Ok().json(DataBody { data: updated }))
}

pub async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let existing = state
        .orders
        .get(&id)
        .await
        .ok_or_else(|| ValidationError::NotFound {
            resource: RESOURCE,
            id: id.clone(),
        })?;
    rules::delete(&existing)?;

    state
        .orders
        .remove(&id)
        .await
        .map_err(|_| ApiError::Internal)?;
    info!(order_id = %id, "order deleted");
    Ok(HttpResponse::NoContent().finish())
}
