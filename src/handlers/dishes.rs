use actix_web::{web, HttpResponse};
use tracing::info;

use crate::entities::dish::DishPayload;
use crate::errors::{ApiError, ValidationError};
use crate::handlers::{DataBody, Envelope};
use crate::state::AppState;
use crate::utils::next_id;
use crate::validation::dishes as rules;

const RESOURCE: &str = "Dish";

pub async fn list_dishes(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let dishes = state.dishes.list().await;
    Ok(HttpResponse::Ok().json(DataBody { data: dishes }))
}

pub async fn create_dish(
    state: web::Data<AppState>,
    body: web::Json<Envelope<DishPayload>>,
) -> Result<HttpResponse, ApiError> {
    let payload = body.into_inner().data;
    rules::create(&payload)?;

    // a fresh id is assigned here; any id the caller sent is ignored
    let created = state
        .dishes
        .insert(payload.into_record(next_id()))
        .await
        .map_err(|_| ApiError::Internal)?;
    info!(dish_id = %created.id, "dish created");
    Ok(HttpResponse::Created().json(DataBody { data: created }))
}

pub async fn get_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let dish = state
        .dishes
        .get(&id)
        .await
        .ok_or_else(|| ValidationError::NotFound { resource: RESOURCE, id })?;
    Ok(HttpResponse::Ok().json(DataBody { data: dish }))
}

pub async fn update_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Envelope<DishPayload>>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let existing = state
        .dishes
        .get(&id)
        .await
        .ok_or_else(|| ValidationError::NotFound {
            resource: RESOURCE,
            id: id.clone(),
        })?;
    let payload = body.into_inner().data;
    rules::update(&payload, &id)?;

    // wholesale overwrite; only the id survives from the stored record
    let updated = state
        .dishes
        .replace(payload.into_record(existing.id))
        .await
        .map_err(|_| ApiError::Internal)?;
    Ok(HttpResponse::Ok().json(DataBody { data: updated }))
}

pub async fn delete_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    state
        .dishes
        .remove(&id)
        .await
        .map_err(|_| ValidationError::NotFound { resource: RESOURCE, id })?;
    Ok(HttpResponse::NoContent().finish())
}
