use crate::dtos::destination::{
    CreateDestinationRequest, DestinationResponse, UpdateDestinationRequest,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::entities::destinations;
use database::error::DataError;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};

/// List all destinations
#[utoipa::path(
    get,
    path = "/destinations",
    responses(
        (status = 200, description = "List of destinations", body = [DestinationResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Destinations"
)]
pub async fn list_destinations(
    State(state): State<AppState>,
) -> Result<Json<Vec<DestinationResponse>>, ApiError> {
    let rows = destinations::Entity::find().all(&state.db).await?;
    Ok(Json(
        rows.into_iter().map(DestinationResponse::from).collect(),
    ))
}

/// Add a destination
#[utoipa::path(
    post,
    path = "/destinations",
    request_body = CreateDestinationRequest,
    responses(
        (status = 201, description = "Destination created", body = DestinationResponse),
        (status = 400, description = "Missing city or country"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Destinations"
)]
pub async fn create_destination(
    State(state): State<AppState>,
    Json(payload): Json<CreateDestinationRequest>,
) -> Result<(StatusCode, Json<DestinationResponse>), ApiError> {
    if payload.city.trim().is_empty() || payload.country.trim().is_empty() {
        return Err(DataError::Validation("provide both city and country".to_string()).into());
    }

    let result = destinations::Entity::insert(destinations::ActiveModel {
        city: Set(payload.city.clone()),
        country: Set(payload.country.clone()),
        ..Default::default()
    })
    .exec(&state.db)
    .await
    .map_err(DataError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(DestinationResponse {
            id: result.last_insert_id,
            city: payload.city,
            country: payload.country,
        }),
    ))
}

/// Update a destination's city and/or country
#[utoipa::path(
    put,
    path = "/destinations/{id}",
    params(("id" = i32, Path, description = "Destination ID")),
    request_body = UpdateDestinationRequest,
    responses(
        (status = 200, description = "Destination updated", body = DestinationResponse),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Destination not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Destinations"
)]
pub async fn update_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDestinationRequest>,
) -> Result<Json<DestinationResponse>, ApiError> {
    if payload.city.is_none() && payload.country.is_none() {
        return Err(
            DataError::Validation("provide a new city or country to update".to_string()).into(),
        );
    }

    let destination = destinations::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("destination"))?;

    let mut active: destinations::ActiveModel = destination.into();
    if let Some(city) = payload.city {
        active.city = Set(city);
    }
    if let Some(country) = payload.country {
        active.country = Set(country);
    }
    let updated = active.update(&state.db).await.map_err(DataError::from)?;

    Ok(Json(DestinationResponse::from(updated)))
}

/// Delete a destination. Fails with a conflict if any travel package still
/// references it; there is no cascade on this edge.
#[utoipa::path(
    delete,
    path = "/destinations/{id}",
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 204, description = "Destination deleted"),
        (status = 404, description = "Destination not found"),
        (status = 409, description = "Destination still referenced by packages"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Destinations"
)]
pub async fn delete_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let result = destinations::Entity::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(DataError::from)?;

    if result.rows_affected == 0 {
        return Err(ApiError::not_found("destination"));
    }
    Ok(StatusCode::NO_CONTENT)
}
