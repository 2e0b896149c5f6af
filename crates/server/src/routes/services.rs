use crate::dtos::service::{
    CreateServiceRequest, CreatedResponse, ServiceResponse, UpdateServiceRequest,
};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::catalog::CatalogService;

/// List all services with their flight/hotel extension data
#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "List of services", body = [ServiceResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Services"
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, ApiError> {
    let records = CatalogService::list_services(&state.db).await?;
    Ok(Json(
        records.into_iter().map(ServiceResponse::from).collect(),
    ))
}

/// Add a service. The flight or hotel extension row and the four initial
/// inventory units are created in the same transaction.
#[utoipa::path(
    post,
    path = "/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created", body = CreatedResponse),
        (status = 400, description = "Missing service name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Services"
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let kind = payload.kind.into();
    let id = CatalogService::add_service(&state.db, &payload.name, payload.base_price, &kind)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Get a single service
#[utoipa::path(
    get,
    path = "/services/{id}",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service found", body = ServiceResponse),
        (status = 404, description = "Service not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Services"
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceResponse>, ApiError> {
    let record = CatalogService::get_service(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("service"))?;

    Ok(Json(ServiceResponse::from(record)))
}

/// Update a service's name and/or base price
#[utoipa::path(
    put,
    path = "/services/{id}",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 204, description = "Service updated"),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Service not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Services"
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<StatusCode, ApiError> {
    CatalogService::update_service(&state.db, id, payload.name.as_deref(), payload.base_price)
        .await?
        .ok_or_else(|| ApiError::not_found("service"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a service; its extension row and seats/rooms cascade with it
#[utoipa::path(
    delete,
    path = "/services/{id}",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found"),
        (status = 409, description = "Service still referenced"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Services"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = CatalogService::delete_service(&state.db, id).await?;

    if deleted == 0 {
        return Err(ApiError::not_found("service"));
    }
    Ok(StatusCode::NO_CONTENT)
}
