use crate::dtos::package::{
    AddContentRequest, CreatePackageRequest, PackageContentResponse, PackageResponse,
    UpdatePackageRequest,
};
use crate::dtos::service::CreatedResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::package::PackageService;

/// List all travel packages joined with their destination
#[utoipa::path(
    get,
    path = "/packages",
    responses(
        (status = 200, description = "List of packages", body = [PackageResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Packages"
)]
pub async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<PackageResponse>>, ApiError> {
    let rows = PackageService::list_packages(&state.db).await?;
    Ok(Json(rows.into_iter().map(PackageResponse::from).collect()))
}

/// Add a travel package for a destination
#[utoipa::path(
    post,
    path = "/packages",
    request_body = CreatePackageRequest,
    responses(
        (status = 201, description = "Package created", body = CreatedResponse),
        (status = 400, description = "Missing package name"),
        (status = 409, description = "Unknown destination"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Packages"
)]
pub async fn create_package(
    State(state): State<AppState>,
    Json(payload): Json<CreatePackageRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = PackageService::create_package(
        &state.db,
        payload.dest_id,
        &payload.name,
        payload.price,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update a package's name and/or price
#[utoipa::path(
    put,
    path = "/packages/{id}",
    params(("id" = i32, Path, description = "Package ID")),
    request_body = UpdatePackageRequest,
    responses(
        (status = 204, description = "Package updated"),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Package not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Packages"
)]
pub async fn update_package(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePackageRequest>,
) -> Result<StatusCode, ApiError> {
    PackageService::update_package(&state.db, id, payload.name.as_deref(), payload.price)
        .await?
        .ok_or_else(|| ApiError::not_found("package"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a package; its contents cascade, bookings referencing it do not
#[utoipa::path(
    delete,
    path = "/packages/{id}",
    params(("id" = i32, Path, description = "Package ID")),
    responses(
        (status = 204, description = "Package deleted"),
        (status = 404, description = "Package not found"),
        (status = 409, description = "Package still referenced by bookings"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Packages"
)]
pub async fn delete_package(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = PackageService::delete_package(&state.db, id).await?;

    if deleted == 0 {
        return Err(ApiError::not_found("package"));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// List which services each package contains, newest associations first
#[utoipa::path(
    get,
    path = "/package-contents",
    responses(
        (status = 200, description = "List of package contents", body = [PackageContentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Packages"
)]
pub async fn list_package_contents(
    State(state): State<AppState>,
) -> Result<Json<Vec<PackageContentResponse>>, ApiError> {
    let rows = PackageService::list_contents(&state.db).await?;
    Ok(Json(
        rows.into_iter().map(PackageContentResponse::from).collect(),
    ))
}

/// Add a service to a package
#[utoipa::path(
    post,
    path = "/package-contents",
    request_body = AddContentRequest,
    responses(
        (status = 201, description = "Service added to package", body = CreatedResponse),
        (status = 409, description = "Unknown package or service"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Packages"
)]
pub async fn add_package_content(
    State(state): State<AppState>,
    Json(payload): Json<AddContentRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = PackageService::add_content(&state.db, payload.pkg_id, payload.service_id).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Remove a package↔service association
#[utoipa::path(
    delete,
    path = "/package-contents/{id}",
    params(("id" = i32, Path, description = "Package content ID")),
    responses(
        (status = 204, description = "Association removed"),
        (status = 404, description = "Association not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Packages"
)]
pub async fn remove_package_content(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = PackageService::remove_content(&state.db, id).await?;

    if deleted == 0 {
        return Err(ApiError::not_found("package content"));
    }
    Ok(StatusCode::NO_CONTENT)
}
