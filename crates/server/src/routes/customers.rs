use crate::dtos::customer::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::entities::customers;
use database::error::DataError;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "List of customers", body = [CustomerResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let rows = customers::Entity::find().all(&state.db).await?;
    Ok(Json(rows.into_iter().map(CustomerResponse::from).collect()))
}

/// Add a customer
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Missing name or email"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(DataError::Validation("please provide both name and email".to_string()).into());
    }

    let result = customers::Entity::insert(customers::ActiveModel {
        name: Set(payload.name.clone()),
        email: Set(payload.email.clone()),
        ..Default::default()
    })
    .exec(&state.db)
    .await
    .map_err(DataError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(CustomerResponse {
            id: result.last_insert_id,
            name: payload.name,
            email: payload.email,
        }),
    ))
}

/// Update a customer's name and/or email
#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerResponse),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Customers"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    if payload.name.is_none() && payload.email.is_none() {
        return Err(
            DataError::Validation("provide a new name or email to update".to_string()).into(),
        );
    }

    let customer = customers::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("customer"))?;

    let mut active: customers::ActiveModel = customer.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    let updated = active.update(&state.db).await.map_err(DataError::from)?;

    Ok(Json(CustomerResponse::from(updated)))
}

/// Delete a customer; their bookings (and those bookings' payments,
/// reservations and tickets) cascade away with them
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Customers"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let result = customers::Entity::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(DataError::from)?;

    if result.rows_affected == 0 {
        return Err(ApiError::not_found("customer"));
    }
    Ok(StatusCode::NO_CONTENT)
}
