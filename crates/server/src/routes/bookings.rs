use crate::dtos::booking::{
    BookingResponse, CreateBookingRequest, PaymentStatusResponse, RecordPaymentRequest,
    UpdateBookingRequest,
};
use crate::dtos::service::CreatedResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::booking::BookingService;

/// List all bookings joined with customer and package, newest first
#[utoipa::path(
    get,
    path = "/bookings",
    responses(
        (status = 200, description = "List of bookings", body = [BookingResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let rows = BookingService::list_bookings(&state.db, None).await?;
    Ok(Json(rows.into_iter().map(BookingResponse::from).collect()))
}

/// Create a booking for a customer and package
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = CreatedResponse),
        (status = 409, description = "Unknown customer or package"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = BookingService::create_booking(
        &state.db,
        payload.cust_id,
        payload.pkg_id,
        payload.booking_date,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Move a booking to a new package and date; the payment status is
/// recomputed against the new package price in the same transaction
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = PaymentStatusResponse),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Unknown package"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<Json<PaymentStatusResponse>, ApiError> {
    let status =
        BookingService::update_booking(&state.db, id, payload.pkg_id, payload.booking_date)
            .await?
            .ok_or_else(|| ApiError::not_found("booking"))?;

    Ok(Json(PaymentStatusResponse {
        booking_id: id,
        payment_status: status.to_string(),
    }))
}

/// Delete a booking and its payments, reservations and tickets
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = BookingService::delete_booking(&state.db, id).await?;

    if deleted == 0 {
        return Err(ApiError::not_found("booking"));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Record a payment against a booking and return the newly derived status
#[utoipa::path(
    post,
    path = "/bookings/{id}/payments",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = RecordPaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentStatusResponse),
        (status = 409, description = "Unknown booking"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Bookings"
)]
pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<PaymentStatusResponse>), ApiError> {
    let status =
        BookingService::record_payment(&state.db, id, payload.amount, payload.payment_date)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentStatusResponse {
            booking_id: id,
            payment_status: status.to_string(),
        }),
    ))
}
