use crate::dtos::report::{BookingReportResponse, CustomerSpendingResponse, InventoryResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use database::services::report::ReportService;

/// Comprehensive booking report: who booked what, where they are going,
/// and how much of it is paid
#[utoipa::path(
    get,
    path = "/reports/bookings",
    responses(
        (status = 200, description = "Booking report", body = [BookingReportResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn booking_report(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingReportResponse>>, ApiError> {
    let rows = ReportService::booking_report(&state.db).await?;
    Ok(Json(
        rows.into_iter().map(BookingReportResponse::from).collect(),
    ))
}

/// Room and seat counts per hotel and flight
#[utoipa::path(
    get,
    path = "/reports/inventory",
    responses(
        (status = 200, description = "Inventory counts", body = InventoryResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn inventory_report(
    State(state): State<AppState>,
) -> Result<Json<InventoryResponse>, ApiError> {
    let report = ReportService::inventory(&state.db).await?;
    Ok(Json(InventoryResponse::from(report)))
}

/// Total paid per customer, highest spenders first
#[utoipa::path(
    get,
    path = "/reports/customer-spending",
    responses(
        (status = 200, description = "Customer spending ranking", body = [CustomerSpendingResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn customer_spending(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerSpendingResponse>>, ApiError> {
    let rows = ReportService::customer_spending(&state.db).await?;
    Ok(Json(
        rows.into_iter().map(CustomerSpendingResponse::from).collect(),
    ))
}
