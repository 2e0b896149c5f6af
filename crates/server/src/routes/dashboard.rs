use crate::dtos::dashboard::DashboardResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use database::services::report::ReportService;

/// System overview: entity counts, total revenue and the last 10 bookings
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let data = ReportService::dashboard(&state.db).await?;
    Ok(Json(DashboardResponse::from(data)))
}
