use crate::dtos::booking::BookingResponse;
use database::services::report::DashboardData;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub total_customers: u64,
    pub total_bookings: u64,
    pub packages_available: u64,
    pub total_revenue: f64,
    pub recent_bookings: Vec<BookingResponse>,
}

impl From<DashboardData> for DashboardResponse {
    fn from(data: DashboardData) -> Self {
        Self {
            total_customers: data.customers,
            total_bookings: data.bookings,
            packages_available: data.packages,
            total_revenue: data.total_revenue,
            recent_bookings: data
                .recent_bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect(),
        }
    }
}
