use chrono::NaiveDate;
use database::services::report::{
    BookingReportRow, CustomerSpendingRow, FlightInventoryRow, HotelInventoryRow, InventoryReport,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingReportResponse {
    pub id: i32,
    pub booking_date: NaiveDate,
    pub customer: String,
    pub contact: String,
    pub package: String,
    pub package_price: f64,
    pub destination: String,
    pub total_paid: f64,
    pub payment_status: String,
}

impl From<BookingReportRow> for BookingReportResponse {
    fn from(row: BookingReportRow) -> Self {
        Self {
            id: row.id,
            booking_date: row.booking_date,
            customer: row.customer,
            contact: row.contact,
            package: row.package,
            package_price: row.package_price,
            destination: row.destination,
            total_paid: row.total_paid,
            payment_status: row.payment_status.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelInventoryResponse {
    pub service_id: i32,
    pub service_name: String,
    pub stars: i32,
    pub total_rooms: i64,
}

impl From<HotelInventoryRow> for HotelInventoryResponse {
    fn from(row: HotelInventoryRow) -> Self {
        Self {
            service_id: row.service_id,
            service_name: row.service_name,
            stars: row.stars,
            total_rooms: row.total_rooms,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FlightInventoryResponse {
    pub service_id: i32,
    pub service_name: String,
    pub airline: String,
    pub total_seats: i64,
}

impl From<FlightInventoryRow> for FlightInventoryResponse {
    fn from(row: FlightInventoryRow) -> Self {
        Self {
            service_id: row.service_id,
            service_name: row.service_name,
            airline: row.airline,
            total_seats: row.total_seats,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryResponse {
    pub hotels: Vec<HotelInventoryResponse>,
    pub flights: Vec<FlightInventoryResponse>,
}

impl From<InventoryReport> for InventoryResponse {
    fn from(report: InventoryReport) -> Self {
        Self {
            hotels: report
                .hotels
                .into_iter()
                .map(HotelInventoryResponse::from)
                .collect(),
            flights: report
                .flights
                .into_iter()
                .map(FlightInventoryResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerSpendingResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub total_paid: f64,
}

impl From<CustomerSpendingRow> for CustomerSpendingResponse {
    fn from(row: CustomerSpendingRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            total_paid: row.total_paid,
        }
    }
}
