use chrono::NaiveDate;
use database::services::booking::BookingRow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: i32,
    pub booking_date: NaiveDate,
    pub customer: String,
    pub package: String,
    pub price: f64,
    pub payment_status: String,
}

impl From<BookingRow> for BookingResponse {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            booking_date: row.booking_date,
            customer: row.customer,
            package: row.package,
            price: row.price,
            payment_status: row.payment_status.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub cust_id: i32,
    pub pkg_id: i32,
    pub booking_date: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingRequest {
    pub pkg_id: i32,
    pub booking_date: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordPaymentRequest {
    pub amount: f64,
    /// Defaults to today when omitted
    pub payment_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentStatusResponse {
    pub booking_id: i32,
    pub payment_status: String,
}
