use crate::entities::{bookings, customers, flights, hotels, payments, services, travel_packages};
use crate::services::booking::{BookingRow, BookingService};
use chrono::NaiveDate;
use models::payment_status::PaymentStatus;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryOrder,
    QuerySelect, RelationTrait, prelude::Expr,
};
use serde::Serialize;

/// One row of the comprehensive booking report: who booked what, where they
/// are going, and how much of it is paid.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct BookingReportRow {
    pub id: i32,
    pub booking_date: NaiveDate,
    pub customer: String,
    pub contact: String,
    pub package: String,
    pub package_price: f64,
    pub destination: String,
    pub total_paid: f64,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct HotelInventoryRow {
    pub service_id: i32,
    pub service_name: String,
    pub stars: i32,
    pub total_rooms: i64,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct FlightInventoryRow {
    pub service_id: i32,
    pub service_name: String,
    pub airline: String,
    pub total_seats: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    pub hotels: Vec<HotelInventoryRow>,
    pub flights: Vec<FlightInventoryRow>,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct CustomerSpendingRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub total_paid: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub customers: u64,
    pub bookings: u64,
    pub packages: u64,
    pub total_revenue: f64,
    pub recent_bookings: Vec<BookingRow>,
}

pub struct ReportService;

impl ReportService {
    pub async fn dashboard(db: &DatabaseConnection) -> Result<DashboardData, DbErr> {
        let customers = customers::Entity::find().count(db).await?;
        let bookings = bookings::Entity::find().count(db).await?;
        let packages = travel_packages::Entity::find().count(db).await?;

        let total_revenue: Option<f64> = payments::Entity::find()
            .select_only()
            .column_as(Expr::cust("COALESCE(SUM(amount), 0)"), "revenue")
            .into_tuple()
            .one(db)
            .await?;

        let recent_bookings = BookingService::list_bookings(db, Some(10)).await?;

        Ok(DashboardData {
            customers,
            bookings,
            packages,
            total_revenue: total_revenue.unwrap_or(0.0),
            recent_bookings,
        })
    }

    pub async fn booking_report(db: &DatabaseConnection) -> Result<Vec<BookingReportRow>, DbErr> {
        bookings::Entity::find()
            .select_only()
            .column(bookings::Column::Id)
            .column(bookings::Column::BookingDate)
            .column_as(customers::Column::Name, "customer")
            .column_as(customers::Column::Email, "contact")
            .column_as(travel_packages::Column::PkgName, "package")
            .column_as(travel_packages::Column::Price, "package_price")
            .column_as(
                Expr::cust("destinations.city || ', ' || destinations.country"),
                "destination",
            )
            .column_as(Expr::cust("COALESCE(SUM(payments.amount), 0)"), "total_paid")
            .column(bookings::Column::PaymentStatus)
            .join(JoinType::InnerJoin, bookings::Relation::Customer.def())
            .join(JoinType::InnerJoin, bookings::Relation::TravelPackage.def())
            .join(
                JoinType::InnerJoin,
                travel_packages::Relation::Destination.def(),
            )
            .join(JoinType::LeftJoin, bookings::Relation::Payments.def())
            .group_by(bookings::Column::Id)
            .order_by_desc(bookings::Column::BookingDate)
            .into_model::<BookingReportRow>()
            .all(db)
            .await
    }

    pub async fn inventory(db: &DatabaseConnection) -> Result<InventoryReport, DbErr> {
        let hotels = hotels::Entity::find()
            .select_only()
            .column(hotels::Column::ServiceId)
            .column_as(services::Column::ServiceName, "service_name")
            .column(hotels::Column::Stars)
            .column_as(Expr::cust("COUNT(rooms.id)"), "total_rooms")
            .join(JoinType::InnerJoin, hotels::Relation::Service.def())
            .join(JoinType::LeftJoin, hotels::Relation::Rooms.def())
            .group_by(hotels::Column::ServiceId)
            .into_model::<HotelInventoryRow>()
            .all(db)
            .await?;

        let flights = flights::Entity::find()
            .select_only()
            .column(flights::Column::ServiceId)
            .column_as(services::Column::ServiceName, "service_name")
            .column(flights::Column::Airline)
            .column_as(Expr::cust("COUNT(seats.id)"), "total_seats")
            .join(JoinType::InnerJoin, flights::Relation::Service.def())
            .join(JoinType::LeftJoin, flights::Relation::Seats.def())
            .group_by(flights::Column::ServiceId)
            .into_model::<FlightInventoryRow>()
            .all(db)
            .await?;

        Ok(InventoryReport { hotels, flights })
    }

    /// Total paid per customer, highest spenders first. Customers with no
    /// payments appear with a zero total.
    pub async fn customer_spending(
        db: &DatabaseConnection,
    ) -> Result<Vec<CustomerSpendingRow>, DbErr> {
        customers::Entity::find()
            .select_only()
            .column(customers::Column::Id)
            .column(customers::Column::Name)
            .column(customers::Column::Email)
            .column_as(Expr::cust("COALESCE(SUM(payments.amount), 0)"), "total_paid")
            .join(JoinType::LeftJoin, customers::Relation::Bookings.def())
            .join(JoinType::LeftJoin, bookings::Relation::Payments.def())
            .group_by(customers::Column::Id)
            .order_by_desc(Expr::cust("total_paid"))
            .into_model::<CustomerSpendingRow>()
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::destinations;
    use crate::test_utils::setup_test_db;
    use sea_orm::ActiveValue::Set;

    #[tokio::test]
    async fn test_reports_tolerate_empty_store() {
        let db = setup_test_db().await;

        assert!(ReportService::booking_report(&db).await.unwrap().is_empty());
        assert!(
            ReportService::customer_spending(&db)
                .await
                .unwrap()
                .is_empty()
        );

        let inventory = ReportService::inventory(&db).await.unwrap();
        assert!(inventory.hotels.is_empty());
        assert!(inventory.flights.is_empty());

        let dashboard = ReportService::dashboard(&db).await.unwrap();
        assert_eq!(dashboard.customers, 0);
        assert_eq!(dashboard.total_revenue, 0.0);
        assert!(dashboard.recent_bookings.is_empty());
    }

    #[tokio::test]
    async fn test_booking_report_sums_payments() {
        let db = setup_test_db().await;

        let dest_id = destinations::Entity::insert(destinations::ActiveModel {
            city: Set("Tokyo".to_string()),
            country: Set("Japan".to_string()),
            ..Default::default()
        })
        .exec(&db)
        .await
        .unwrap()
        .last_insert_id;

        let cust_id = customers::Entity::insert(customers::ActiveModel {
            name: Set("Ayse Demir".to_string()),
            email: Set("ayse@mail.com".to_string()),
            ..Default::default()
        })
        .exec(&db)
        .await
        .unwrap()
        .last_insert_id;

        let pkg_id = travel_packages::Entity::insert(travel_packages::ActiveModel {
            dest_id: Set(dest_id),
            pkg_name: Set("Sakura Tour".to_string()),
            price: Set(7000.0),
            ..Default::default()
        })
        .exec(&db)
        .await
        .unwrap()
        .last_insert_id;

        let booking_id = BookingService::create_booking(
            &db,
            cust_id,
            pkg_id,
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
        )
        .await
        .unwrap();
        BookingService::record_payment(&db, booking_id, 1500.0, None)
            .await
            .unwrap();
        BookingService::record_payment(&db, booking_id, 2500.0, None)
            .await
            .unwrap();

        let report = ReportService::booking_report(&db).await.unwrap();
        assert_eq!(report.len(), 1);
        let row = &report[0];
        assert_eq!(row.customer, "Ayse Demir");
        assert_eq!(row.destination, "Tokyo, Japan");
        assert_eq!(row.total_paid, 4000.0);
        assert_eq!(row.payment_status, PaymentStatus::Partial);

        let spending = ReportService::customer_spending(&db).await.unwrap();
        assert_eq!(spending[0].total_paid, 4000.0);
    }
}
