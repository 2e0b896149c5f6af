use crate::entities::{bookings, customers, payments, travel_packages};
use crate::error::DataResult;
use chrono::NaiveDate;
use futures::future::try_join_all;
use models::payment_status::PaymentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait, prelude::Expr,
};
use serde::Serialize;

/// A booking joined with its customer and package for list views.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct BookingRow {
    pub id: i32,
    pub booking_date: NaiveDate,
    pub customer: String,
    pub package: String,
    pub price: f64,
    pub payment_status: PaymentStatus,
}

pub struct BookingService;

impl BookingService {
    pub async fn create_booking(
        db: &DatabaseConnection,
        cust_id: i32,
        pkg_id: i32,
        booking_date: NaiveDate,
    ) -> DataResult<i32> {
        let result = bookings::Entity::insert(bookings::ActiveModel {
            cust_id: Set(cust_id),
            pkg_id: Set(pkg_id),
            booking_date: Set(booking_date),
            // Zero payments derive to Unpaid, so no recompute is needed here
            payment_status: Set(PaymentStatus::Unpaid),
            ..Default::default()
        })
        .exec(db)
        .await?;

        Ok(result.last_insert_id)
    }

    /// Move a booking to a new package and date. The package price is an
    /// input of the payment status, so the status is recomputed in the same
    /// transaction as the change.
    pub async fn update_booking(
        db: &DatabaseConnection,
        booking_id: i32,
        pkg_id: i32,
        booking_date: NaiveDate,
    ) -> DataResult<Option<PaymentStatus>> {
        let txn = db.begin().await?;

        let Some(booking) = bookings::Entity::find_by_id(booking_id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: bookings::ActiveModel = booking.into();
        active.pkg_id = Set(pkg_id);
        active.booking_date = Set(booking_date);
        active.update(&txn).await?;

        let status = Self::recompute_status(&txn, booking_id).await?;
        txn.commit().await?;

        Ok(status)
    }

    /// Delete a booking; payments, reservations and tickets cascade with it.
    pub async fn delete_booking(db: &DatabaseConnection, booking_id: i32) -> DataResult<u64> {
        let result = bookings::Entity::delete_by_id(booking_id).exec(db).await?;
        Ok(result.rows_affected)
    }

    /// Record a payment and recompute the booking's status in one
    /// transaction, so no caller can observe (or persist) a stale status.
    pub async fn record_payment(
        db: &DatabaseConnection,
        booking_id: i32,
        amount: f64,
        payment_date: Option<NaiveDate>,
    ) -> DataResult<PaymentStatus> {
        let txn = db.begin().await?;

        payments::Entity::insert(payments::ActiveModel {
            booking_id: Set(booking_id),
            amount: Set(amount),
            payment_date: Set(payment_date.unwrap_or_else(|| chrono::Local::now().date_naive())),
            ..Default::default()
        })
        .exec(&txn)
        .await?;

        // The insert passed the foreign key check, so the booking exists
        let status = Self::recompute_status(&txn, booking_id)
            .await?
            .unwrap_or_default();
        txn.commit().await?;

        Ok(status)
    }

    /// Sum of all payments against a booking; no payments count as zero.
    pub async fn total_paid<C: ConnectionTrait>(conn: &C, booking_id: i32) -> Result<f64, DbErr> {
        let total: Option<f64> = payments::Entity::find()
            .select_only()
            .column_as(Expr::cust("COALESCE(SUM(amount), 0)"), "total")
            .filter(payments::Column::BookingId.eq(booking_id))
            .into_tuple()
            .one(conn)
            .await?;

        Ok(total.unwrap_or(0.0))
    }

    /// Re-derive and persist one booking's payment status from its payments
    /// and its package price. A missing booking is a no-op, not an error.
    pub async fn recompute_status<C: ConnectionTrait>(
        conn: &C,
        booking_id: i32,
    ) -> Result<Option<PaymentStatus>, DbErr> {
        let Some(booking) = bookings::Entity::find_by_id(booking_id).one(conn).await? else {
            return Ok(None);
        };

        let total_paid = Self::total_paid(conn, booking_id).await?;

        // A vanished package prices at zero
        let price = travel_packages::Entity::find_by_id(booking.pkg_id)
            .one(conn)
            .await?
            .map(|pkg| pkg.price)
            .unwrap_or(0.0);

        let status = PaymentStatus::for_amounts(total_paid, price);

        if status != booking.payment_status {
            let mut active: bookings::ActiveModel = booking.into();
            active.payment_status = Set(status);
            active.update(conn).await?;
        }

        Ok(Some(status))
    }

    /// Recompute every booking's status; used after seeding and bulk edits.
    pub async fn recompute_all(db: &DatabaseConnection) -> Result<(), DbErr> {
        let ids: Vec<i32> = bookings::Entity::find()
            .select_only()
            .column(bookings::Column::Id)
            .into_tuple()
            .all(db)
            .await?;

        try_join_all(
            ids.into_iter()
                .map(|booking_id| Self::recompute_status(db, booking_id)),
        )
        .await?;

        Ok(())
    }

    pub async fn list_bookings(
        db: &DatabaseConnection,
        limit: Option<u64>,
    ) -> Result<Vec<BookingRow>, DbErr> {
        bookings::Entity::find()
            .select_only()
            .column(bookings::Column::Id)
            .column(bookings::Column::BookingDate)
            .column_as(customers::Column::Name, "customer")
            .column_as(travel_packages::Column::PkgName, "package")
            .column_as(travel_packages::Column::Price, "price")
            .column(bookings::Column::PaymentStatus)
            .join(JoinType::InnerJoin, bookings::Relation::Customer.def())
            .join(JoinType::InnerJoin, bookings::Relation::TravelPackage.def())
            .order_by_desc(bookings::Column::BookingDate)
            .limit(limit)
            .into_model::<BookingRow>()
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::destinations;
    use crate::error::DataError;
    use crate::test_utils::setup_test_db;

    async fn seed_booking(db: &DatabaseConnection, price: f64) -> i32 {
        let dest_id = destinations::Entity::insert(destinations::ActiveModel {
            city: Set("Paris".to_string()),
            country: Set("France".to_string()),
            ..Default::default()
        })
        .exec(db)
        .await
        .unwrap()
        .last_insert_id;

        let cust_id = customers::Entity::insert(customers::ActiveModel {
            name: Set("Ali Yilmaz".to_string()),
            email: Set("ali@mail.com".to_string()),
            ..Default::default()
        })
        .exec(db)
        .await
        .unwrap()
        .last_insert_id;

        let pkg_id = travel_packages::Entity::insert(travel_packages::ActiveModel {
            dest_id: Set(dest_id),
            pkg_name: Set("Romantic Escape".to_string()),
            price: Set(price),
            ..Default::default()
        })
        .exec(db)
        .await
        .unwrap()
        .last_insert_id;

        BookingService::create_booking(
            db,
            cust_id,
            pkg_id,
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
        .await
        .unwrap()
    }

    async fn stored_status(db: &DatabaseConnection, booking_id: i32) -> PaymentStatus {
        bookings::Entity::find_by_id(booking_id)
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .payment_status
    }

    #[tokio::test]
    async fn test_new_booking_is_unpaid() {
        let db = setup_test_db().await;
        let booking_id = seed_booking(&db, 5000.0).await;

        let status = BookingService::recompute_status(&db, booking_id)
            .await
            .unwrap();
        assert_eq!(status, Some(PaymentStatus::Unpaid));
        assert_eq!(stored_status(&db, booking_id).await, PaymentStatus::Unpaid);
    }

    #[tokio::test]
    async fn test_payments_accumulate_to_paid() {
        let db = setup_test_db().await;
        let booking_id = seed_booking(&db, 5000.0).await;

        // 1000 of 5000 paid
        let status = BookingService::record_payment(&db, booking_id, 1000.0, None)
            .await
            .unwrap();
        assert_eq!(status, PaymentStatus::Partial);

        // 5000 of 5000 paid; equality counts as paid in full
        let status = BookingService::record_payment(&db, booking_id, 4000.0, None)
            .await
            .unwrap();
        assert_eq!(status, PaymentStatus::Paid);
        assert_eq!(stored_status(&db, booking_id).await, PaymentStatus::Paid);
    }

    #[tokio::test]
    async fn test_payment_against_missing_booking_is_rejected() {
        let db = setup_test_db().await;

        let err = BookingService::record_payment(&db, 999, 100.0, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Constraint(_)));

        // The rolled-back transaction must leave no orphan payment behind
        let count = payments::Entity::find().all(&db).await.unwrap().len();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_recompute_missing_booking_is_noop() {
        let db = setup_test_db().await;

        let status = BookingService::recompute_status(&db, 42).await.unwrap();
        assert_eq!(status, None);
    }

    #[tokio::test]
    async fn test_recompute_all_is_idempotent() {
        let db = setup_test_db().await;
        let booking_id = seed_booking(&db, 5000.0).await;
        BookingService::record_payment(&db, booking_id, 750.0, None)
            .await
            .unwrap();

        BookingService::recompute_all(&db).await.unwrap();
        let first = stored_status(&db, booking_id).await;

        BookingService::recompute_all(&db).await.unwrap();
        let second = stored_status(&db, booking_id).await;

        assert_eq!(first, PaymentStatus::Partial);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_package_change_recomputes_status() {
        let db = setup_test_db().await;
        let booking_id = seed_booking(&db, 5000.0).await;
        BookingService::record_payment(&db, booking_id, 4000.0, None)
            .await
            .unwrap();
        assert_eq!(stored_status(&db, booking_id).await, PaymentStatus::Partial);

        // Move the booking to a cheaper package; 4000 now covers the price
        let dest_id = destinations::Entity::find()
            .one(&db)
            .await
            .unwrap()
            .unwrap()
            .id;
        let cheap_pkg = travel_packages::Entity::insert(travel_packages::ActiveModel {
            dest_id: Set(dest_id),
            pkg_name: Set("Ancient Rome".to_string()),
            price: Set(4000.0),
            ..Default::default()
        })
        .exec(&db)
        .await
        .unwrap()
        .last_insert_id;

        let status = BookingService::update_booking(
            &db,
            booking_id,
            cheap_pkg,
            NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(status, Some(PaymentStatus::Paid));
        assert_eq!(stored_status(&db, booking_id).await, PaymentStatus::Paid);
    }

    #[tokio::test]
    async fn test_customer_delete_cascades_to_bookings_and_payments() {
        let db = setup_test_db().await;
        let booking_id = seed_booking(&db, 5000.0).await;
        BookingService::record_payment(&db, booking_id, 1000.0, None)
            .await
            .unwrap();

        let customer = customers::Entity::find().one(&db).await.unwrap().unwrap();
        customers::Entity::delete_by_id(customer.id)
            .exec(&db)
            .await
            .unwrap();

        assert!(bookings::Entity::find().all(&db).await.unwrap().is_empty());
        assert!(payments::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_destination_with_packages_cannot_be_deleted() {
        let db = setup_test_db().await;
        seed_booking(&db, 5000.0).await;

        let dest = destinations::Entity::find().one(&db).await.unwrap().unwrap();
        let result = destinations::Entity::delete_by_id(dest.id).exec(&db).await;
        assert!(result.is_err());

        // Both rows stay intact
        assert!(
            destinations::Entity::find_by_id(dest.id)
                .one(&db)
                .await
                .unwrap()
                .is_some()
        );
        assert_eq!(
            travel_packages::Entity::find().all(&db).await.unwrap().len(),
            1
        );
    }
}
