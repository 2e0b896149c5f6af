use crate::entities::{
    bookings, customers, destinations, package_contents, payments, reservations, rooms, seats,
    tickets, travel_packages,
};
use crate::error::DataResult;
use crate::services::booking::BookingService;
use crate::services::catalog::CatalogService;
use chrono::NaiveDate;
use models::payment_status::PaymentStatus;
use models::service_kind::ServiceKind;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

const CUSTOMERS: [(&str, &str); 5] = [
    ("Ali Yilmaz", "ali@mail.com"),
    ("Ayse Demir", "ayse@mail.com"),
    ("Mehmet Kara", "mehmet@mail.com"),
    ("Zeynep Aydin", "zeynep@mail.com"),
    ("Burak Aslan", "burak@mail.com"),
];

const DESTINATIONS: [(&str, &str); 9] = [
    ("Paris", "France"),
    ("Tokyo", "Japan"),
    ("Rome", "Italy"),
    ("New York", "USA"),
    ("Dubai", "UAE"),
    ("Istanbul", "Turkey"),
    ("Barcelona", "Spain"),
    ("Cairo", "Egypt"),
    ("Nice", "France (Nice)"),
];

const FLIGHTS: [(&str, f64, &str); 5] = [
    ("TK101 Flight", 1500.0, "TK101"),
    ("LH404 Flight", 2000.0, "LH404"),
    ("BA505 Flight", 2500.0, "BA505"),
    ("AA100 Flight", 1800.0, "AA100"),
    ("JL777 Flight", 2200.0, "JL777"),
];

const HOTELS: [(&str, f64); 5] = [
    ("Hilton Paris", 3000.0),
    ("Rixos Antalya", 4500.0),
    ("Marriott Rome", 2800.0),
    ("Plaza NYC", 5000.0),
    ("Burj Al Arab", 8000.0),
];

// (destination index, name, price)
const PACKAGES: [(usize, &str, f64); 10] = [
    (0, "Romantic Escape", 5000.0),
    (1, "Sakura Tour", 7000.0),
    (2, "Ancient Rome", 4000.0),
    (3, "NYC Lights", 6000.0),
    (4, "Dubai Luxury", 9000.0),
    (5, "Türkiye Delight", 3500.0),
    (6, "Spain Fiesta", 3800.0),
    (2, "Italy Cultural Package", 5500.0),
    (0, "France Tour Deluxe", 6200.0),
    (7, "Egypt Nile Experience", 4800.0),
];

// (package index, service index); services are the 5 flights then 5 hotels
const PACKAGE_CONTENTS: [(usize, usize); 15] = [
    (0, 5),
    (0, 0),
    (1, 6),
    (1, 1),
    (2, 7),
    (2, 2),
    (3, 8),
    (3, 3),
    (4, 9),
    (4, 4),
    (5, 5),
    (6, 6),
    (7, 7),
    (8, 5),
    (9, 9),
];

// (customer index, package index, booking date)
const BOOKINGS: [(usize, usize, (i32, u32, u32)); 5] = [
    (0, 0, (2025, 1, 10)),
    (1, 1, (2025, 2, 15)),
    (2, 2, (2025, 3, 20)),
    (3, 3, (2025, 4, 5)),
    (0, 4, (2025, 5, 12)),
];

// (booking index, amount); booking #1 pays its package price in full
const PAYMENTS: [(usize, f64); 5] = [(0, 5000.0), (1, 4000.0), (2, 4000.0), (3, 3000.0), (4, 9000.0)];

pub struct SeedService;

impl SeedService {
    /// Populate the fixed reference dataset if the store has no customers.
    /// The emptiness check is the only guard, so wiping the store and
    /// restarting reseeds it. Returns whether seeding ran.
    pub async fn seed_if_empty(db: &DatabaseConnection) -> DataResult<bool> {
        if customers::Entity::find().count(db).await? > 0 {
            return Ok(false);
        }

        let txn = db.begin().await?;
        Self::populate(&txn).await?;
        txn.commit().await?;

        // Derive every booking's status from the seeded payments
        BookingService::recompute_all(db).await?;

        Ok(true)
    }

    async fn populate<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
        let mut cust_ids = Vec::new();
        for (name, email) in CUSTOMERS {
            let id = customers::Entity::insert(customers::ActiveModel {
                name: Set(name.to_string()),
                email: Set(email.to_string()),
                ..Default::default()
            })
            .exec(conn)
            .await?
            .last_insert_id;
            cust_ids.push(id);
        }

        let mut dest_ids = Vec::new();
        for (city, country) in DESTINATIONS {
            let id = destinations::Entity::insert(destinations::ActiveModel {
                city: Set(city.to_string()),
                country: Set(country.to_string()),
                ..Default::default()
            })
            .exec(conn)
            .await?
            .last_insert_id;
            dest_ids.push(id);
        }

        let mut service_ids = Vec::new();
        for (name, price, airline) in FLIGHTS {
            let kind = ServiceKind::Flight {
                airline: airline.to_string(),
            };
            service_ids.push(CatalogService::insert_service(conn, name, price, &kind).await?);
        }
        for (name, price) in HOTELS {
            let kind = ServiceKind::Hotel { stars: 5 };
            service_ids.push(CatalogService::insert_service(conn, name, price, &kind).await?);
        }

        let mut pkg_ids = Vec::new();
        for (dest_idx, name, price) in PACKAGES {
            let id = travel_packages::Entity::insert(travel_packages::ActiveModel {
                dest_id: Set(dest_ids[dest_idx]),
                pkg_name: Set(name.to_string()),
                price: Set(price),
                ..Default::default()
            })
            .exec(conn)
            .await?
            .last_insert_id;
            pkg_ids.push(id);
        }

        for (pkg_idx, service_idx) in PACKAGE_CONTENTS {
            package_contents::Entity::insert(package_contents::ActiveModel {
                pkg_id: Set(pkg_ids[pkg_idx]),
                service_id: Set(service_ids[service_idx]),
                ..Default::default()
            })
            .exec(conn)
            .await?;
        }

        let mut booking_ids = Vec::new();
        for (cust_idx, pkg_idx, (y, m, d)) in BOOKINGS {
            let id = bookings::Entity::insert(bookings::ActiveModel {
                cust_id: Set(cust_ids[cust_idx]),
                pkg_id: Set(pkg_ids[pkg_idx]),
                booking_date: Set(seed_date(y, m, d)),
                payment_status: Set(PaymentStatus::Unpaid),
                ..Default::default()
            })
            .exec(conn)
            .await?
            .last_insert_id;
            booking_ids.push(id);
        }

        for (booking_idx, amount) in PAYMENTS {
            payments::Entity::insert(payments::ActiveModel {
                booking_id: Set(booking_ids[booking_idx]),
                amount: Set(amount),
                payment_date: Set(chrono::Local::now().date_naive()),
                ..Default::default()
            })
            .exec(conn)
            .await?;
        }

        // One sample reservation in the first hotel's first room
        let first_hotel = service_ids[5];
        let first_room = rooms::Entity::find()
            .filter(rooms::Column::HotelId.eq(first_hotel))
            .order_by_asc(rooms::Column::Id)
            .one(conn)
            .await?;
        reservations::Entity::insert(reservations::ActiveModel {
            booking_id: Set(booking_ids[0]),
            service_id: Set(first_hotel),
            room_id: Set(first_room.map(|room| room.id)),
            check_in: Set(seed_date(2025, 1, 10)),
            check_out: Set(Some(seed_date(2025, 1, 15))),
            ..Default::default()
        })
        .exec(conn)
        .await?;

        // One sample ticket on the first flight's first seat
        let first_seat = seats::Entity::find()
            .filter(seats::Column::FlightId.eq(service_ids[0]))
            .order_by_asc(seats::Column::Id)
            .one(conn)
            .await?;
        if let Some(seat) = first_seat {
            tickets::Entity::insert(tickets::ActiveModel {
                booking_id: Set(booking_ids[0]),
                seat_id: Set(seat.id),
                issue_date: Set(seed_date(2025, 1, 10)),
                ..Default::default()
            })
            .exec(conn)
            .await?;
        }

        Ok(())
    }
}

fn seed_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{flights, hotels, services};
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_seed_populates_reference_dataset() {
        let db = setup_test_db().await;

        assert!(SeedService::seed_if_empty(&db).await.unwrap());

        assert_eq!(customers::Entity::find().count(&db).await.unwrap(), 5);
        assert_eq!(destinations::Entity::find().count(&db).await.unwrap(), 9);
        assert_eq!(services::Entity::find().count(&db).await.unwrap(), 10);
        assert_eq!(flights::Entity::find().count(&db).await.unwrap(), 5);
        assert_eq!(hotels::Entity::find().count(&db).await.unwrap(), 5);
        assert_eq!(travel_packages::Entity::find().count(&db).await.unwrap(), 10);
        assert_eq!(bookings::Entity::find().count(&db).await.unwrap(), 5);
        assert_eq!(seats::Entity::find().count(&db).await.unwrap(), 20);
        assert_eq!(rooms::Entity::find().count(&db).await.unwrap(), 20);
        assert_eq!(
            package_contents::Entity::find().count(&db).await.unwrap(),
            15
        );
        assert_eq!(reservations::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(tickets::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_derives_statuses() {
        let db = setup_test_db().await;
        SeedService::seed_if_empty(&db).await.unwrap();

        let all = bookings::Entity::find().all(&db).await.unwrap();
        let by_id = |id: i32| {
            all.iter()
                .find(|booking| booking.id == id)
                .map(|booking| booking.payment_status)
        };

        // Booking 1 paid 5000 against a 5000 package: exactly paid in full
        assert_eq!(by_id(1), Some(PaymentStatus::Paid));
        // Booking 2 paid 4000 of 7000
        assert_eq!(by_id(2), Some(PaymentStatus::Partial));
        // Booking 3 paid 4000 of 4000
        assert_eq!(by_id(3), Some(PaymentStatus::Paid));
        // Booking 4 paid 3000 of 6000
        assert_eq!(by_id(4), Some(PaymentStatus::Partial));
        // Booking 5 paid 9000 of 9000
        assert_eq!(by_id(5), Some(PaymentStatus::Paid));
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = setup_test_db().await;

        assert!(SeedService::seed_if_empty(&db).await.unwrap());
        assert!(!SeedService::seed_if_empty(&db).await.unwrap());

        assert_eq!(customers::Entity::find().count(&db).await.unwrap(), 5);
    }
}
