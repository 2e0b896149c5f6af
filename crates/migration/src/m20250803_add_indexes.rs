use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on bookings for the report joins
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_cust_id")
                    .table(Bookings::Table)
                    .col(Bookings::CustId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_pkg_id")
                    .table(Bookings::Table)
                    .col(Bookings::PkgId)
                    .to_owned(),
            )
            .await?;

        // Index on payments.booking_id for the status derivation sum
        manager
            .create_index(
                Index::create()
                    .name("idx_payments_booking_id")
                    .table(Payments::Table)
                    .col(Payments::BookingId)
                    .to_owned(),
            )
            .await?;

        // Indexes on the inventory tables for the per-service counts
        manager
            .create_index(
                Index::create()
                    .name("idx_seats_flight_id")
                    .table(Seats::Table)
                    .col(Seats::FlightId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_hotel_id")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .to_owned(),
            )
            .await?;

        // Indexes on the package junction table
        manager
            .create_index(
                Index::create()
                    .name("idx_package_contents_pkg_id")
                    .table(PackageContents::Table)
                    .col(PackageContents::PkgId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_package_contents_service_id")
                    .table(PackageContents::Table)
                    .col(PackageContents::ServiceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_package_contents_service_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_package_contents_pkg_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_rooms_hotel_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_seats_flight_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_payments_booking_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_bookings_pkg_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_bookings_cust_id").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Bookings {
    Table,
    CustId,
    PkgId,
}

#[derive(Iden)]
enum Payments {
    Table,
    BookingId,
}

#[derive(Iden)]
enum Seats {
    Table,
    FlightId,
}

#[derive(Iden)]
enum Rooms {
    Table,
    HotelId,
}

#[derive(Iden)]
enum PackageContents {
    Table,
    PkgId,
    ServiceId,
}
