use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create customers table
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string().not_null())
                    .col(
                        ColumnDef::new(Customers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create destinations table
        manager
            .create_table(
                Table::create()
                    .table(Destinations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Destinations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Destinations::City).string().not_null())
                    .col(ColumnDef::new(Destinations::Country).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create services table
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Services::ServiceName).string().not_null())
                    .col(ColumnDef::new(Services::BasePrice).double().not_null())
                    .to_owned(),
            )
            .await?;

        // Create flights extension table (shares its key with services)
        manager
            .create_table(
                Table::create()
                    .table(Flights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Flights::ServiceId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Flights::Airline).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-flights-service_id")
                            .from(Flights::Table, Flights::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create hotels extension table (shares its key with services)
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hotels::ServiceId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hotels::Stars).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-hotels-service_id")
                            .from(Hotels::Table, Hotels::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create seats table
        manager
            .create_table(
                Table::create()
                    .table(Seats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Seats::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Seats::FlightId).integer().not_null())
                    .col(ColumnDef::new(Seats::SeatNo).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-seats-flight_id")
                            .from(Seats::Table, Seats::FlightId)
                            .to(Flights::Table, Flights::ServiceId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::HotelId).integer().not_null())
                    .col(ColumnDef::new(Rooms::RoomNo).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-rooms-hotel_id")
                            .from(Rooms::Table, Rooms::HotelId)
                            .to(Hotels::Table, Hotels::ServiceId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create travel_packages table. No cascade from destinations:
        // deleting a destination that still has packages must fail.
        manager
            .create_table(
                Table::create()
                    .table(TravelPackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TravelPackages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TravelPackages::DestId).integer().not_null())
                    .col(ColumnDef::new(TravelPackages::PkgName).string().not_null())
                    .col(ColumnDef::new(TravelPackages::Price).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-travel_packages-dest_id")
                            .from(TravelPackages::Table, TravelPackages::DestId)
                            .to(Destinations::Table, Destinations::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create package_contents junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(PackageContents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PackageContents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PackageContents::PkgId).integer().not_null())
                    .col(
                        ColumnDef::new(PackageContents::ServiceId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-package_contents-pkg_id")
                            .from(PackageContents::Table, PackageContents::PkgId)
                            .to(TravelPackages::Table, TravelPackages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-package_contents-service_id")
                            .from(PackageContents::Table, PackageContents::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create bookings table
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::CustId).integer().not_null())
                    .col(ColumnDef::new(Bookings::PkgId).integer().not_null())
                    .col(ColumnDef::new(Bookings::BookingDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-cust_id")
                            .from(Bookings::Table, Bookings::CustId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-pkg_id")
                            .from(Bookings::Table, Bookings::PkgId)
                            .to(TravelPackages::Table, TravelPackages::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create payments table
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::BookingId).integer().not_null())
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(ColumnDef::new(Payments::PaymentDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payments-booking_id")
                            .from(Payments::Table, Payments::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create reservations table
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::BookingId).integer().not_null())
                    .col(ColumnDef::new(Reservations::ServiceId).integer().not_null())
                    .col(ColumnDef::new(Reservations::RoomId).integer())
                    .col(ColumnDef::new(Reservations::CheckIn).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-booking_id")
                            .from(Reservations::Table, Reservations::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-service_id")
                            .from(Reservations::Table, Reservations::ServiceId)
                            .to(Services::Table, Services::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations-room_id")
                            .from(Reservations::Table, Reservations::RoomId)
                            .to(Rooms::Table, Rooms::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tickets table
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tickets::BookingId).integer().not_null())
                    .col(ColumnDef::new(Tickets::SeatId).integer().not_null())
                    .col(ColumnDef::new(Tickets::IssueDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tickets-booking_id")
                            .from(Tickets::Table, Tickets::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tickets-seat_id")
                            .from(Tickets::Table, Tickets::SeatId)
                            .to(Seats::Table, Seats::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PackageContents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TravelPackages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Seats::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Flights::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Destinations::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
    Name,
    Email,
}

#[derive(Iden)]
enum Destinations {
    Table,
    Id,
    City,
    Country,
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
    ServiceName,
    BasePrice,
}

#[derive(Iden)]
enum Flights {
    Table,
    ServiceId,
    Airline,
}

#[derive(Iden)]
enum Hotels {
    Table,
    ServiceId,
    Stars,
}

#[derive(Iden)]
enum Seats {
    Table,
    Id,
    FlightId,
    SeatNo,
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    HotelId,
    RoomNo,
}

#[derive(Iden)]
enum TravelPackages {
    Table,
    Id,
    DestId,
    PkgName,
    Price,
}

#[derive(Iden)]
enum PackageContents {
    Table,
    Id,
    PkgId,
    ServiceId,
}

#[derive(Iden)]
enum Bookings {
    Table,
    Id,
    CustId,
    PkgId,
    BookingDate,
}

#[derive(Iden)]
enum Payments {
    Table,
    Id,
    BookingId,
    Amount,
    PaymentDate,
}

#[derive(Iden)]
enum Reservations {
    Table,
    Id,
    BookingId,
    ServiceId,
    RoomId,
    CheckIn,
}

#[derive(Iden)]
enum Tickets {
    Table,
    Id,
    BookingId,
    SeatId,
    IssueDate,
}
