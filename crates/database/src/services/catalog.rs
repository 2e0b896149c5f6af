use crate::entities::{flights, hotels, rooms, seats, services};
use crate::error::{DataError, DataResult};
use models::service_kind::ServiceKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, JoinType, QueryFilter, QuerySelect, RelationTrait,
    TransactionTrait,
};

/// A service joined with whichever extension row it has. `kind` is absent
/// only for rows predating this system; the composite add below cannot
/// produce one.
#[derive(Debug, Clone)]
pub struct ServiceRecord {
    pub id: i32,
    pub name: String,
    pub base_price: f64,
    pub kind: Option<ServiceKind>,
}

#[derive(Debug, FromQueryResult)]
struct ServiceJoinRow {
    id: i32,
    service_name: String,
    base_price: f64,
    airline: Option<String>,
    stars: Option<i32>,
}

impl From<ServiceJoinRow> for ServiceRecord {
    fn from(row: ServiceJoinRow) -> Self {
        let kind = match (row.airline, row.stars) {
            (Some(airline), _) => Some(ServiceKind::Flight { airline }),
            (None, Some(stars)) => Some(ServiceKind::Hotel { stars }),
            (None, None) => None,
        };

        ServiceRecord {
            id: row.id,
            name: row.service_name,
            base_price: row.base_price,
            kind,
        }
    }
}

pub struct CatalogService;

impl CatalogService {
    /// Add a service with its extension row and initial inventory (four
    /// seats or four rooms) in one transaction: a failure at any step
    /// leaves no orphaned service behind.
    pub async fn add_service(
        db: &DatabaseConnection,
        name: &str,
        base_price: f64,
        kind: &ServiceKind,
    ) -> DataResult<i32> {
        if name.trim().is_empty() {
            return Err(DataError::Validation("service name required".to_string()));
        }

        let txn = db.begin().await?;
        let service_id = Self::insert_service(&txn, name, base_price, kind).await?;
        txn.commit().await?;

        Ok(service_id)
    }

    /// Insert the service row, its extension and its inventory units on the
    /// given connection; the seed runs this inside its own transaction.
    pub(crate) async fn insert_service<C: ConnectionTrait>(
        conn: &C,
        name: &str,
        base_price: f64,
        kind: &ServiceKind,
    ) -> Result<i32, DbErr> {
        let service_id = services::Entity::insert(services::ActiveModel {
            service_name: Set(name.to_string()),
            base_price: Set(base_price),
            ..Default::default()
        })
        .exec(conn)
        .await?
        .last_insert_id;

        match kind {
            ServiceKind::Flight { airline } => {
                flights::Entity::insert(flights::ActiveModel {
                    service_id: Set(service_id),
                    airline: Set(airline.clone()),
                })
                .exec(conn)
                .await?;

                for seat_no in kind.initial_unit_labels() {
                    seats::Entity::insert(seats::ActiveModel {
                        flight_id: Set(service_id),
                        seat_no: Set((*seat_no).to_string()),
                        ..Default::default()
                    })
                    .exec(conn)
                    .await?;
                }
            }
            ServiceKind::Hotel { stars } => {
                hotels::Entity::insert(hotels::ActiveModel {
                    service_id: Set(service_id),
                    stars: Set(*stars),
                })
                .exec(conn)
                .await?;

                for room_no in kind.initial_unit_labels() {
                    rooms::Entity::insert(rooms::ActiveModel {
                        hotel_id: Set(service_id),
                        room_no: Set((*room_no).to_string()),
                        ..Default::default()
                    })
                    .exec(conn)
                    .await?;
                }
            }
        }

        Ok(service_id)
    }

    pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<ServiceRecord>, DbErr> {
        let rows = Self::joined_query().into_model::<ServiceJoinRow>().all(db).await?;
        Ok(rows.into_iter().map(ServiceRecord::from).collect())
    }

    pub async fn get_service(
        db: &DatabaseConnection,
        service_id: i32,
    ) -> Result<Option<ServiceRecord>, DbErr> {
        let row = Self::joined_query()
            .filter(services::Column::Id.eq(service_id))
            .into_model::<ServiceJoinRow>()
            .one(db)
            .await?;
        Ok(row.map(ServiceRecord::from))
    }

    /// Field-level update of the shared service columns; absent fields keep
    /// their stored value.
    pub async fn update_service(
        db: &DatabaseConnection,
        service_id: i32,
        name: Option<&str>,
        base_price: Option<f64>,
    ) -> DataResult<Option<()>> {
        if name.is_none() && base_price.is_none() {
            return Err(DataError::Validation(
                "provide a new name or price to update".to_string(),
            ));
        }

        let Some(service) = services::Entity::find_by_id(service_id).one(db).await? else {
            return Ok(None);
        };

        let mut active: services::ActiveModel = service.into();
        if let Some(name) = name {
            active.service_name = Set(name.to_string());
        }
        if let Some(base_price) = base_price {
            active.base_price = Set(base_price);
        }
        active.update(db).await?;

        Ok(Some(()))
    }

    /// Delete a service; the extension row and its seats/rooms cascade.
    pub async fn delete_service(db: &DatabaseConnection, service_id: i32) -> DataResult<u64> {
        let result = services::Entity::delete_by_id(service_id).exec(db).await?;
        Ok(result.rows_affected)
    }

    fn joined_query() -> sea_orm::Select<services::Entity> {
        services::Entity::find()
            .select_only()
            .column(services::Column::Id)
            .column(services::Column::ServiceName)
            .column(services::Column::BasePrice)
            .column_as(flights::Column::Airline, "airline")
            .column_as(hotels::Column::Stars, "stars")
            .join(JoinType::LeftJoin, services::Relation::Flight.def())
            .join(JoinType::LeftJoin, services::Relation::Hotel.def())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_add_flight_creates_four_seats() {
        let db = setup_test_db().await;

        let kind = ServiceKind::Flight {
            airline: "TK".to_string(),
        };
        let service_id = CatalogService::add_service(&db, "TK999", 1200.0, &kind)
            .await
            .unwrap();

        let seat_nos: Vec<String> = seats::Entity::find()
            .filter(seats::Column::FlightId.eq(service_id))
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|seat| seat.seat_no)
            .collect();
        assert_eq!(seat_nos, vec!["1A", "1B", "2A", "2B"]);

        let record = CatalogService::get_service(&db, service_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            record.kind,
            Some(ServiceKind::Flight {
                airline: "TK".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_add_hotel_creates_four_rooms() {
        let db = setup_test_db().await;

        let kind = ServiceKind::Hotel { stars: 5 };
        let service_id = CatalogService::add_service(&db, "Hilton Paris", 3000.0, &kind)
            .await
            .unwrap();

        let room_nos: Vec<String> = rooms::Entity::find()
            .filter(rooms::Column::HotelId.eq(service_id))
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|room| room.room_no)
            .collect();
        assert_eq!(room_nos, vec!["101", "102", "201", "202"]);
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_without_writes() {
        let db = setup_test_db().await;

        let kind = ServiceKind::Hotel { stars: 3 };
        let err = CatalogService::add_service(&db, "  ", 100.0, &kind)
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Validation(_)));
        assert!(services::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_service_touches_only_given_fields() {
        let db = setup_test_db().await;

        let kind = ServiceKind::Hotel { stars: 4 };
        let id = CatalogService::add_service(&db, "Plaza NYC", 5000.0, &kind)
            .await
            .unwrap();

        CatalogService::update_service(&db, id, None, Some(5200.0))
            .await
            .unwrap()
            .unwrap();

        let record = CatalogService::get_service(&db, id).await.unwrap().unwrap();
        assert_eq!(record.name, "Plaza NYC");
        assert_eq!(record.base_price, 5200.0);
        assert_eq!(record.kind, Some(ServiceKind::Hotel { stars: 4 }));
    }

    #[tokio::test]
    async fn test_delete_service_cascades_extension_and_inventory() {
        let db = setup_test_db().await;

        let kind = ServiceKind::Flight {
            airline: "LH".to_string(),
        };
        let service_id = CatalogService::add_service(&db, "LH404", 2000.0, &kind)
            .await
            .unwrap();

        let deleted = CatalogService::delete_service(&db, service_id)
            .await
            .unwrap();
        assert_eq!(deleted, 1);

        assert!(flights::Entity::find().all(&db).await.unwrap().is_empty());
        assert!(seats::Entity::find().all(&db).await.unwrap().is_empty());
    }
}
