use crate::entities::{package_contents, services, travel_packages};
use crate::error::{DataError, DataResult};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryOrder, QuerySelect, RelationTrait, prelude::Expr,
};
use serde::Serialize;

/// A package joined with its destination for list views.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct PackageRow {
    pub id: i32,
    pub pkg_name: String,
    pub price: f64,
    pub destination: String,
}

/// A package↔service association joined with both names, newest first.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct ContentRow {
    pub id: i32,
    pub package: String,
    pub service: String,
}

pub struct PackageService;

impl PackageService {
    pub async fn create_package(
        db: &DatabaseConnection,
        dest_id: i32,
        pkg_name: &str,
        price: f64,
    ) -> DataResult<i32> {
        if pkg_name.trim().is_empty() {
            return Err(DataError::Validation("package name required".to_string()));
        }

        let result = travel_packages::Entity::insert(travel_packages::ActiveModel {
            dest_id: Set(dest_id),
            pkg_name: Set(pkg_name.to_string()),
            price: Set(price),
            ..Default::default()
        })
        .exec(db)
        .await?;

        Ok(result.last_insert_id)
    }

    /// Field-level update: absent fields keep their stored value.
    pub async fn update_package(
        db: &DatabaseConnection,
        pkg_id: i32,
        pkg_name: Option<&str>,
        price: Option<f64>,
    ) -> DataResult<Option<()>> {
        if pkg_name.is_none() && price.is_none() {
            return Err(DataError::Validation(
                "provide a new name or price to update".to_string(),
            ));
        }

        let Some(package) = travel_packages::Entity::find_by_id(pkg_id).one(db).await? else {
            return Ok(None);
        };

        let mut active: travel_packages::ActiveModel = package.into();
        if let Some(pkg_name) = pkg_name {
            active.pkg_name = Set(pkg_name.to_string());
        }
        if let Some(price) = price {
            active.price = Set(price);
        }
        active.update(db).await?;

        Ok(Some(()))
    }

    pub async fn delete_package(db: &DatabaseConnection, pkg_id: i32) -> DataResult<u64> {
        let result = travel_packages::Entity::delete_by_id(pkg_id).exec(db).await?;
        Ok(result.rows_affected)
    }

    pub async fn list_packages(db: &DatabaseConnection) -> Result<Vec<PackageRow>, DbErr> {
        travel_packages::Entity::find()
            .select_only()
            .column(travel_packages::Column::Id)
            .column(travel_packages::Column::PkgName)
            .column(travel_packages::Column::Price)
            .column_as(
                Expr::cust("destinations.city || ', ' || destinations.country"),
                "destination",
            )
            .join(
                JoinType::InnerJoin,
                travel_packages::Relation::Destination.def(),
            )
            .into_model::<PackageRow>()
            .all(db)
            .await
    }

    pub async fn add_content(
        db: &DatabaseConnection,
        pkg_id: i32,
        service_id: i32,
    ) -> DataResult<i32> {
        let result = package_contents::Entity::insert(package_contents::ActiveModel {
            pkg_id: Set(pkg_id),
            service_id: Set(service_id),
            ..Default::default()
        })
        .exec(db)
        .await?;

        Ok(result.last_insert_id)
    }

    pub async fn remove_content(db: &DatabaseConnection, content_id: i32) -> DataResult<u64> {
        let result = package_contents::Entity::delete_by_id(content_id)
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn list_contents(db: &DatabaseConnection) -> Result<Vec<ContentRow>, DbErr> {
        package_contents::Entity::find()
            .select_only()
            .column(package_contents::Column::Id)
            .column_as(travel_packages::Column::PkgName, "package")
            .column_as(services::Column::ServiceName, "service")
            .join(
                JoinType::InnerJoin,
                package_contents::Relation::TravelPackage.def(),
            )
            .join(
                JoinType::InnerJoin,
                package_contents::Relation::Service.def(),
            )
            .order_by_desc(package_contents::Column::Id)
            .into_model::<ContentRow>()
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::destinations;
    use crate::services::catalog::CatalogService;
    use crate::test_utils::setup_test_db;
    use models::service_kind::ServiceKind;

    async fn seed_destination(db: &DatabaseConnection) -> i32 {
        destinations::Entity::insert(destinations::ActiveModel {
            city: Set("Rome".to_string()),
            country: Set("Italy".to_string()),
            ..Default::default()
        })
        .exec(db)
        .await
        .unwrap()
        .last_insert_id
    }

    #[tokio::test]
    async fn test_package_list_joins_destination() {
        let db = setup_test_db().await;
        let dest_id = seed_destination(&db).await;
        PackageService::create_package(&db, dest_id, "Ancient Rome", 4000.0)
            .await
            .unwrap();

        let rows = PackageService::list_packages(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].destination, "Rome, Italy");
        assert_eq!(rows[0].price, 4000.0);
    }

    #[tokio::test]
    async fn test_update_without_fields_is_rejected() {
        let db = setup_test_db().await;
        let dest_id = seed_destination(&db).await;
        let pkg_id = PackageService::create_package(&db, dest_id, "Ancient Rome", 4000.0)
            .await
            .unwrap();

        let err = PackageService::update_package(&db, pkg_id, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Validation(_)));

        // Partial update touches only the provided field
        PackageService::update_package(&db, pkg_id, None, Some(4500.0))
            .await
            .unwrap()
            .unwrap();
        let package = travel_packages::Entity::find_by_id(pkg_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(package.pkg_name, "Ancient Rome");
        assert_eq!(package.price, 4500.0);
    }

    #[tokio::test]
    async fn test_contents_cascade_with_package() {
        let db = setup_test_db().await;
        let dest_id = seed_destination(&db).await;
        let pkg_id = PackageService::create_package(&db, dest_id, "Italy Cultural Package", 5500.0)
            .await
            .unwrap();
        let service_id = CatalogService::add_service(
            &db,
            "Marriott Rome",
            2800.0,
            &ServiceKind::Hotel { stars: 5 },
        )
        .await
        .unwrap();

        PackageService::add_content(&db, pkg_id, service_id)
            .await
            .unwrap();
        assert_eq!(PackageService::list_contents(&db).await.unwrap().len(), 1);

        PackageService::delete_package(&db, pkg_id).await.unwrap();
        assert!(PackageService::list_contents(&db).await.unwrap().is_empty());
    }
}
