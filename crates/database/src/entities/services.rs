use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_name: String,
    pub base_price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::flights::Entity")]
    Flight,
    #[sea_orm(has_one = "super::hotels::Entity")]
    Hotel,
    #[sea_orm(has_many = "super::package_contents::Entity")]
    PackageContents,
    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
}

impl Related<super::flights::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl Related<super::hotels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<super::package_contents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PackageContents.def()
    }
}

// Many-to-many relationship with travel packages
impl Related<super::travel_packages::Entity> for Entity {
    fn to() -> RelationDef {
        super::package_contents::Relation::TravelPackage.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::package_contents::Relation::Service.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
