use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "travel_packages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub dest_id: i32,
    pub pkg_name: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::destinations::Entity",
        from = "Column::DestId",
        to = "super::destinations::Column::Id"
    )]
    Destination,
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::package_contents::Entity")]
    PackageContents,
}

impl Related<super::destinations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::package_contents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PackageContents.def()
    }
}

// Many-to-many relationship with services
impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        super::package_contents::Relation::Service.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::package_contents::Relation::TravelPackage.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
