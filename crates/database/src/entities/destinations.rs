use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "destinations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub city: String,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::travel_packages::Entity")]
    TravelPackages,
}

impl Related<super::travel_packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelPackages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
