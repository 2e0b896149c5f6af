use database::services::package::{ContentRow, PackageRow};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct PackageResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub destination: String,
}

impl From<PackageRow> for PackageResponse {
    fn from(row: PackageRow) -> Self {
        Self {
            id: row.id,
            name: row.pkg_name,
            price: row.price,
            destination: row.destination,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePackageRequest {
    pub dest_id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePackageRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PackageContentResponse {
    pub id: i32,
    pub package: String,
    pub service: String,
}

impl From<ContentRow> for PackageContentResponse {
    fn from(row: ContentRow) -> Self {
        Self {
            id: row.id,
            package: row.package,
            service: row.service,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddContentRequest {
    pub pkg_id: i32,
    pub service_id: i32,
}
