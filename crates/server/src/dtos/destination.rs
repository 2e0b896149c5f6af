use database::entities::destinations;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DestinationResponse {
    pub id: i32,
    pub city: String,
    pub country: String,
}

impl From<destinations::Model> for DestinationResponse {
    fn from(model: destinations::Model) -> Self {
        Self {
            id: model.id,
            city: model.city,
            country: model.country,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDestinationRequest {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDestinationRequest {
    pub city: Option<String>,
    pub country: Option<String>,
}
