use database::services::catalog::ServiceRecord;
use models::service_kind::ServiceKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A service with its extension columns flattened out, the way the catalog
/// list view shows them: at most one of `airline`/`stars` is set.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceResponse {
    pub id: i32,
    pub name: String,
    pub base_price: f64,
    pub service_type: Option<String>,
    pub airline: Option<String>,
    pub stars: Option<i32>,
}

impl From<ServiceRecord> for ServiceResponse {
    fn from(record: ServiceRecord) -> Self {
        let service_type = record.kind.as_ref().map(|kind| kind.label().to_string());
        let (airline, stars) = match record.kind {
            Some(ServiceKind::Flight { airline }) => (Some(airline), None),
            Some(ServiceKind::Hotel { stars }) => (None, Some(stars)),
            None => (None, None),
        };

        Self {
            id: record.id,
            name: record.name,
            base_price: record.base_price,
            service_type,
            airline,
            stars,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServiceKindRequest {
    Flight { airline: String },
    Hotel { stars: i32 },
}

impl From<ServiceKindRequest> for ServiceKind {
    fn from(kind: ServiceKindRequest) -> Self {
        match kind {
            ServiceKindRequest::Flight { airline } => ServiceKind::Flight { airline },
            ServiceKindRequest::Hotel { stars } => ServiceKind::Hotel { stars },
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateServiceRequest {
    pub name: String,
    pub base_price: f64,
    pub kind: ServiceKindRequest,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub base_price: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
}
