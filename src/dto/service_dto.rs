use crate::models::mechanic_service::MechanicService;
use crate::models::service_request::Location;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to publish a service offering
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 100))]
    pub service_name: String,

    #[serde(default)]
    pub description: String,

    pub price: Decimal,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub category: String,

    pub location: Option<Location>,
}

/// Request to edit a service offering
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    pub service_name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub duration: Option<String>,
    pub category: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: String,
    pub mechanic_id: String,
    pub service_name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub category: String,
    pub location: Option<Location>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<MechanicService> for ServiceResponse {
    fn from(service: MechanicService) -> Self {
        Self {
            id: service.id.to_string(),
            mechanic_id: service.mechanic_id.to_string(),
            service_name: service.service_name,
            description: service.description,
            price: service.price.to_string(),
            duration: service.duration,
            category: service.category,
            location: service.location.map(|l| l.0),
            created_at: service.created_at.to_rfc3339(),
            updated_at: service.updated_at.to_rfc3339(),
        }
    }
}
