use crate::models::service_request::{Location, RequestStatus, ServiceRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to open a new service request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequestRequest {
    pub vehicle_id: Option<Uuid>,

    #[validate(length(min = 1, max = 100))]
    pub service_type: String,

    #[validate(length(min = 1, max = 2000))]
    pub issue_desc: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub pickup_address: String,

    #[serde(default)]
    pub dropoff_address: String,

    pub image_uri: Option<String>,

    pub location: Option<Location>,
}

/// Quick request against a published mechanic service listing
#[derive(Debug, Deserialize, Validate)]
pub struct QuickCreateRequest {
    pub mechanic_service_id: Uuid,

    pub vehicle_id: Option<Uuid>,

    /// Optional issue description; falls back to the listing description
    pub issue_desc: Option<String>,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub pickup_address: String,

    #[serde(default)]
    pub dropoff_address: String,

    pub location: Option<Location>,
}

/// Pre-acceptance edit by the owning customer
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRequestRequest {
    pub service_type: Option<String>,
    pub issue_desc: Option<String>,
    pub notes: Option<String>,
    pub pickup_address: Option<String>,
    pub dropoff_address: Option<String>,
}

/// Query filter for a mechanic's job views
#[derive(Debug, Deserialize)]
pub struct MechanicJobsFilter {
    pub status: Option<RequestStatus>,
}

#[derive(Debug, Serialize)]
pub struct RequestResponse {
    pub id: String,
    pub owner_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub mechanic_id: Option<String>,
    pub requested_mechanic_id: Option<String>,
    pub vehicle_id: Option<String>,
    pub service_type: String,
    pub issue_desc: String,
    pub notes: String,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub image_uri: Option<String>,
    pub location: Option<Location>,
    pub price: Option<String>,
    pub status: RequestStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ServiceRequest> for RequestResponse {
    fn from(request: ServiceRequest) -> Self {
        Self {
            id: request.id.to_string(),
            owner_id: request.owner_id.to_string(),
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            mechanic_id: request.mechanic_id.map(|id| id.to_string()),
            requested_mechanic_id: request.requested_mechanic_id.map(|id| id.to_string()),
            vehicle_id: request.vehicle_id.map(|id| id.to_string()),
            service_type: request.service_type,
            issue_desc: request.issue_desc,
            notes: request.notes,
            pickup_address: request.pickup_address,
            dropoff_address: request.dropoff_address,
            image_uri: request.image_uri,
            location: request.location.map(|l| l.0),
            price: request.price.map(|p| p.to_string()),
            status: request.status,
            created_at: request.created_at.to_rfc3339(),
            updated_at: request.updated_at.to_rfc3339(),
        }
    }
}
