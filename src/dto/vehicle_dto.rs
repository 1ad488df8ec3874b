use crate::models::vehicle::Vehicle;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new vehicle
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 4, max = 4))]
    pub year: String,

    #[validate(length(min = 1, max = 20))]
    pub registration: String,

    #[validate(length(min = 1, max = 30))]
    pub vehicle_type: String,

    #[validate(length(min = 1, max = 30))]
    pub transmission: String,

    #[validate(length(min = 1, max = 30))]
    pub fuel_type: String,

    #[serde(default)]
    pub color: String,

    pub image_uri: Option<String>,
}

/// Request to update an existing vehicle
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub registration: Option<String>,
    pub vehicle_type: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub color: Option<String>,
    pub image_uri: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: String,
    pub owner_id: String,
    pub brand: String,
    pub model: String,
    pub year: String,
    pub registration: String,
    pub vehicle_type: String,
    pub transmission: String,
    pub fuel_type: String,
    pub color: String,
    pub image_uri: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            owner_id: vehicle.owner_id.to_string(),
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            registration: vehicle.registration,
            vehicle_type: vehicle.vehicle_type,
            transmission: vehicle.transmission,
            fuel_type: vehicle.fuel_type,
            color: vehicle.color,
            image_uri: vehicle.image_uri,
            created_at: vehicle.created_at.to_rfc3339(),
            updated_at: vehicle.updated_at.to_rfc3339(),
        }
    }
}
