//! Vehicle model
//!
//! A customer's registered vehicle. Owned by exactly one account and only
//! ever referenced (never owned) by service requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: String,
    pub registration: String,
    pub vehicle_type: String,
    pub transmission: String,
    pub fuel_type: String,
    pub color: String,
    pub image_uri: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
