//! MechanicService model
//!
//! A service offering published by a mechanic. Quick requests reference a
//! listing to pre-fill service type and price.

use crate::models::service_request::Location;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MechanicService {
    pub id: Uuid,
    pub mechanic_id: Uuid,
    pub service_name: String,
    pub description: String,
    pub price: Decimal,
    pub duration: String,
    pub category: String,
    pub location: Option<Json<Location>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
