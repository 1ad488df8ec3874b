//! ServiceRequest model and lifecycle states
//!
//! The request status graph is the heart of the marketplace:
//!
//! ```text
//! pending ──> accepted ──> completed
//!    └──────> rejected
//! ```
//!
//! Both `completed` and `rejected` are terminal, and nothing ever re-enters
//! `pending`. `can_transition` encodes the graph; the repositories enforce it
//! with conditional writes so that a lost race never overwrites a transition
//! that already happened.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Request status - maps to the ENUM request_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Completed,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::Pending,
        RequestStatus::Accepted,
        RequestStatus::Completed,
        RequestStatus::Rejected,
    ];

    /// Terminal states admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Completed | RequestStatus::Rejected)
    }

    /// Whether the status graph permits moving from `self` to `next`
    pub fn can_transition(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, RequestStatus::Accepted)
                | (RequestStatus::Pending, RequestStatus::Rejected)
                | (RequestStatus::Accepted, RequestStatus::Completed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Completed => "completed",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "accepted" => Ok(RequestStatus::Accepted),
            "completed" => Ok(RequestStatus::Completed),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(format!("unknown request status '{}'", other)),
        }
    }
}

/// Geolocation attached to a request or a service listing, stored as JSONB
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// ServiceRequest - maps to the service_requests table
///
/// `mechanic_id` is NULL while the request is pending and is written exactly
/// once, by the accepting mechanic. `requested_mechanic_id` only carries the
/// target of a quick request and never grants ownership.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceRequest {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub mechanic_id: Option<Uuid>,
    pub requested_mechanic_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub service_type: String,
    pub issue_desc: String,
    pub notes: String,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub image_uri: Option<String>,
    pub location: Option<Json<Location>>,
    pub price: Option<Decimal>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_legal_transitions() {
        assert!(RequestStatus::Pending.can_transition(RequestStatus::Accepted));
        assert!(RequestStatus::Pending.can_transition(RequestStatus::Rejected));
        assert!(RequestStatus::Accepted.can_transition(RequestStatus::Completed));
    }

    #[test]
    fn test_nothing_reenters_pending() {
        for status in RequestStatus::ALL {
            assert!(!status.can_transition(RequestStatus::Pending));
        }
    }

    #[test]
    fn test_terminal_states_admit_no_transitions() {
        for terminal in [RequestStatus::Completed, RequestStatus::Rejected] {
            assert!(terminal.is_terminal());
            for next in RequestStatus::ALL {
                assert!(!terminal.can_transition(next));
            }
        }
    }

    #[test]
    fn test_pending_cannot_jump_to_completed() {
        assert!(!RequestStatus::Pending.can_transition(RequestStatus::Completed));
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in RequestStatus::ALL {
            assert_eq!(RequestStatus::from_str(status.as_str()), Ok(status));
        }
        assert!(RequestStatus::from_str("in_progress").is_err());
    }
}
