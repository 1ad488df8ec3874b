//! Notification model
//!
//! Broadcast messages fanned out to clients by audience tag. There is no
//! per-user read state.

use crate::models::account::AccountRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Target audience - maps to the ENUM notification_audience
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "notification_audience", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationAudience {
    All,
    Customers,
    Mechanics,
}

impl NotificationAudience {
    /// The role-specific audience tag a given account role subscribes to,
    /// in addition to `All`
    pub fn for_role(role: AccountRole) -> NotificationAudience {
        match role {
            AccountRole::Customer => NotificationAudience::Customers,
            AccountRole::Mechanic => NotificationAudience::Mechanics,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub audience: NotificationAudience,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_audience_mapping() {
        assert_eq!(
            NotificationAudience::for_role(AccountRole::Customer),
            NotificationAudience::Customers
        );
        assert_eq!(
            NotificationAudience::for_role(AccountRole::Mechanic),
            NotificationAudience::Mechanics
        );
    }
}
