use crate::models::notification::{Notification, NotificationAudience};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Admin broadcast request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,

    pub audience: NotificationAudience,
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub title: String,
    pub message: String,
    pub audience: NotificationAudience,
    pub created_at: String,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            title: notification.title,
            message: notification.message,
            audience: notification.audience,
            created_at: notification.created_at.to_rfc3339(),
        }
    }
}
