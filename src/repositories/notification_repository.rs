use crate::models::notification::{Notification, NotificationAudience};
use crate::utils::errors::AppResult;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        title: String,
        message: String,
        audience: NotificationAudience,
    ) -> AppResult<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (id, title, message, audience, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(message)
        .bind(audience)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    /// Broadcasts visible to one role: 'all' plus the role-specific tag,
    /// newest first
    pub async fn list_for_audience(
        &self,
        role_audience: NotificationAudience,
    ) -> AppResult<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE audience = 'all' OR audience = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(role_audience)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }
}
