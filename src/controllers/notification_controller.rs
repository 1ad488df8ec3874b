//! Notification broadcasts
//!
//! Admins publish; customers and mechanics read the union of `all` and
//! their role-specific audience. Fire-and-forget fan-out, no read state.

use crate::dto::notification_dto::{CreateNotificationRequest, NotificationResponse};
use crate::middleware::auth::AuthenticatedAccount;
use crate::models::notification::NotificationAudience;
use crate::repositories::notification_repository::NotificationRepository;
use crate::utils::errors::AppResult;
use sqlx::PgPool;
use validator::Validate;

pub struct NotificationController {
    repository: NotificationRepository,
}

impl NotificationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: NotificationRepository::new(pool),
        }
    }

    /// Admin broadcast (route is behind the admin middleware)
    pub async fn broadcast(
        &self,
        request: CreateNotificationRequest,
    ) -> AppResult<NotificationResponse> {
        request.validate()?;

        let notification = self
            .repository
            .create(request.title, request.message, request.audience)
            .await?;

        tracing::info!(
            "📢 Notification {} broadcast to {:?}",
            notification.id,
            notification.audience
        );
        Ok(NotificationResponse::from(notification))
    }

    /// Broadcasts visible to the acting account's role, newest first
    pub async fn list_for_me(
        &self,
        actor: AuthenticatedAccount,
    ) -> AppResult<Vec<NotificationResponse>> {
        let audience = NotificationAudience::for_role(actor.role);
        let notifications = self.repository.list_for_audience(audience).await?;
        Ok(notifications.into_iter().map(NotificationResponse::from).collect())
    }

    pub async fn list_all(&self) -> AppResult<Vec<NotificationResponse>> {
        let notifications = self.repository.list_all().await?;
        Ok(notifications.into_iter().map(NotificationResponse::from).collect())
    }
}
