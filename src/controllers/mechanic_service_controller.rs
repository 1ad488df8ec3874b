//! Mechanic service listings
//!
//! Create/update/delete are mechanic-only; listings are browsable by any
//! authenticated account (customers pick one for a quick request).

use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::middleware::auth::AuthenticatedAccount;
use crate::models::account::AccountRole;
use crate::repositories::mechanic_service_repository::MechanicServiceRepository;
use crate::utils::errors::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct MechanicServiceController {
    repository: MechanicServiceRepository,
}

impl MechanicServiceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MechanicServiceRepository::new(pool),
        }
    }

    fn require_mechanic(actor: &AuthenticatedAccount, action: &str) -> AppResult<()> {
        if actor.role != AccountRole::Mechanic {
            return Err(AppError::Authorization(format!(
                "Only a mechanic may {}",
                action
            )));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        actor: AuthenticatedAccount,
        request: CreateServiceRequest,
    ) -> AppResult<ServiceResponse> {
        Self::require_mechanic(&actor, "publish a service")?;
        request.validate()?;

        if request.price < Decimal::ZERO {
            return Err(AppError::Validation("price cannot be negative".to_string()));
        }

        let service = self
            .repository
            .create(
                actor.account_id,
                request.service_name,
                request.description,
                request.price,
                request.duration,
                request.category,
                request.location,
            )
            .await?;

        tracing::info!("✅ Service {} published by {}", service.id, actor.account_id);
        Ok(ServiceResponse::from(service))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ServiceResponse> {
        let service = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        Ok(ServiceResponse::from(service))
    }

    /// All published listings, for customer browsing
    pub async fn list_all(&self) -> AppResult<Vec<ServiceResponse>> {
        let services = self.repository.find_all().await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    /// The acting mechanic's own listings
    pub async fn list_mine(&self, actor: AuthenticatedAccount) -> AppResult<Vec<ServiceResponse>> {
        Self::require_mechanic(&actor, "list own services")?;

        let services = self.repository.find_by_mechanic(actor.account_id).await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    pub async fn update(
        &self,
        actor: AuthenticatedAccount,
        id: Uuid,
        request: UpdateServiceRequest,
    ) -> AppResult<ServiceResponse> {
        Self::require_mechanic(&actor, "edit a service")?;
        request.validate()?;

        if matches!(request.price, Some(p) if p < Decimal::ZERO) {
            return Err(AppError::Validation("price cannot be negative".to_string()));
        }

        let service = self
            .repository
            .update(
                id,
                actor.account_id,
                request.service_name,
                request.description,
                request.price,
                request.duration,
                request.category,
                request.location,
            )
            .await?;

        Ok(ServiceResponse::from(service))
    }

    pub async fn delete(&self, actor: AuthenticatedAccount, id: Uuid) -> AppResult<()> {
        Self::require_mechanic(&actor, "delete a service")?;
        self.repository.delete(id, actor.account_id).await?;
        tracing::info!("🗑️ Service {} deleted", id);
        Ok(())
    }
}
