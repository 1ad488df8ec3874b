//! Vehicle CRUD, scoped to the owning customer

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::middleware::auth::AuthenticatedAccount;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        actor: AuthenticatedAccount,
        request: CreateVehicleRequest,
    ) -> AppResult<VehicleResponse> {
        request.validate()?;

        let vehicle = self
            .repository
            .create(
                actor.account_id,
                request.brand.trim().to_string(),
                request.model.trim().to_string(),
                request.year.trim().to_string(),
                request.registration.trim().to_string(),
                request.vehicle_type.trim().to_string(),
                request.transmission.trim().to_string(),
                request.fuel_type.trim().to_string(),
                request.color.trim().to_string(),
                request.image_uri,
            )
            .await?;

        tracing::info!("✅ Vehicle {} added for {}", vehicle.id, actor.account_id);
        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn get_by_id(
        &self,
        actor: AuthenticatedAccount,
        id: Uuid,
    ) -> AppResult<VehicleResponse> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if vehicle.owner_id != actor.account_id {
            return Err(AppError::Authorization(
                "Vehicle does not belong to this account".to_string(),
            ));
        }

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list_mine(&self, actor: AuthenticatedAccount) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.find_by_owner(actor.account_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        actor: AuthenticatedAccount,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<VehicleResponse> {
        request.validate()?;

        let vehicle = self
            .repository
            .update(
                id,
                actor.account_id,
                request.brand,
                request.model,
                request.year,
                request.registration,
                request.vehicle_type,
                request.transmission,
                request.fuel_type,
                request.color,
                request.image_uri,
            )
            .await?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn delete(&self, actor: AuthenticatedAccount, id: Uuid) -> AppResult<()> {
        self.repository.delete(id, actor.account_id).await?;
        tracing::info!("🗑️ Vehicle {} deleted", id);
        Ok(())
    }
}
