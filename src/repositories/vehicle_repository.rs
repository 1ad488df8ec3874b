use crate::models::vehicle::Vehicle;
use crate::utils::errors::{AppError, AppResult};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        owner_id: Uuid,
        brand: String,
        model: String,
        year: String,
        registration: String,
        vehicle_type: String,
        transmission: String,
        fuel_type: String,
        color: String,
        image_uri: Option<String>,
    ) -> AppResult<Vehicle> {
        let now = Utc::now();
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, owner_id, brand, model, year, registration, vehicle_type, transmission, fuel_type, color, image_uri, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(brand)
        .bind(model)
        .bind(year)
        .bind(registration)
        .bind(vehicle_type)
        .bind(transmission)
        .bind(fuel_type)
        .bind(color)
        .bind(image_uri)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        brand: Option<String>,
        model: Option<String>,
        year: Option<String>,
        registration: Option<String>,
        vehicle_type: Option<String>,
        transmission: Option<String>,
        fuel_type: Option<String>,
        color: Option<String>,
        image_uri: Option<String>,
    ) -> AppResult<Vehicle> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if current.owner_id != owner_id {
            return Err(AppError::Authorization(
                "Vehicle does not belong to this account".to_string(),
            ));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET brand = $2, model = $3, year = $4, registration = $5, vehicle_type = $6,
                transmission = $7, fuel_type = $8, color = $9, image_uri = $10, updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(brand.unwrap_or(current.brand))
        .bind(model.unwrap_or(current.model))
        .bind(year.unwrap_or(current.year))
        .bind(registration.unwrap_or(current.registration))
        .bind(vehicle_type.unwrap_or(current.vehicle_type))
        .bind(transmission.unwrap_or(current.transmission))
        .bind(fuel_type.unwrap_or(current.fuel_type))
        .bind(color.unwrap_or(current.color))
        .bind(image_uri.or(current.image_uri))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<()> {
        let vehicle = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if vehicle.owner_id != owner_id {
            return Err(AppError::Authorization(
                "Vehicle does not belong to this account".to_string(),
            ));
        }

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
