use crate::models::mechanic_service::MechanicService;
use crate::models::service_request::Location;
use crate::utils::errors::{AppError, AppResult};
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MechanicServiceRepository {
    pool: PgPool,
}

impl MechanicServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        mechanic_id: Uuid,
        service_name: String,
        description: String,
        price: Decimal,
        duration: String,
        category: String,
        location: Option<Location>,
    ) -> AppResult<MechanicService> {
        let now = Utc::now();
        let service = sqlx::query_as::<_, MechanicService>(
            r#"
            INSERT INTO mechanic_services (id, mechanic_id, service_name, description, price, duration, category, location, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(mechanic_id)
        .bind(service_name)
        .bind(description)
        .bind(price)
        .bind(duration)
        .bind(category)
        .bind(location.map(Json))
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MechanicService>> {
        let service =
            sqlx::query_as::<_, MechanicService>("SELECT * FROM mechanic_services WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(service)
    }

    pub async fn find_by_mechanic(&self, mechanic_id: Uuid) -> AppResult<Vec<MechanicService>> {
        let services = sqlx::query_as::<_, MechanicService>(
            "SELECT * FROM mechanic_services WHERE mechanic_id = $1 ORDER BY created_at DESC",
        )
        .bind(mechanic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    pub async fn find_all(&self) -> AppResult<Vec<MechanicService>> {
        let services = sqlx::query_as::<_, MechanicService>(
            "SELECT * FROM mechanic_services ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        mechanic_id: Uuid,
        service_name: Option<String>,
        description: Option<String>,
        price: Option<Decimal>,
        duration: Option<String>,
        category: Option<String>,
        location: Option<Location>,
    ) -> AppResult<MechanicService> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        if current.mechanic_id != mechanic_id {
            return Err(AppError::Authorization(
                "Service does not belong to this mechanic".to_string(),
            ));
        }

        let service = sqlx::query_as::<_, MechanicService>(
            r#"
            UPDATE mechanic_services
            SET service_name = $2, description = $3, price = $4, duration = $5,
                category = $6, location = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(service_name.unwrap_or(current.service_name))
        .bind(description.unwrap_or(current.description))
        .bind(price.unwrap_or(current.price))
        .bind(duration.unwrap_or(current.duration))
        .bind(category.unwrap_or(current.category))
        .bind(location.map(Json).or(current.location))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn delete(&self, id: Uuid, mechanic_id: Uuid) -> AppResult<()> {
        let service = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        if service.mechanic_id != mechanic_id {
            return Err(AppError::Authorization(
                "Service does not belong to this mechanic".to_string(),
            ));
        }

        sqlx::query("DELETE FROM mechanic_services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
