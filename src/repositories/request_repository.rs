//! ServiceRequest persistence
//!
//! Lifecycle transitions are written with conditional updates: every UPDATE
//! carries the expected current state in its WHERE clause, so a concurrent
//! transition that got there first makes the statement match zero rows
//! instead of overwriting. That is the whole accept-race story - mechanics
//! are disconnected clients, so the guard is a compare-and-swap on status,
//! not a lock.

use crate::models::service_request::{Location, RequestStatus, ServiceRequest};
use crate::utils::errors::AppResult;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Fields for a new request; status, mechanic_id and timestamps are set here
#[derive(Debug, Clone)]
pub struct NewServiceRequest {
    pub owner_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub requested_mechanic_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub service_type: String,
    pub issue_desc: String,
    pub notes: String,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub image_uri: Option<String>,
    pub location: Option<Location>,
    pub price: Option<Decimal>,
}

pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewServiceRequest) -> AppResult<ServiceRequest> {
        let now = Utc::now();
        let request = sqlx::query_as::<_, ServiceRequest>(
            r#"
            INSERT INTO service_requests
                (id, owner_id, customer_name, customer_email, mechanic_id, requested_mechanic_id,
                 vehicle_id, service_type, issue_desc, notes, pickup_address, dropoff_address,
                 image_uri, location, price, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NULL, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, 'pending', $15, $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.owner_id)
        .bind(new.customer_name)
        .bind(new.customer_email)
        .bind(new.requested_mechanic_id)
        .bind(new.vehicle_id)
        .bind(new.service_type)
        .bind(new.issue_desc)
        .bind(new.notes)
        .bind(new.pickup_address)
        .bind(new.dropoff_address)
        .bind(new.image_uri)
        .bind(new.location.map(Json))
        .bind(new.price)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ServiceRequest>> {
        let request =
            sqlx::query_as::<_, ServiceRequest>("SELECT * FROM service_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(request)
    }

    /// Snapshot of the whole entity set, fed to the directory projections
    pub async fn find_all(&self) -> AppResult<Vec<ServiceRequest>> {
        let requests = sqlx::query_as::<_, ServiceRequest>(
            "SELECT * FROM service_requests ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    /// pending -> accepted, recording the winning mechanic. Returns None when
    /// the request is no longer pending (first acceptance wins).
    pub async fn accept_if_pending(
        &self,
        id: Uuid,
        mechanic_id: Uuid,
    ) -> AppResult<Option<ServiceRequest>> {
        let request = sqlx::query_as::<_, ServiceRequest>(
            r#"
            UPDATE service_requests
            SET status = 'accepted', mechanic_id = $2, updated_at = $3
            WHERE id = $1 AND status = 'pending' AND mechanic_id IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(mechanic_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    /// pending -> rejected. No ownership is recorded for a reject.
    pub async fn reject_if_pending(&self, id: Uuid) -> AppResult<Option<ServiceRequest>> {
        let request = sqlx::query_as::<_, ServiceRequest>(
            r#"
            UPDATE service_requests
            SET status = 'rejected', updated_at = $2
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    /// accepted -> completed, only for the assigned mechanic
    pub async fn complete_if_assigned(
        &self,
        id: Uuid,
        mechanic_id: Uuid,
    ) -> AppResult<Option<ServiceRequest>> {
        let request = sqlx::query_as::<_, ServiceRequest>(
            r#"
            UPDATE service_requests
            SET status = 'completed', updated_at = $3
            WHERE id = $1 AND status = 'accepted' AND mechanic_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(mechanic_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    /// Pre-acceptance edit by the owner; conditional on the request still
    /// being pending so a racing accept never loses fields.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_if_pending(
        &self,
        id: Uuid,
        owner_id: Uuid,
        service_type: Option<String>,
        issue_desc: Option<String>,
        notes: Option<String>,
        pickup_address: Option<String>,
        dropoff_address: Option<String>,
    ) -> AppResult<Option<ServiceRequest>> {
        let request = sqlx::query_as::<_, ServiceRequest>(
            r#"
            UPDATE service_requests
            SET service_type = COALESCE($3, service_type),
                issue_desc = COALESCE($4, issue_desc),
                notes = COALESCE($5, notes),
                pickup_address = COALESCE($6, pickup_address),
                dropoff_address = COALESCE($7, dropoff_address),
                updated_at = $8
            WHERE id = $1 AND owner_id = $2 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(service_type)
        .bind(issue_desc)
        .bind(notes)
        .bind(pickup_address)
        .bind(dropoff_address)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    /// Cancel is a hard delete, allowed only while pending
    pub async fn delete_if_pending(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM service_requests WHERE id = $1 AND owner_id = $2 AND status = 'pending'",
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Current status only, for distinguishing not-found from bad-state
    pub async fn status_of(&self, id: Uuid) -> AppResult<Option<RequestStatus>> {
        let row: Option<(RequestStatus,)> =
            sqlx::query_as("SELECT status FROM service_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(status,)| status))
    }
}
