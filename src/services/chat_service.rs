//! Chat channel bootstrap
//!
//! Accepting a request opens a communication channel between the customer
//! and the accepting mechanic. Creation is idempotent: the unique
//! (customer_id, mechanic_id) pair guarantees at most one chat per pair no
//! matter how many times this runs.

use crate::utils::errors::AppResult;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ChatService {
    pool: PgPool,
}

impl ChatService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the chat between a customer and a mechanic if it does not
    /// already exist, returning its id either way.
    pub async fn ensure_chat(
        &self,
        customer_id: Uuid,
        mechanic_id: Uuid,
        customer_name: &str,
        mechanic_name: &str,
    ) -> AppResult<Uuid> {
        let inserted: Option<(Uuid,)> = sqlx::query_as(
            r#"
            INSERT INTO chats (id, customer_id, mechanic_id, chat_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (customer_id, mechanic_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(customer_id)
        .bind(mechanic_id)
        .bind(format!("{} & {}", customer_name, mechanic_name))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        if let Some((id,)) = inserted {
            tracing::info!("💬 Chat created between {} and {}", customer_id, mechanic_id);
            return Ok(id);
        }

        // Conflict path: the chat already exists
        let (id,): (Uuid,) = sqlx::query_as(
            "SELECT id FROM chats WHERE customer_id = $1 AND mechanic_id = $2",
        )
        .bind(customer_id)
        .bind(mechanic_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
