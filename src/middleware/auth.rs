//! JWT authentication middleware
//!
//! Resolves the caller to `{account_id, role}` and injects it as a request
//! extension. Lifecycle controllers receive identity explicitly through that
//! value, never through ambient state. Admin-panel tokens go through a
//! separate middleware and never satisfy account routes.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::account::AccountRole;
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::admin_repository::AdminRepository;
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub const ADMIN_ROLE: &str = "admin";

/// Authenticated marketplace account, injected into requests
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedAccount {
    pub account_id: Uuid,
    pub role: AccountRole,
}

/// Authenticated admin-panel user, injected into admin requests
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
}

fn bearer_token(request: &Request) -> Result<&str, AppError> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth| auth.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))
}

/// Middleware for customer/mechanic routes
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)?;

    let auth_service = AuthService::new(&state.config.jwt_secret, state.config.jwt_expiration_hours);
    let claims = auth_service.validate_token(token)?;

    let role = AccountRole::from_str(&claims.role)
        .map_err(|_| AppError::Unauthorized("Token does not carry an account role".to_string()))?;

    let account_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

    // The account must still exist; tokens outlive hard-deleted accounts
    let repository = AccountRepository::new(state.pool.clone());
    repository
        .find_by_id(account_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Account no longer exists".to_string()))?;

    request
        .extensions_mut()
        .insert(AuthenticatedAccount { account_id, role });

    Ok(next.run(request).await)
}

/// Middleware for admin-panel routes
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)?;

    let auth_service = AuthService::new(&state.config.jwt_secret, state.config.jwt_expiration_hours);
    let claims = auth_service.validate_token(token)?;

    if claims.role != ADMIN_ROLE {
        return Err(AppError::Authorization(
            "Admin privileges required".to_string(),
        ));
    }

    let admin_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

    let repository = AdminRepository::new(state.pool.clone());
    let admin = repository
        .find_by_id(admin_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Admin no longer exists".to_string()))?;

    request
        .extensions_mut()
        .insert(AuthenticatedAdmin { admin_id: admin.id });

    Ok(next.run(request).await)
}
