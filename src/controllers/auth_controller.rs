//! Account and admin authentication
//!
//! Registration fixes the role forever; login exchanges credentials for an
//! HS256 token carrying `{account_id, role}`. The admin endpoints form the
//! small auth microservice used by the web admin panel and live against
//! their own table.

use crate::dto::auth_dto::{
    AccountResponse, AdminAuthResponse, AuthResponse, LoginRequest, RegisterAccountRequest,
    RegisterAdminRequest,
};
use crate::middleware::auth::{AuthenticatedAccount, ADMIN_ROLE};
use crate::models::account::AccountRole;
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::admin_repository::AdminRepository;
use crate::services::auth_service::AuthService;
use crate::utils::errors::{conflict_error, AppError, AppResult};
use sqlx::PgPool;
use validator::Validate;

pub struct AuthController {
    accounts: AccountRepository,
    admins: AdminRepository,
    auth: AuthService,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_secret: &str, jwt_expiration_hours: i64) -> Self {
        Self {
            accounts: AccountRepository::new(pool.clone()),
            admins: AdminRepository::new(pool),
            auth: AuthService::new(jwt_secret, jwt_expiration_hours),
        }
    }

    pub async fn register(&self, request: RegisterAccountRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        if self.accounts.email_exists(&request.email).await? {
            return Err(conflict_error("Account", "email", &request.email));
        }

        let password_hash = self.auth.hash_password(&request.password)?;
        let (workshop_name, experience_years) = match request.role {
            AccountRole::Customer => (None, None),
            AccountRole::Mechanic => (
                Some(request.workshop_name.unwrap_or_default()),
                Some(request.experience_years.unwrap_or(0)),
            ),
        };

        let account = self
            .accounts
            .create(
                request.name,
                request.email,
                request.contact,
                password_hash,
                request.role,
                workshop_name,
                experience_years,
            )
            .await?;

        let token = self.auth.generate_token(account.id, account.role().as_str())?;
        tracing::info!("✅ {} account registered: {}", account.role().as_str(), account.id);

        Ok(AuthResponse {
            token,
            account: AccountResponse::from(account),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        let account = self
            .accounts
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !self.auth.verify_password(&request.password, &account.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = self.auth.generate_token(account.id, account.role().as_str())?;

        Ok(AuthResponse {
            token,
            account: AccountResponse::from(account),
        })
    }

    pub async fn me(&self, actor: AuthenticatedAccount) -> AppResult<AccountResponse> {
        let account = self
            .accounts
            .find_by_id(actor.account_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;

        Ok(AccountResponse::from(account))
    }

    pub async fn register_admin(
        &self,
        request: RegisterAdminRequest,
    ) -> AppResult<AdminAuthResponse> {
        request.validate()?;

        if self.admins.email_exists(&request.email).await? {
            return Err(conflict_error("Admin", "email", &request.email));
        }

        let password_hash = self.auth.hash_password(&request.password)?;
        let admin = self
            .admins
            .create(request.name, request.email, password_hash)
            .await?;

        let token = self.auth.generate_token(admin.id, ADMIN_ROLE)?;
        tracing::info!("✅ Admin registered: {}", admin.id);

        Ok(AdminAuthResponse {
            id: admin.id.to_string(),
            name: admin.name,
            email: admin.email,
            token,
        })
    }

    pub async fn login_admin(&self, request: LoginRequest) -> AppResult<AdminAuthResponse> {
        request.validate()?;

        let admin = self
            .admins
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !self.auth.verify_password(&request.password, &admin.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = self.auth.generate_token(admin.id, ADMIN_ROLE)?;

        Ok(AdminAuthResponse {
            id: admin.id.to_string(),
            name: admin.name,
            email: admin.email,
            token,
        })
    }
}
