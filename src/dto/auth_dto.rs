use crate::models::account::{Account, AccountRole, RoleProfile};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a customer or mechanic account
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAccountRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    #[validate(length(max = 30))]
    #[serde(default)]
    pub contact: String,

    pub role: AccountRole,

    // Mechanic-only fields, ignored for customers
    pub workshop_name: Option<String>,
    pub experience_years: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Account response (never carries the password hash)
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
    pub created_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name,
            email: account.email,
            contact: account.contact,
            profile: account.profile,
            created_at: account.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub account: AccountResponse,
}

/// Admin panel registration
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAdminRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminAuthResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}
