//! Account model
//!
//! Customer and mechanic profiles share one table, discriminated by the
//! `account_role` enum. In the domain model the role-specific fields live in
//! a tagged `RoleProfile` variant instead of loose nullable columns, so a
//! customer can never carry workshop data by construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Account role - maps to the ENUM account_role. Fixed at registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Customer,
    Mechanic,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Customer => "customer",
            AccountRole::Mechanic => "mechanic",
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(AccountRole::Customer),
            "mechanic" => Ok(AccountRole::Mechanic),
            other => Err(format!("unknown account role '{}'", other)),
        }
    }
}

/// Role-specific profile data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Customer,
    Mechanic {
        workshop_name: String,
        experience_years: i32,
    },
}

/// Raw row as stored in the accounts table
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub password_hash: String,
    pub role: AccountRole,
    pub workshop_name: Option<String>,
    pub experience_years: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Domain account with the role folded into a tagged profile
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub password_hash: String,
    pub profile: RoleProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn role(&self) -> AccountRole {
        match self.profile {
            RoleProfile::Customer => AccountRole::Customer,
            RoleProfile::Mechanic { .. } => AccountRole::Mechanic,
        }
    }

    pub fn is_mechanic(&self) -> bool {
        self.role() == AccountRole::Mechanic
    }
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        let profile = match row.role {
            AccountRole::Customer => RoleProfile::Customer,
            AccountRole::Mechanic => RoleProfile::Mechanic {
                workshop_name: row.workshop_name.unwrap_or_default(),
                experience_years: row.experience_years.unwrap_or(0),
            },
        };

        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            contact: row.contact,
            password_hash: row.password_hash,
            profile,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(role: AccountRole) -> AccountRow {
        AccountRow {
            id: Uuid::new_v4(),
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            contact: "0300-0000000".to_string(),
            password_hash: "hash".to_string(),
            role,
            workshop_name: Some("Ali Autos".to_string()),
            experience_years: Some(7),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_customer_row_drops_workshop_columns() {
        let account = Account::from(row(AccountRole::Customer));
        assert_eq!(account.profile, RoleProfile::Customer);
        assert_eq!(account.role(), AccountRole::Customer);
    }

    #[test]
    fn test_mechanic_row_keeps_workshop_profile() {
        let account = Account::from(row(AccountRole::Mechanic));
        assert!(account.is_mechanic());
        assert_eq!(
            account.profile,
            RoleProfile::Mechanic {
                workshop_name: "Ali Autos".to_string(),
                experience_years: 7,
            }
        );
    }
}
