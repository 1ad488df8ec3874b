//! Password hashing and JWT issuing
//!
//! HS256 tokens carry the account id and role; expiry defaults to 7 days,
//! matching the admin panel's original token lifetime.

use crate::utils::errors::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration: Duration,
}

impl AuthService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            expiration: Duration::hours(expiration_hours),
        }
    }

    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))
    }

    /// Issue an access token for an account
    pub fn generate_token(&self, account_id: Uuid, role: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            role: role.to_string(),
            exp: (now + self.expiration).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip_preserves_claims() {
        let service = AuthService::new("test-secret", 1);
        let account_id = Uuid::new_v4();

        let token = service.generate_token(account_id, "mechanic").unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, account_id.to_string());
        assert_eq!(claims.role, "mechanic");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let issuer = AuthService::new("secret-a", 1);
        let verifier = AuthService::new("secret-b", 1);

        let token = issuer.generate_token(Uuid::new_v4(), "customer").unwrap();
        assert!(matches!(verifier.validate_token(&token), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_password_hash_and_verify() {
        let service = AuthService::new("test-secret", 1);
        let hash = service.hash_password("hunter2").unwrap();

        assert!(service.verify_password("hunter2", &hash).unwrap());
        assert!(!service.verify_password("hunter3", &hash).unwrap());
    }
}
