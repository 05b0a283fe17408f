//! Authentication service implementation
//!
//! Issues and verifies the HS256 tokens that carry a user id into every
//! request. Login and registration happen elsewhere; this service only
//! trusts tokens signed with the shared secret.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::config::AuthConfig;
use crate::utils::errors::{LevelUpError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Authentication service for token handling
#[derive(Clone)]
pub struct AuthService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_ttl_seconds: u64,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_seconds: config.token_ttl_seconds,
        }
    }

    /// Mint a token identifying `user_id`
    pub fn issue_token(&self, user_id: i64) -> Result<String> {
        let now = Utc::now().timestamp().max(0) as usize;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now.saturating_add(usize::try_from(self.token_ttl_seconds).unwrap_or(usize::MAX)),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| LevelUpError::Authentication(format!("Failed to issue token: {}", e)))
    }

    /// Verify a token and return the user id it carries
    pub fn verify_token(&self, token: &str) -> Result<i64> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(|e| {
            warn!(error = %e, "Rejected authentication token");
            LevelUpError::Authentication("Invalid token.".to_string())
        })?;

        let user_id = data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| LevelUpError::Authentication("Invalid token subject.".to_string()))?;

        debug!(user_id = user_id, "Token verified");
        Ok(user_id)
    }
}

/// Pull the token out of an `Authorization` header value.
/// Accepts both `Token <key>` and `Bearer <key>` schemes.
pub fn parse_authorization(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if scheme.eq_ignore_ascii_case("token") || scheme.eq_ignore_ascii_case("bearer") {
        Some(token)
    } else {
        None
    }
}
