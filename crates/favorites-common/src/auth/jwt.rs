//! JWT verification for tokens issued by the identity provider
//!
//! Tokens are HS256 with the user's UUID in `sub`. Only access tokens are
//! accepted; issuing is here so tooling and tests can mint them.

use chrono::{Duration, Utc};
use favorites_core::UserId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type (access or refresh)
    pub token_type: TokenType,
    /// Display name at the time the token was issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Claims {
    /// Get the user ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a UUID
    pub fn user_id(&self) -> Result<UserId, AppError> {
        UserId::parse(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Check if this is an access token
    #[must_use]
    pub fn is_access_token(&self) -> bool {
        self.token_type == TokenType::Access
    }
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and access token lifetime (seconds)
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Issue an access token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access_token(
        &self,
        user_id: UserId,
        name: Option<String>,
    ) -> Result<String, AppError> {
        self.encode_token(user_id, TokenType::Access, name)
    }

    fn encode_token(
        &self,
        user_id: UserId,
        token_type: TokenType,
        name: Option<String>,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
            token_type,
            name,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Validate an access token and return the claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if !claims.is_access_token() {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}
