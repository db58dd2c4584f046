//! Session token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying the user id and admin flag with a fixed
//! seven day lifetime. There is no refresh; an expired token means a new login.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError},
    model::user::User,
};

/// Lifetime of a session token.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,
    pub admin: bool,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for `user`.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(InternalError::TokenSigning)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            admin: user.is_admin,
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
        };

        self.sign(&claims)
    }

    /// Verifies signature and expiry of a token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::ExpiredToken)` - Signature valid but `exp` has passed
    /// - `Err(AuthError::InvalidToken)` - Malformed token or bad signature
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })
    }

    fn sign(&self, claims: &Claims) -> Result<String, InternalError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(InternalError::TokenSigning)
    }
}
