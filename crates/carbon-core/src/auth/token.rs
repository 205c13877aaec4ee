//! Signed bearer tokens: `<user_id>.<expires_unix>.<signature>`.
//!
//! The signature is a blake3 keyed hash over `<user_id>.<expires_unix>`,
//! keyed by a key derived from the configured secret.

use chrono::{DateTime, Duration, Utc};

use super::{AuthContext, AuthRequest, UserId};
use crate::errors::AuthError;

const KEY_CONTEXT: &str = "carbon-ledger bearer token v1";

pub struct TokenAuth {
    key: [u8; 32],
    ttl: Duration,
}

impl TokenAuth {
    pub fn new(secret: &str, ttl_hours: u32) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()),
            ttl: Duration::hours(i64::from(ttl_hours)),
        }
    }

    pub fn issue(&self, user: UserId) -> String {
        self.issue_at(user, Utc::now())
    }

    pub fn issue_at(&self, user: UserId, now: DateTime<Utc>) -> String {
        let expires = (now + self.ttl).timestamp();
        let payload = format!("{user}.{expires}");
        let signature = blake3::keyed_hash(&self.key, payload.as_bytes());
        format!("{payload}.{}", signature.to_hex())
    }

    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, AuthError> {
        let mut parts = token.splitn(3, '.');
        let (Some(user), Some(expires), Some(signature)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::InvalidToken);
        };

        let presented = blake3::Hash::from_hex(signature).map_err(|_| AuthError::InvalidToken)?;
        let expected = blake3::keyed_hash(&self.key, format!("{user}.{expires}").as_bytes());
        // blake3::Hash equality is constant-time.
        if presented != expected {
            return Err(AuthError::InvalidToken);
        }

        let user: i64 = user.parse().map_err(|_| AuthError::InvalidToken)?;
        let expires: i64 = expires.parse().map_err(|_| AuthError::InvalidToken)?;
        if expires <= now.timestamp() {
            return Err(AuthError::TokenExpired);
        }
        Ok(UserId(user))
    }
}

impl std::fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuth")
            .field("ttl_hours", &self.ttl.num_hours())
            .finish_non_exhaustive()
    }
}

impl AuthContext for TokenAuth {
    fn authenticate(&self, request: &AuthRequest) -> Result<UserId, AuthError> {
        match request.bearer_token() {
            Some(token) => self.verify(token),
            None => Err(AuthError::Unauthenticated),
        }
    }
}
