//! Authentication contexts for mutation entry points.
//!
//! Every context answers the same question: which user sent this request?
//! `AuthChain` composes them so callers can accept a browser session or a
//! bearer token interchangeably.

pub mod chain;
pub mod session;
pub mod token;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AuthError;

pub use chain::AuthChain;
pub use session::SessionAuth;
pub use token::TokenAuth;

/// Authenticated user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The credential-bearing parts of an inbound request.
#[derive(Debug, Clone, Default)]
pub struct AuthRequest {
    /// Session identifier from a cookie or equivalent.
    pub session_id: Option<String>,
    /// Raw `Authorization` header value.
    pub authorization: Option<String>,
}

impl AuthRequest {
    pub fn with_session(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            authorization: None,
        }
    }

    pub fn with_bearer(token: &str) -> Self {
        Self {
            session_id: None,
            authorization: Some(format!("Bearer {token}")),
        }
    }

    /// The bearer token, if the authorization value uses the `Bearer` scheme.
    pub fn bearer_token(&self) -> Option<&str> {
        self.authorization
            .as_deref()
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// A way of resolving a request to a user.
pub trait AuthContext: Send + Sync {
    /// `Err(AuthError::Unauthenticated)` means "no credential of my kind";
    /// other errors mean a credential was present but rejected.
    fn authenticate(&self, request: &AuthRequest) -> Result<UserId, AuthError>;
}

impl<T: AuthContext + ?Sized> AuthContext for std::sync::Arc<T> {
    fn authenticate(&self, request: &AuthRequest) -> Result<UserId, AuthError> {
        (**self).authenticate(request)
    }
}
