//! Authentication errors.

use super::error_code::{self, CarbonErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,
}

impl CarbonErrorCode for AuthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => error_code::UNAUTHENTICATED,
            Self::TokenExpired => error_code::TOKEN_EXPIRED,
            Self::InvalidToken => error_code::INVALID_TOKEN,
        }
    }
}
