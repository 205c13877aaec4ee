//! Ordered composition of auth contexts.

use super::{AuthContext, AuthRequest, UserId};
use crate::errors::AuthError;

/// Tries each context in order and returns the first user found.
///
/// If no context accepts the request, a specific rejection (expired or
/// invalid token) wins over the generic `Unauthenticated`.
#[derive(Default)]
pub struct AuthChain {
    contexts: Vec<Box<dyn AuthContext>>,
}

impl AuthChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, context: impl AuthContext + 'static) -> Self {
        self.contexts.push(Box::new(context));
        self
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl AuthContext for AuthChain {
    fn authenticate(&self, request: &AuthRequest) -> Result<UserId, AuthError> {
        let mut rejection = AuthError::Unauthenticated;
        for context in &self.contexts {
            match context.authenticate(request) {
                Ok(user) => return Ok(user),
                Err(AuthError::Unauthenticated) => {}
                Err(e) => rejection = e,
            }
        }
        tracing::warn!(error = %rejection, "request rejected by every auth context");
        Err(rejection)
    }
}
