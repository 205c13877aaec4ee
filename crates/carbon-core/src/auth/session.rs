//! In-process session registry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use super::{AuthContext, AuthRequest, UserId};
use crate::errors::AuthError;

#[derive(Debug, Default)]
pub struct SessionAuth {
    sessions: RwLock<HashMap<String, UserId>>,
    counter: AtomicU64,
}

impl SessionAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `user` and return its identifier.
    pub fn open_session(&self, user: UserId) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let seed = format!("{user}:{n}:{nanos}");
        let id = blake3::hash(seed.as_bytes()).to_hex().to_string();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), user);
        id
    }

    /// Forget a session. Returns true if it existed.
    pub fn close_session(&self, session_id: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .is_some()
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl AuthContext for SessionAuth {
    fn authenticate(&self, request: &AuthRequest) -> Result<UserId, AuthError> {
        let Some(id) = request.session_id.as_deref() else {
            return Err(AuthError::Unauthenticated);
        };
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
            .ok_or(AuthError::Unauthenticated)
    }
}
