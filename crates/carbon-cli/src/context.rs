//! Resolved configuration, open store, and auth for one invocation.

use std::path::PathBuf;
use std::sync::Arc;

use carbon_analysis::CarbonService;
use carbon_core::auth::{AuthChain, AuthContext, AuthRequest, TokenAuth};
use carbon_core::config::{CarbonConfig, CliOverrides};
use carbon_storage::SqliteStore;

use crate::{Cli, CliError};

pub struct AppContext {
    pub config: CarbonConfig,
    pub store: Arc<SqliteStore>,
    token: Option<String>,
}

impl AppContext {
    pub fn load(cli: &Cli) -> Result<Self, CliError> {
        let root = cli
            .config_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let overrides = CliOverrides {
            db_path: cli.db.clone(),
            human_factor_from_table: cli.human_factor_from_table.then_some(true),
            ..Default::default()
        };
        let config = CarbonConfig::load(&root, Some(&overrides))?;
        let store = Arc::new(SqliteStore::from_config(&config.storage)?);
        tracing::debug!(db = %config.storage.effective_db_path().display(), "store opened");

        Ok(Self {
            config,
            store,
            token: cli.token.clone(),
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.config.storage.effective_db_path()
    }

    /// Token verifier for the configured secret, if any.
    pub fn token_auth(&self) -> Result<TokenAuth, CliError> {
        let secret = self.config.auth.require_secret()?;
        Ok(TokenAuth::new(
            secret,
            self.config.auth.effective_token_ttl_hours(),
        ))
    }

    /// Service whose mutations accept tokens signed with the configured
    /// secret. Without a secret every mutation is unauthenticated.
    pub fn service(&self) -> CarbonService {
        let mut chain = AuthChain::new();
        if let Ok(tokens) = self.token_auth() {
            chain = chain.with(tokens);
        }
        let auth: Arc<dyn AuthContext> = Arc::new(chain);
        CarbonService::from_config(self.store.clone(), auth, &self.config)
    }

    /// The caller's credentials as an auth request.
    pub fn request(&self) -> AuthRequest {
        match self.token.as_deref() {
            Some(token) => AuthRequest::with_bearer(token),
            None => AuthRequest::default(),
        }
    }
}
