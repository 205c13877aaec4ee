use carbon_core::auth::UserId;
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::{CliError, TokenAction};

pub fn run(ctx: &AppContext, action: TokenAction) -> Result<Value, CliError> {
    match action {
        TokenAction::Issue { user } => {
            let tokens = ctx.token_auth()?;
            let token = tokens.issue(UserId(user));
            Ok(json!({
                "token": token,
                "user_id": user,
                "ttl_hours": ctx.config.auth.effective_token_ttl_hours(),
            }))
        }
    }
}
