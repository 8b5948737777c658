use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API client resolved from a valid token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedClient {
    /// Last characters of the presented token, safe to log
    pub token_hint: String,
}

impl AuthenticatedClient {
    pub fn from_token(token: &str) -> Self {
        let skip = token.chars().count().saturating_sub(4);
        Self {
            token_hint: format!("...{}", token.chars().skip(skip).collect::<String>()),
        }
    }
}
