use super::model::AuthenticatedClient;
use crate::core::error::AppError;

/// Validates `Authorization` headers against the configured API tokens.
///
/// Both the `Token <key>` scheme and `Bearer <key>` are accepted.
pub struct TokenValidator {
    tokens: Vec<String>,
}

impl TokenValidator {
    pub fn new(tokens: Vec<String>) -> Self {
        if tokens.is_empty() {
            tracing::warn!("No API tokens configured; write endpoints will reject every request");
        }
        Self { tokens }
    }

    pub fn validate_header(&self, header: &str) -> Result<AuthenticatedClient, AppError> {
        let token = header
            .strip_prefix("Token ")
            .or_else(|| header.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or_else(|| {
                AppError::Unauthorized("Invalid authorization header format".to_string())
            })?;

        self.validate_token(token)
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedClient, AppError> {
        if token.is_empty() || !self.tokens.iter().any(|t| t == token) {
            tracing::debug!("Rejected API token");
            return Err(AppError::Unauthorized("Invalid token".to_string()));
        }

        Ok(AuthenticatedClient::from_token(token))
    }
}
