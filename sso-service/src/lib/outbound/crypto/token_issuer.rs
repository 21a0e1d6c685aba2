use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use chrono::Duration;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::TokenIssuer;

/// Issues HS256 tokens signed with the requesting application's secret.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtTokenIssuer;

impl JwtTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User, app: &App, ttl: Duration) -> Result<String, TokenError> {
        let handler = JwtHandler::new(app.secret.as_bytes()).map_err(|e| match e {
            JwtError::EmptySecret => TokenError::InvalidSecret(app.id),
            other => TokenError::SigningFailed(other.to_string()),
        })?;

        let claims = Claims::for_session(user.id.0, user.email.clone(), app.id.0, ttl);

        handler
            .encode(&claims)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}
