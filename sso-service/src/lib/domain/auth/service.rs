use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::OnceCell;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppRepository;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialHasher;
use crate::domain::auth::ports::TokenIssuer;
use crate::domain::auth::ports::UserRepository;

/// Plaintext behind the decoy hash checked when no user matches an email.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Authentication engine.
///
/// Classifies every collaborator failure exactly once into `AuthError`; the
/// transports only translate the resulting kind.
pub struct AuthService<UR, AR, H, T>
where
    UR: UserRepository,
    AR: AppRepository,
    H: CredentialHasher,
    T: TokenIssuer,
{
    users: Arc<UR>,
    apps: Arc<AR>,
    hasher: Arc<H>,
    token_issuer: Arc<T>,
    token_ttl: Duration,
    // Hashed lazily with `hasher`; verified against on unknown emails.
    decoy_hash: OnceCell<String>,
}

impl<UR, AR, H, T> AuthService<UR, AR, H, T>
where
    UR: UserRepository,
    AR: AppRepository,
    H: CredentialHasher,
    T: TokenIssuer,
{
    /// Create a new authentication engine with injected collaborators.
    ///
    /// # Arguments
    /// * `users` - User persistence
    /// * `apps` - Application lookup
    /// * `hasher` - Password hashing
    /// * `token_issuer` - Token signing
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(
        users: Arc<UR>,
        apps: Arc<AR>,
        hasher: Arc<H>,
        token_issuer: Arc<T>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            apps,
            hasher,
            token_issuer,
            token_ttl,
            decoy_hash: OnceCell::new(),
        }
    }

    async fn verify_decoy(&self, password: &str) {
        let decoy = self
            .decoy_hash
            .get_or_try_init(|| async { self.hasher.hash(DECOY_PASSWORD) })
            .await;

        match decoy {
            Ok(hash) => {
                let _ = self.hasher.verify(password, hash);
            }
            Err(e) => tracing::error!(error = %e, "failed to prepare decoy hash"),
        }
    }
}

#[async_trait]
impl<UR, AR, H, T> AuthServicePort for AuthService<UR, AR, H, T>
where
    UR: UserRepository,
    AR: AppRepository,
    H: CredentialHasher,
    T: TokenIssuer,
{
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        const OP: &str = "auth.login";

        tracing::info!(op = OP, email = %command.email, app_id = %command.app_id, "attempting to login");

        let user = self
            .users
            .find_by_email(&command.email)
            .await
            .map_err(|e| {
                tracing::error!(op = OP, email = %command.email, error = %e, "failed to load user");
                AuthError::DatabaseError(e.to_string())
            })?;

        let Some(user) = user else {
            tracing::warn!(op = OP, email = %command.email, "user not found");
            self.verify_decoy(command.password.expose()).await;
            return Err(AuthError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify(command.password.expose(), &user.password_hash)
            .map_err(|e| {
                tracing::error!(op = OP, user_id = %user.id, error = %e, "failed to verify password");
                AuthError::from(e)
            })?;

        if !matches {
            tracing::warn!(op = OP, user_id = %user.id, "invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let app = self
            .apps
            .find_by_id(&command.app_id)
            .await
            .map_err(|e| {
                tracing::error!(op = OP, app_id = %command.app_id, error = %e, "failed to load app");
                AuthError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                tracing::error!(op = OP, app_id = %command.app_id, "app not found");
                AuthError::AppNotFound(command.app_id)
            })?;

        let token = self
            .token_issuer
            .issue(&user, &app, self.token_ttl)
            .map_err(|e| {
                tracing::error!(op = OP, user_id = %user.id, app_id = %app.id, error = %e, "failed to issue token");
                AuthError::from(e)
            })?;

        tracing::info!(op = OP, user_id = %user.id, app_id = %app.id, "user logged in");

        Ok(token)
    }

    async fn register_new_user(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        const OP: &str = "auth.register_new_user";

        tracing::info!(op = OP, email = %command.email, "registering user");

        let password_hash = self.hasher.hash(command.password.expose()).map_err(|e| {
            tracing::error!(op = OP, email = %command.email, error = %e, "failed to hash password");
            AuthError::from(e)
        })?;

        let user_id = self
            .users
            .save(&command.email, &password_hash)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => {
                    tracing::warn!(op = OP, email = %command.email, "user already exists");
                    AuthError::UserAlreadyExists(command.email.to_string())
                }
                StoreError::Database(msg) => {
                    tracing::error!(op = OP, email = %command.email, error = %msg, "failed to save user");
                    AuthError::DatabaseError(msg)
                }
            })?;

        tracing::info!(op = OP, user_id = %user_id, "user registered");

        Ok(user_id)
    }

    async fn is_admin(&self, user_id: &UserId) -> Result<bool, AuthError> {
        const OP: &str = "auth.is_admin";

        tracing::info!(op = OP, user_id = %user_id, "checking if user is admin");

        let is_admin = self
            .users
            .is_admin(user_id)
            .await
            .map_err(|e| {
                tracing::error!(op = OP, user_id = %user_id, error = %e, "failed to load admin flag");
                AuthError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                tracing::warn!(op = OP, user_id = %user_id, "user not found");
                AuthError::UserNotFound(*user_id)
            })?;

        tracing::info!(op = OP, user_id = %user_id, is_admin, "checked admin flag");

        Ok(is_admin)
    }
}
