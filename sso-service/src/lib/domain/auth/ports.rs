use async_trait::async_trait;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::PasswordError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication engine operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify a credential and issue a session token for the requesting app.
    ///
    /// # Arguments
    /// * `command` - Email, plaintext password and application identifier
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (deliberately conflated)
    /// * `AppNotFound` - Application does not exist
    /// * `Password` / `Token` / `DatabaseError` - Collaborator failure
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated email and plaintext password
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Password` / `DatabaseError` - Collaborator failure
    async fn register_new_user(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Report whether a user holds the admin flag.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this identifier
    /// * `DatabaseError` - Store failure
    async fn is_admin(&self, user_id: &UserId) -> Result<bool, AuthError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user and return the assigned identifier.
    ///
    /// Uniqueness of `email` must be enforced atomically by the store.
    ///
    /// # Errors
    /// * `Duplicate` - Email is already registered
    /// * `Database` - Database operation failed
    async fn save(&self, email: &str, password_hash: &str) -> Result<UserId, StoreError>;

    /// Retrieve user by email address (None if not found).
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Admin flag of a user (None if the user does not exist).
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn is_admin(&self, id: &UserId) -> Result<Option<bool>, StoreError>;
}

/// Read access to registered client applications.
#[async_trait]
pub trait AppRepository: Send + Sync + 'static {
    /// Retrieve application by identifier (None if not found).
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: &AppId) -> Result<Option<App>, StoreError>;
}

/// One-way password hashing.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Salted hash of a plaintext password.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Constant-time comparison of a plaintext password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// Signed session token minting.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Produce a token carrying the user's identity, the application and an
    /// expiry `ttl` after issuance, signed for `app`.
    fn issue(&self, user: &User, app: &App, ttl: Duration) -> Result<String, TokenError>;
}
