use async_trait::async_trait;
use chrono::Duration;
use mockall::mock;

use crate::domain::auth::errors::PasswordError;
use crate::domain::auth::errors::StoreError;
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppRepository;
use crate::domain::auth::ports::CredentialHasher;
use crate::domain::auth::ports::TokenIssuer;
use crate::domain::auth::ports::UserRepository;

mock! {
    pub TestUserRepository {}

    #[async_trait]
    impl UserRepository for TestUserRepository {
        async fn save(&self, email: &str, password_hash: &str) -> Result<UserId, StoreError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
        async fn is_admin(&self, id: &UserId) -> Result<Option<bool>, StoreError>;
    }
}

mock! {
    pub TestAppRepository {}

    #[async_trait]
    impl AppRepository for TestAppRepository {
        async fn find_by_id(&self, id: &AppId) -> Result<Option<App>, StoreError>;
    }
}

mock! {
    pub TestCredentialHasher {}

    impl CredentialHasher for TestCredentialHasher {
        fn hash(&self, password: &str) -> Result<String, PasswordError>;
        fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
    }
}

mock! {
    pub TestTokenIssuer {}

    impl TokenIssuer for TestTokenIssuer {
        fn issue(&self, user: &User, app: &App, ttl: Duration) -> Result<String, TokenError>;
    }
}
