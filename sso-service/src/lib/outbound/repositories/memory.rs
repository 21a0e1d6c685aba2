use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::StoreError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppRepository;
use crate::domain::auth::ports::UserRepository;

/// Process-local credential store for tests and local runs.
///
/// Email uniqueness is checked and the user inserted under one write lock,
/// so concurrent registrations of the same address cannot both succeed.
pub struct InMemoryCredentialStore {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    last_user_id: i64,
    users_by_email: HashMap<String, StoredUser>,
    apps: HashMap<AppId, App>,
}

struct StoredUser {
    user: User,
    is_admin: bool,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }

    /// Store pre-populated with client applications.
    pub fn with_apps(apps: impl IntoIterator<Item = App>) -> Self {
        let state = State {
            apps: apps.into_iter().map(|app| (app.id, app)).collect(),
            ..State::default()
        };

        Self {
            state: RwLock::new(state),
        }
    }

    /// Set the admin flag of an existing user. Returns false if the user is unknown.
    pub async fn set_admin(&self, id: &UserId, is_admin: bool) -> bool {
        let mut state = self.state.write().await;

        match state
            .users_by_email
            .values_mut()
            .find(|stored| stored.user.id == *id)
        {
            Some(stored) => {
                stored.is_admin = is_admin;
                true
            }
            None => false,
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryCredentialStore {
    async fn save(&self, email: &str, password_hash: &str) -> Result<UserId, StoreError> {
        let mut state = self.state.write().await;

        if state.users_by_email.contains_key(email) {
            return Err(StoreError::Duplicate(email.to_string()));
        }

        state.last_user_id += 1;
        let id = UserId(state.last_user_id);

        state.users_by_email.insert(
            email.to_string(),
            StoredUser {
                user: User {
                    id,
                    email: email.to_string(),
                    password_hash: password_hash.to_string(),
                },
                is_admin: false,
            },
        );

        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let state = self.state.read().await;

        Ok(state
            .users_by_email
            .get(email)
            .map(|stored| stored.user.clone()))
    }

    async fn is_admin(&self, id: &UserId) -> Result<Option<bool>, StoreError> {
        let state = self.state.read().await;

        Ok(state
            .users_by_email
            .values()
            .find(|stored| stored.user.id == *id)
            .map(|stored| stored.is_admin))
    }
}

#[async_trait]
impl AppRepository for InMemoryCredentialStore {
    async fn find_by_id(&self, id: &AppId) -> Result<Option<App>, StoreError> {
        Ok(self.state.read().await.apps.get(id).cloned())
    }
}
