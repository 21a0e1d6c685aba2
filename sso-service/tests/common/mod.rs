#![allow(dead_code)]

use std::sync::Arc;

use auth::Claims;
use auth::JwtHandler;
use chrono::Duration;
use sso_service::domain::auth::models::App;
use sso_service::domain::auth::models::AppId;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::crypto::Argon2CredentialHasher;
use sso_service::outbound::crypto::JwtTokenIssuer;
use sso_service::outbound::repositories::InMemoryCredentialStore;

pub const APP_ID: i64 = 1;
pub const APP_SECRET: &str = "test-app-secret-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_TTL_MINUTES: i64 = 60;

pub type TestAuthService = AuthService<
    InMemoryCredentialStore,
    InMemoryCredentialStore,
    Argon2CredentialHasher,
    JwtTokenIssuer,
>;

/// Test application that spawns a real HTTP server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryCredentialStore>,
    pub service: Arc<TestAuthService>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

pub fn build_service() -> (Arc<InMemoryCredentialStore>, Arc<TestAuthService>) {
    let store = Arc::new(InMemoryCredentialStore::with_apps([App {
        id: AppId(APP_ID),
        name: "test-app".to_string(),
        secret: APP_SECRET.to_string(),
    }]));

    // Low work factor keeps the suite fast; hashes still verify with defaults.
    let hasher = Argon2CredentialHasher::with_params(8 * 1024, 1, 1)
        .expect("Failed to build password hasher");

    let service = Arc::new(AuthService::new(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::new(hasher),
        Arc::new(JwtTokenIssuer::new()),
        Duration::minutes(TOKEN_TTL_MINUTES),
    ));

    (store, service)
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let (store, service) = build_service();

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(Arc::clone(&service));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let jwt_handler =
            JwtHandler::new(APP_SECRET.as_bytes()).expect("Failed to build JWT handler");

        Self {
            address,
            store,
            service,
            api_client: reqwest::Client::new(),
            jwt_handler,
        }
    }

    pub fn grpc(&self) -> AuthGrpcService<TestAuthService> {
        AuthGrpcService::new(Arc::clone(&self.service))
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    pub fn decode_token(&self, token: &str) -> Claims {
        self.jwt_handler
            .decode(token)
            .expect("Token should verify with the app secret")
    }
}
