use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sso_service::config::Config;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::crypto::Argon2CredentialHasher;
use sso_service::outbound::crypto::JwtTokenIssuer;
use sso_service::outbound::repositories::PostgresCredentialStore;
use sso_service::proto::auth_server::AuthServer;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sso_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        grpc_port = config.server.grpc_port,
        token_ttl_minutes = config.token.ttl_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let credential_store = Arc::new(PostgresCredentialStore::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&credential_store),
        Arc::clone(&credential_store),
        Arc::new(Argon2CredentialHasher::new()),
        Arc::new(JwtTokenIssuer::new()),
        config.token.ttl(),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(Arc::clone(&auth_service));
    let http_server =
        tokio::spawn(async move { axum::serve(http_listener, http_application).await });

    let grpc_address: SocketAddr = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(Arc::clone(&auth_service));
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    let grpc_server = tokio::spawn(async move {
        Server::builder()
            .trace_fn(|request| {
                tracing::info_span!(
                    "grpc_request",
                    request_id = %Uuid::new_v4(),
                    path = %request.uri().path(),
                )
            })
            .add_service(AuthServer::new(grpc_service))
            .serve(grpc_address)
            .await
    });

    let (http_result, grpc_result) = tokio::try_join!(http_server, grpc_server)
        .inspect_err(|e| tracing::error!(error = %e, "Server task failed"))?;

    let http_exit = server_exit("http", http_result);
    let grpc_exit = server_exit("grpc", grpc_result);
    http_exit?;
    grpc_exit?;

    tracing::info!("Servers exited successfully");

    Ok(())
}

/// Log and forward the error a server stopped with.
fn server_exit<E>(protocol: &'static str, result: Result<(), E>) -> Result<(), anyhow::Error>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.map_err(|e| {
        tracing::error!(error = %e, protocol, "Server error");
        anyhow::Error::new(e).context(format!("{} server failed", protocol))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_exit_forwards_errors() {
        let err = server_exit("http", Err(std::io::Error::other("address in use"))).unwrap_err();

        assert_eq!(err.to_string(), "http server failed");
        assert_eq!(err.root_cause().to_string(), "address in use");
    }

    #[test]
    fn test_server_exit_clean_shutdown() {
        assert!(server_exit::<std::io::Error>("grpc", Ok(())).is_ok());
    }
}
