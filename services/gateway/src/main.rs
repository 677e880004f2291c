use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use syncsalez_auth::infra::db::DbUserRepository;
use syncsalez_auth_types::session::SessionKey;
use syncsalez_bus::relay::NatsRelay;
use syncsalez_core::tracing::init_tracing;
use syncsalez_gateway::config::GatewayConfig;
use syncsalez_gateway::handlers::directory::directory_routes;
use syncsalez_gateway::router::build_router;
use syncsalez_gateway::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = GatewayConfig::from_env();

    let relay = NatsRelay::connect(&config.nats_server)
        .await
        .expect("failed to connect to NATS");

    let directory = match &config.database_url {
        Some(url) => {
            let db = Database::connect(url)
                .await
                .expect("failed to connect to database");
            info!("direct user-directory routes enabled");
            Some(directory_routes(DbUserRepository { db }))
        }
        None => None,
    };

    let state = AppState {
        relay: Arc::new(relay),
        session_key: SessionKey::new(config.jwt_secret),
    };

    let router = build_router(state, directory);
    let addr = format!("0.0.0.0:{}", config.gateway_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(nats = %config.nats_server, "gateway listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
