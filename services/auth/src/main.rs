use sea_orm::Database;
use tracing::info;

use syncsalez_auth::config::AuthConfig;
use syncsalez_auth::router::build_router;
use syncsalez_auth::state::AppState;
use syncsalez_bus::server::serve;
use syncsalez_bus::subjects::{AUTH_QUEUE_GROUP, AUTH_SUBJECTS};
use syncsalez_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let nats = async_nats::connect(config.nats_server.as_str())
        .await
        .expect("failed to connect to NATS");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
    };

    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(nats = %config.nats_server, "auth service listening on {addr}");
    tokio::select! {
        res = serve(nats, AUTH_QUEUE_GROUP, AUTH_SUBJECTS, state.bus_handler()) => {
            res.expect("bus subscription failed");
        }
        res = axum::serve(listener, build_router()) => res.expect("server error"),
    }
}
