use sea_orm::Database;
use tracing::info;

use syncsalez_bus::server::serve;
use syncsalez_bus::subjects::{STORE_QUEUE_GROUP, STORE_SUBJECTS};
use syncsalez_core::tracing::init_tracing;
use syncsalez_store::config::StoreConfig;
use syncsalez_store::router::build_router;
use syncsalez_store::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = StoreConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let nats = async_nats::connect(config.nats_server.as_str())
        .await
        .expect("failed to connect to NATS");

    let state = AppState { db };

    let addr = format!("0.0.0.0:{}", config.store_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(nats = %config.nats_server, "store service listening on {addr}");
    tokio::select! {
        res = serve(nats, STORE_QUEUE_GROUP, STORE_SUBJECTS, state.bus_handler()) => {
            res.expect("bus subscription failed");
        }
        res = axum::serve(listener, build_router()) => res.expect("server error"),
    }
}
