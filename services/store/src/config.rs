use syncsalez_bus::subjects::DEFAULT_NATS_SERVER;

/// Store service configuration loaded from environment variables.
#[derive(Debug)]
pub struct StoreConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Message-bus URL. Env var: `NATS_SERVER`.
    pub nats_server: String,
    /// TCP port for the health endpoints (default 3102). Env var: `STORE_PORT`.
    pub store_port: u16,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            nats_server: std::env::var("NATS_SERVER")
                .unwrap_or_else(|_| DEFAULT_NATS_SERVER.to_owned()),
            store_port: std::env::var("STORE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3102),
        }
    }
}
