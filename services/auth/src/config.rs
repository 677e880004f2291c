use syncsalez_bus::subjects::DEFAULT_NATS_SERVER;

/// Auth service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing session tokens.
    pub jwt_secret: String,
    /// Message-bus URL. Env var: `NATS_SERVER`.
    pub nats_server: String,
    /// TCP port for the health endpoints (default 3101). Env var: `AUTH_PORT`.
    pub auth_port: u16,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            nats_server: std::env::var("NATS_SERVER")
                .unwrap_or_else(|_| DEFAULT_NATS_SERVER.to_owned()),
            auth_port: std::env::var("AUTH_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3101),
        }
    }
}
