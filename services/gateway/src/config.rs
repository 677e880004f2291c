use syncsalez_bus::subjects::DEFAULT_NATS_SERVER;

/// Gateway configuration loaded from environment variables.
#[derive(Debug)]
pub struct GatewayConfig {
    /// HMAC secret for verifying session tokens.
    pub jwt_secret: String,
    /// Message-bus URL. Env var: `NATS_SERVER`.
    pub nats_server: String,
    /// TCP port to listen on (default 3000). Env var: `GATEWAY_PORT`.
    pub gateway_port: u16,
    /// Enables the direct user-directory routes when set.
    pub database_url: Option<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            nats_server: std::env::var("NATS_SERVER")
                .unwrap_or_else(|_| DEFAULT_NATS_SERVER.to_owned()),
            gateway_port: std::env::var("GATEWAY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
        }
    }
}
