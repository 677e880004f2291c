use axum::{Router, http::StatusCode, routing::get};

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`: readiness check.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// `/healthz` + `/readyz` for any router state.
///
/// Merge into a service router, or serve alone from backends whose real work
/// happens on the message bus.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
