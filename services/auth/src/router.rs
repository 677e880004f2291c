use axum::Router;
use tower_http::trace::TraceLayer;

use syncsalez_core::health::health_routes;

/// The auth service serves its workflow over the bus; HTTP only carries probes.
pub fn build_router() -> Router {
    health_routes().layer(TraceLayer::new_for_http())
}
