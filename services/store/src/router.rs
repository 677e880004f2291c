use axum::Router;
use tower_http::trace::TraceLayer;

use syncsalez_core::health::health_routes;

pub fn build_router() -> Router {
    health_routes().layer(TraceLayer::new_for_http())
}
