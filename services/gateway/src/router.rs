use axum::{Router, middleware::from_fn_with_state, routing::post};
use tower_http::trace::TraceLayer;

use syncsalez_auth_types::session::require_session;
use syncsalez_core::health::health_routes;
use syncsalez_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    auth::{login, register},
    store::{create_store, verify_store},
};
use crate::state::AppState;

/// Health, auth and store routes. `/stores/*` sits behind the session gate.
pub fn api_routes(state: AppState) -> Router {
    let stores = Router::new()
        .route("/stores/create-store", post(create_store))
        .route("/stores/{id}/verify", post(verify_store))
        .route_layer(from_fn_with_state(
            state.session_key.clone(),
            require_session,
        ));

    Router::new()
        .merge(health_routes())
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        // Stores
        .merge(stores)
        .with_state(state)
}

/// Full gateway router. `directory` holds the optional direct-database routes.
pub fn build_router(state: AppState, directory: Option<Router>) -> Router {
    let mut router = api_routes(state);
    if let Some(directory) = directory {
        router = router.merge(directory);
    }
    router
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
}
