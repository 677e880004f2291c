use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use syncsalez_auth_types::token::Identity;
use syncsalez_bus::messages::{CreateStoreRequest, VerifyStoreRequest};
use syncsalez_bus::relay::send;
use syncsalez_bus::subjects::{STORE_CREATE, STORE_VERIFY};
use syncsalez_core::error::AppError;
use syncsalez_domain::id::StoreId;
use syncsalez_domain::store::{CreateStore, StoreSummary};

use crate::error::upstream;
use crate::state::AppState;

// ── POST /stores/create-store ────────────────────────────────────────────────

/// The creator is always the session's user, never a body field.
pub async fn create_store(
    identity: Identity,
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateStore>, AppError>,
) -> Result<(StatusCode, Json<StoreSummary>), AppError> {
    body.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let request = CreateStoreRequest {
        create_store_dto: body,
        user_id: identity.user_id,
    };
    let store: StoreSummary = send(state.relay.as_ref(), STORE_CREATE, &request)
        .await
        .map_err(upstream)?;
    Ok((StatusCode::CREATED, Json(store)))
}

// ── POST /stores/{id}/verify ─────────────────────────────────────────────────

pub async fn verify_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoreSummary>, AppError> {
    let id: StoreId = id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("id must be a UUID, got {id:?}")))?;
    let store: StoreSummary = send(state.relay.as_ref(), STORE_VERIFY, &VerifyStoreRequest { id })
        .await
        .map_err(upstream)?;
    Ok(Json(store))
}
