use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;

use syncsalez_bus::relay::send;
use syncsalez_bus::subjects::{AUTH_LOGIN, AUTH_REGISTER};
use syncsalez_core::error::AppError;
use syncsalez_domain::user::{LoginCredentials, RegisterUser, SessionToken, UserSummary};

use crate::error::upstream;
use crate::state::AppState;

// ── POST /auth/register ──────────────────────────────────────────────────────

pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterUser>, AppError>,
) -> Result<(StatusCode, Json<UserSummary>), AppError> {
    let user: UserSummary = send(state.relay.as_ref(), AUTH_REGISTER, &body)
        .await
        .map_err(upstream)?;
    Ok((StatusCode::CREATED, Json(user)))
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<LoginCredentials>, AppError>,
) -> Result<Json<SessionToken>, AppError> {
    let token: SessionToken = send(state.relay.as_ref(), AUTH_LOGIN, &body)
        .await
        .map_err(upstream)?;
    Ok(Json(token))
}
