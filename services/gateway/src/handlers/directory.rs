//! Direct user-directory routes. They call the auth workflow in-process
//! against the database instead of going through the bus.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;

use syncsalez_auth::domain::repository::UserRepository;
use syncsalez_auth::usecase::user::{FindUserByEmailUseCase, RegisterUseCase};
use syncsalez_core::error::AppError;
use syncsalez_domain::user::{RegisterUser, UserSummary};

// ── POST /auth/create-user ───────────────────────────────────────────────────

pub async fn create_user<R>(
    State(repo): State<R>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterUser>, AppError>,
) -> Result<(StatusCode, Json<UserSummary>), AppError>
where
    R: UserRepository + Clone + 'static,
{
    let user = RegisterUseCase { repo }.execute(body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// ── GET /auth/find-user-by-email/{email} ─────────────────────────────────────

pub async fn find_user_by_email<R>(
    State(repo): State<R>,
    Path(email): Path<String>,
) -> Result<Json<UserSummary>, AppError>
where
    R: UserRepository + Clone + 'static,
{
    let user = FindUserByEmailUseCase { repo }.execute(&email).await?;
    Ok(Json(user))
}

pub fn directory_routes<R>(repo: R) -> Router
where
    R: UserRepository + Clone + 'static,
{
    Router::new()
        .route("/auth/create-user", post(create_user::<R>))
        .route("/auth/find-user-by-email/{email}", get(find_user_by_email::<R>))
        .with_state(repo)
}
