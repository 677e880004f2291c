use axum::http::StatusCode;

use syncsalez_bus::relay::RelayError;
use syncsalez_core::error::AppError;

/// Surface a relay failure at the HTTP boundary.
///
/// Client errors reported by a backend keep their status. Backend 5xx and
/// transport failures become 500 carrying the upstream message.
pub fn upstream(e: RelayError) -> AppError {
    match e {
        RelayError::Remote(reply) => {
            let status = StatusCode::from_u16(reply.status)
                .ok()
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            AppError::Upstream {
                status,
                message: reply.message,
            }
        }
        other => AppError::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: other.to_string(),
        },
    }
}
