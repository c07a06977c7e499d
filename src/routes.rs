use crate::{constants::DAEMON_UNAVAILABLE, daemon::DaemonError, models::ApiError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

pub mod dispense;
pub mod health;
pub mod stats;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "error": self.error
            })),
        )
            .into_response()
    }
}

/// Logs the daemon failure and hides its details from the caller.
pub(crate) fn daemon_error(err: DaemonError) -> ApiError {
    error!("{}", err);
    ApiError {
        status: StatusCode::BAD_GATEWAY,
        error: DAEMON_UNAVAILABLE.to_string(),
    }
}
