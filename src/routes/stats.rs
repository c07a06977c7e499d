use crate::{models::*, routes::daemon_error, stats::StatsReporter, SharedConfig, SharedDaemon};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

impl IntoResponse for StatsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[tracing::instrument(skip_all)]
pub async fn handler(
    Extension(daemon): Extension<SharedDaemon>,
    Extension(config): Extension<SharedConfig>,
) -> Result<StatsResponse, ApiError> {
    StatsReporter::new(daemon, &config)
        .get_stats()
        .await
        .map_err(daemon_error)
}
