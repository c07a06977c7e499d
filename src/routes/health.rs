use std::time::{SystemTime, UNIX_EPOCH};

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use serde_json::json;
use tracing::warn;

use crate::{daemon::with_timeout, SharedConfig, SharedDaemon};

lazy_static::lazy_static! {
    static ref START_TIME: u64 = now_millis();
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Records the process start time. Called once when the server starts.
pub fn mark_start() {
    lazy_static::initialize(&START_TIME);
}

#[tracing::instrument(skip_all)]
pub async fn handler(
    Extension(daemon): Extension<SharedDaemon>,
    Extension(config): Extension<SharedConfig>,
) -> impl IntoResponse {
    // ping the daemon for health
    let daemon_up =
        match with_timeout("getblockcount", config.rpc_timeout(), daemon.get_block_count()).await {
            Ok(_) => true,
            Err(e) => {
                warn!("daemon health check failed: {}", e);
                false
            }
        };

    let status = if daemon_up {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(json!({
            "up": true,
            "uptime": now_millis().saturating_sub(*START_TIME),
            "daemon": daemon_up,
        })),
    )
}
