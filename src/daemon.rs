use axum::async_trait;
use std::{future::Future, time::Duration};
use thiserror::Error;

pub mod rpc;

#[derive(Error, Debug)]
pub enum DaemonError {
    #[error("daemon request failed: {0}")]
    Transport(String),

    #[error("daemon answered with HTTP status {0}")]
    Status(u16),

    #[error("daemon returned error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("unexpected daemon response: {0}")]
    Protocol(String),

    #[error("`{method}` did not complete within {secs} seconds")]
    Timeout { method: &'static str, secs: u64 },
}

/// The RPC surface of the coin daemon that the faucet relies on.
#[async_trait]
pub trait LedgerDaemon: Send + Sync {
    async fn validate_address(&self, address: &str) -> Result<bool, DaemonError>;

    /// Returns the id of the broadcast transaction.
    async fn send_to_address(
        &self,
        address: &str,
        amount: f64,
        comment: &str,
        comment_to: &str,
    ) -> Result<String, DaemonError>;

    async fn get_balance(&self, account: &str, min_confirmations: u32)
        -> Result<f64, DaemonError>;

    async fn get_block_count(&self) -> Result<u64, DaemonError>;
}

/// Runs a single daemon call, giving up once `timeout` elapses.
pub async fn with_timeout<T>(
    method: &'static str,
    timeout: Duration,
    call: impl Future<Output = Result<T, DaemonError>>,
) -> Result<T, DaemonError> {
    tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| DaemonError::Timeout {
            method,
            secs: timeout.as_secs(),
        })?
}
