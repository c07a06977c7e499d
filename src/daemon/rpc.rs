use crate::{
    config::Config,
    constants::RPC_CLIENT_ID,
    daemon::{DaemonError, LedgerDaemon},
};
use axum::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct ValidateAddressResult {
    #[serde(rename = "isvalid")]
    is_valid: bool,
}

/// JSON-RPC 1.0 client for a bitcoind-compatible wallet daemon.
#[derive(Debug)]
pub struct RpcDaemon {
    client: Client,
    url: String,
    user: String,
    password: Secret<String>,
}

impl RpcDaemon {
    pub fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: config.daemon_url(),
            user: config.daemon_user.clone(),
            password: config.daemon_password.clone(),
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, DaemonError> {
        let payload = json!({
            "jsonrpc": "1.0",
            "id": RPC_CLIENT_ID,
            "method": method,
            "params": params,
        });
        debug!("calling daemon method {}", method);

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.user, Some(self.password.expose_secret()))
            .json(&payload)
            .send()
            .await
            .map_err(|e| DaemonError::Transport(e.to_string()))?;

        // bitcoind reports RPC errors with a non-2xx status and a JSON body,
        // so the body has to be inspected before the status.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| DaemonError::Transport(e.to_string()))?;

        let parsed: RpcResponse<T> = match serde_json::from_slice(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => return Err(DaemonError::Status(status.as_u16())),
            Err(e) => return Err(DaemonError::Protocol(e.to_string())),
        };

        if let Some(error) = parsed.error {
            return Err(DaemonError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        parsed
            .result
            .ok_or_else(|| DaemonError::Protocol(format!("`{method}` returned no result")))
    }
}

#[async_trait]
impl LedgerDaemon for RpcDaemon {
    async fn validate_address(&self, address: &str) -> Result<bool, DaemonError> {
        let result: ValidateAddressResult = self.call("validateaddress", json!([address])).await?;
        Ok(result.is_valid)
    }

    async fn send_to_address(
        &self,
        address: &str,
        amount: f64,
        comment: &str,
        comment_to: &str,
    ) -> Result<String, DaemonError> {
        self.call(
            "sendtoaddress",
            json!([address, amount, comment, comment_to]),
        )
        .await
    }

    async fn get_balance(
        &self,
        account: &str,
        min_confirmations: u32,
    ) -> Result<f64, DaemonError> {
        self.call("getbalance", json!([account, min_confirmations]))
            .await
    }

    async fn get_block_count(&self) -> Result<u64, DaemonError> {
        self.call("getblockcount", json!([])).await
    }
}
