use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default, Clone)]
pub struct DispenseInput {
    pub address: Option<String>,
}

/// Outcome of a dispense. Exactly one of `error` and `txid` is non-empty.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct DispenseResponse {
    pub error: String,
    pub txid: String,
    pub sentamt: u64,
}

impl DispenseResponse {
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Default::default()
        }
    }

    pub fn sent(txid: String, amount: u64) -> Self {
        Self {
            error: String::new(),
            txid,
            sentamt: amount,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatsResponse {
    pub balance: f64,
    pub blocks: u64,
    pub totalsent: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DispenseInfoResponse {
    pub amount: u64,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
}
