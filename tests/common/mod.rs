#![allow(dead_code)]

use axum::async_trait;
use coin_faucet::{config::Config, daemon::LedgerDaemon, start_server, DaemonError};
use std::collections::{HashSet, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SendCall {
    pub address: String,
    pub amount: f64,
    pub comment: String,
    pub comment_to: String,
}

#[derive(Debug, Default)]
struct MockState {
    valid_addresses: HashSet<String>,
    txids: VecDeque<String>,
    balance: f64,
    blocks: u64,
    unreachable: bool,
    delay: Option<Duration>,
    validate_calls: Vec<String>,
    send_calls: Vec<SendCall>,
    balance_calls: Vec<(String, u32)>,
    block_count_calls: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MockDaemon {
    state: Arc<Mutex<MockState>>,
}

impl MockDaemon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_address(&self, address: &str) {
        self.state
            .lock()
            .unwrap()
            .valid_addresses
            .insert(address.to_string());
    }

    pub fn queue_txid(&self, txid: &str) {
        self.state.lock().unwrap().txids.push_back(txid.to_string());
    }

    pub fn set_chain_state(&self, balance: f64, blocks: u64) {
        let mut state = self.state.lock().unwrap();
        state.balance = balance;
        state.blocks = blocks;
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.state.lock().unwrap().unreachable = unreachable;
    }

    pub fn set_delay(&self, delay: Option<Duration>) {
        self.state.lock().unwrap().delay = delay;
    }

    pub fn validate_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().validate_calls.clone()
    }

    pub fn send_calls(&self) -> Vec<SendCall> {
        self.state.lock().unwrap().send_calls.clone()
    }

    pub fn balance_calls(&self) -> Vec<(String, u32)> {
        self.state.lock().unwrap().balance_calls.clone()
    }

    pub fn block_count_calls(&self) -> usize {
        self.state.lock().unwrap().block_count_calls
    }

    async fn before_call(&self) -> Result<(), DaemonError> {
        let (unreachable, delay) = {
            let state = self.state.lock().unwrap();
            (state.unreachable, state.delay)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if unreachable {
            return Err(DaemonError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerDaemon for MockDaemon {
    async fn validate_address(&self, address: &str) -> Result<bool, DaemonError> {
        self.before_call().await?;
        let mut state = self.state.lock().unwrap();
        state.validate_calls.push(address.to_string());
        Ok(state.valid_addresses.contains(address))
    }

    async fn send_to_address(
        &self,
        address: &str,
        amount: f64,
        comment: &str,
        comment_to: &str,
    ) -> Result<String, DaemonError> {
        self.before_call().await?;
        let mut state = self.state.lock().unwrap();
        state.send_calls.push(SendCall {
            address: address.to_string(),
            amount,
            comment: comment.to_string(),
            comment_to: comment_to.to_string(),
        });
        let sent = state.send_calls.len();
        Ok(state
            .txids
            .pop_front()
            .unwrap_or_else(|| format!("txid-{sent}")))
    }

    async fn get_balance(
        &self,
        account: &str,
        min_confirmations: u32,
    ) -> Result<f64, DaemonError> {
        self.before_call().await?;
        let mut state = self.state.lock().unwrap();
        state
            .balance_calls
            .push((account.to_string(), min_confirmations));
        Ok(state.balance)
    }

    async fn get_block_count(&self) -> Result<u64, DaemonError> {
        self.before_call().await?;
        let mut state = self.state.lock().unwrap();
        state.block_count_calls += 1;
        Ok(state.blocks)
    }
}

pub struct TestContext {
    pub faucet_config: Config,
    pub daemon: MockDaemon,
    pub addr: SocketAddr,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_config(Config {
            service_port: 0,
            dispense_amount: 50,
            stats_total_sent: 100,
            timeout: 1,
            ..Default::default()
        })
        .await
    }

    pub async fn with_config(faucet_config: Config) -> Self {
        let daemon = MockDaemon::new();
        let (addr, _) = start_server(faucet_config.clone(), daemon.clone())
            .await
            .expect("server should start");

        Self {
            faucet_config,
            daemon,
            addr,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}
